use raylib::prelude::*;
use crate::audio::AudioPlayer;
use crate::controller::ThiccController;
use crate::events::{EventBinder, FrameInput, Trigger};
use crate::state::{ImageSource, StateClass};
use crate::visibility::{VisibilityChange, VisibilityTracker};

pub struct Widget<P: AudioPlayer> {
    controller: ThiccController<P>,
    visibility: VisibilityTracker,
    binder: EventBinder,
}

impl<P: AudioPlayer> Widget<P> {
    /// Takes ownership of both sounds and binds the event routing, once.
    pub fn mount(intro: P, bam: P, hidden: bool) -> Self {
        Self {
            controller: ThiccController::new(intro, bam),
            visibility: VisibilityTracker::new(hidden),
            binder: EventBinder::new(),
        }
    }

    pub fn image_source(&self) -> ImageSource {
        self.controller.image_source()
    }

    pub fn state_class(&self) -> StateClass {
        self.controller.state_class()
    }

    pub fn is_playing(&self) -> bool {
        self.controller.is_playing()
    }

    /// Advances the revert timer by the time that already passed, then routes this frame's input.
    /// A trigger read now gets its full animation duration from this frame on.
    pub fn frame(&mut self, input: &FrameInput, image_bounds: Rectangle, dt: f32) {
        let was_playing = self.is_playing();
        self.controller.update(dt);
        if was_playing && !self.is_playing() {
            log::debug!("Back to {}", self.state_class().name());
        }

        for trigger in self.binder.collect(input, image_bounds) {
            self.dispatch(trigger);
        }
    }

    pub fn dispatch(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Load => {
                log::info!("Intro");
                self.controller.on_intro();
            }
            Trigger::Click => self.thicc("click"),
            Trigger::VisibilityChanged { hidden } => match self.visibility.observe(hidden) {
                VisibilityChange::Unchanged => log::trace!("Duplicate visibility event (hidden: {})", hidden),
                VisibilityChange::Hidden => log::debug!("Window hidden"),
                VisibilityChange::Visible => self.thicc("visibility restored"),
            },
        }
    }

    fn thicc(&mut self, cause: &str) {
        if self.controller.play_thicc() {
            log::debug!("Thicc started by {}, class {}", cause, self.state_class().name());
        } else {
            let left = self.controller.revert_in().unwrap_or(0.0);
            log::debug!("Thicc already playing ({:.2}s left), ignoring {}", left, cause);
        }
    }
}
