use crate::audio::AudioPlayer;
use crate::constants::*;
use crate::state::{ImageSource, StateClass};

/// Owns the widget state and both sounds. All mutation goes through
/// `on_intro`, `play_thicc` and the timer advanced by `update`.
pub struct ThiccController<P: AudioPlayer> {
    intro: P,
    bam: P,

    is_playing: bool,
    image_source: ImageSource,

    // One-shot revert, seconds left. Never cancelled once scheduled.
    revert_in: Option<f32>,
}

impl<P: AudioPlayer> ThiccController<P> {
    pub fn new(intro: P, bam: P) -> Self {
        Self {
            intro,
            bam,
            is_playing: false,
            image_source: ImageSource::Normal,
            revert_in: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn image_source(&self) -> ImageSource {
        self.image_source
    }

    pub fn state_class(&self) -> StateClass {
        StateClass::from_playing(self.is_playing)
    }

    pub fn revert_in(&self) -> Option<f32> {
        self.revert_in
    }

    pub fn on_intro(&mut self) {
        self.image_source = ImageSource::Normal;
        self.intro.rewind();
        self.intro.play();
    }

    /// Starts the thicc animation. Returns false when one is already running.
    pub fn play_thicc(&mut self) -> bool {
        if self.is_playing {
            return false;
        }

        self.is_playing = true;
        self.image_source = ImageSource::Thicc;

        // Both sounds go back to zero before bam starts, so nothing overlaps
        self.intro.rewind();
        self.bam.rewind();
        self.bam.play();

        self.revert_in = Some(ANIMATION_DURATION);
        true
    }

    pub fn update(&mut self, dt: f32) {
        let Some(remaining) = self.revert_in else {
            return;
        };

        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.revert_in = None;
            self.is_playing = false;
            self.image_source = ImageSource::Normal;
        } else {
            self.revert_in = Some(remaining);
        }
    }
}
