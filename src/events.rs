use raylib::prelude::*;

/// Something from the outside world that can drive a transition.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Trigger {
    Load,
    Click,
    VisibilityChanged { hidden: bool },
}

/// Window signals sampled once per frame.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct FrameInput {
    pub minimized: bool,
    pub focused: bool,
    pub click: Option<Vector2>,
}

impl FrameInput {
    pub fn poll(rl: &RaylibHandle) -> Self {
        let click = if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            Some(rl.get_mouse_position())
        } else {
            None
        };

        Self {
            minimized: rl.is_window_minimized() || rl.is_window_hidden(),
            focused: rl.is_window_focused(),
            click,
        }
    }

    /// Minimized, hidden or unfocused. Focus loss counts as hidden, so returning to a window
    /// that stayed visible on another monitor still replays the animation.
    pub fn hidden(&self) -> bool {
        self.minimized || !self.focused
    }
}

/// Turns sampled window input into triggers. Built once when the widget mounts.
pub struct EventBinder {
    loaded: bool,
    last_signals: Option<(bool, bool)>,
}

impl EventBinder {
    pub fn new() -> Self {
        Self { loaded: false, last_signals: None }
    }

    pub fn collect(&mut self, input: &FrameInput, image_bounds: Rectangle) -> Vec<Trigger> {
        let mut triggers = Vec::new();

        if !self.loaded {
            self.loaded = true;
            triggers.push(Trigger::Load);
        }

        // Fires whenever either signal flips, so a single hide can be reported twice
        let signals = (input.minimized, input.focused);
        if let Some(last) = self.last_signals {
            if last != signals {
                triggers.push(Trigger::VisibilityChanged { hidden: input.hidden() });
            }
        }
        self.last_signals = Some(signals);

        if let Some(position) = input.click {
            if image_bounds.check_collision_point_rec(position) {
                triggers.push(Trigger::Click);
            }
        }

        triggers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(100.0, 100.0, 200.0, 200.0)
    }

    fn visible() -> FrameInput {
        FrameInput { minimized: false, focused: true, click: None }
    }

    #[test]
    fn test_hidden_includes_focus_loss() {
        assert!(!visible().hidden());
        assert!(FrameInput { focused: false, ..visible() }.hidden());
        assert!(FrameInput { minimized: true, ..visible() }.hidden());
    }

    #[test]
    fn test_load_fires_once() {
        let mut binder = EventBinder::new();
        assert_eq!(binder.collect(&visible(), bounds()), vec![Trigger::Load]);
        assert!(binder.collect(&visible(), bounds()).is_empty());
        assert!(binder.collect(&visible(), bounds()).is_empty());
    }

    #[test]
    fn test_click_inside_image() {
        let mut binder = EventBinder::new();
        binder.collect(&visible(), bounds());

        let inside = FrameInput { click: Some(Vector2::new(150.0, 250.0)), ..visible() };
        assert_eq!(binder.collect(&inside, bounds()), vec![Trigger::Click]);
    }

    #[test]
    fn test_click_outside_image() {
        let mut binder = EventBinder::new();
        binder.collect(&visible(), bounds());

        let outside = FrameInput { click: Some(Vector2::new(10.0, 10.0)), ..visible() };
        assert!(binder.collect(&outside, bounds()).is_empty());
    }

    #[test]
    fn test_visibility_reported_on_signal_change() {
        let mut binder = EventBinder::new();
        binder.collect(&visible(), bounds());

        let blurred = FrameInput { focused: false, ..visible() };
        assert_eq!(
            binder.collect(&blurred, bounds()),
            vec![Trigger::VisibilityChanged { hidden: true }]
        );

        // Minimizing after losing focus is reported again with the same hidden value
        let minimized = FrameInput { minimized: true, ..blurred };
        assert_eq!(
            binder.collect(&minimized, bounds()),
            vec![Trigger::VisibilityChanged { hidden: true }]
        );

        assert_eq!(
            binder.collect(&visible(), bounds()),
            vec![Trigger::VisibilityChanged { hidden: false }]
        );
    }

    #[test]
    fn test_first_frame_is_not_a_visibility_change() {
        let mut binder = EventBinder::new();
        let blurred = FrameInput { focused: false, ..visible() };
        assert_eq!(binder.collect(&blurred, bounds()), vec![Trigger::Load]);
    }
}
