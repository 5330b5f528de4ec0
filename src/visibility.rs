#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VisibilityChange {
    Unchanged, // Redundant event, same hidden value as last time
    Hidden,
    Visible,
}

/// Remembers the last hidden state so repeated events are not mistaken for transitions.
pub struct VisibilityTracker {
    last_hidden: bool,
}

impl VisibilityTracker {
    /// Seeded with the hidden state observed at mount.
    pub fn new(hidden: bool) -> Self {
        Self { last_hidden: hidden }
    }

    pub fn observe(&mut self, hidden: bool) -> VisibilityChange {
        if hidden == self.last_hidden {
            return VisibilityChange::Unchanged;
        }
        self.last_hidden = hidden;
        if hidden { VisibilityChange::Hidden } else { VisibilityChange::Visible }
    }
}
