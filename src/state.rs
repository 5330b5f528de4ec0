/// Which of the two images is on screen.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ImageSource {
    #[default]
    Normal,
    Thicc,
}

/// Styling class applied to both the container and the image.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum StateClass {
    #[default]
    Normal,
    Thicc,
}

impl StateClass {
    pub fn from_playing(is_playing: bool) -> Self {
        if is_playing { StateClass::Thicc } else { StateClass::Normal }
    }

    pub fn name(self) -> &'static str {
        match self {
            StateClass::Normal => "normal",
            StateClass::Thicc => "thicc",
        }
    }
}
