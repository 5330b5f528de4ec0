use raylib::prelude::*;
use crate::state::StateClass;

/// Visual parameters attached to a state class.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Style {
    pub background: Color,
    pub image_scale: f32,
    pub tint: Color,
}

impl Style {
    pub fn for_class(class: StateClass) -> Style {
        match class {
            StateClass::Normal => Style {
                background: Color::new(24, 24, 32, 255),
                image_scale: 1.0,
                tint: Color::WHITE,
            },
            StateClass::Thicc => Style {
                background: Color::new(170, 20, 30, 255),
                image_scale: 1.15,
                tint: Color::WHITE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thicc_is_bigger_than_normal() {
        let normal = Style::for_class(StateClass::Normal);
        let thicc = Style::for_class(StateClass::Thicc);
        assert!(thicc.image_scale > normal.image_scale);
        assert_ne!(thicc.background, normal.background);
    }
}
