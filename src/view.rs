use raylib::prelude::*;
use crate::constants::*;
use crate::state::{ImageSource, StateClass};
use crate::style::Style;

/// The two textures the widget swaps between.
pub struct ImageSet {
    pub normal: Texture2D,
    pub thicc: Texture2D,
}

impl ImageSet {
    pub fn texture(&self, source: ImageSource) -> &Texture2D {
        match source {
            ImageSource::Normal => &self.normal,
            ImageSource::Thicc => &self.thicc,
        }
    }
}

// Scale too big images down so they fit the window
pub fn fit_scale(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> f32 {
    let max_width = screen_width * IMAGE_FIT;
    let max_height = screen_height * IMAGE_FIT;
    (max_width / tex_width).min(max_height / tex_height).min(1.0)
}

/// Where the image lands on screen. Drawing and click hit-testing both use this.
pub fn image_bounds(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32, class: StateClass) -> Rectangle {
    let scale = fit_scale(tex_width, tex_height, screen_width, screen_height) * Style::for_class(class).image_scale;

    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    Rectangle::new(
        screen_width * 0.5 - scaled_width * 0.5,
        screen_height * 0.5 - scaled_height * 0.5,
        scaled_width,
        scaled_height,
    )
}

pub fn current_bounds(rl: &RaylibHandle, images: &ImageSet, source: ImageSource, class: StateClass) -> Rectangle {
    let texture = images.texture(source);
    image_bounds(
        texture.width() as f32,
        texture.height() as f32,
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
        class,
    )
}

pub fn draw(d: &mut RaylibDrawHandle, images: &ImageSet, source: ImageSource, class: StateClass, bounds: Rectangle) {
    let style = Style::for_class(class);
    d.clear_background(style.background);

    let texture = images.texture(source);
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
        bounds,
        Vector2::new(0.0, 0.0),
        0.0,
        style.tint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_image_is_not_upscaled() {
        assert_eq!(fit_scale(100.0, 100.0, 960.0, 540.0), 1.0);
    }

    #[test]
    fn test_large_image_fits_window() {
        // Height is the limiting side: 540 * 0.9 / 1080
        assert!((fit_scale(1000.0, 1080.0, 960.0, 540.0) - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_are_centered() {
        let r = image_bounds(100.0, 50.0, 400.0, 200.0, StateClass::Normal);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
        assert_eq!(r.x, 150.0);
        assert_eq!(r.y, 75.0);
    }

    #[test]
    fn test_thicc_bounds_grow() {
        let normal = image_bounds(100.0, 100.0, 400.0, 400.0, StateClass::Normal);
        let thicc = image_bounds(100.0, 100.0, 400.0, 400.0, StateClass::Thicc);
        assert!(thicc.width > normal.width);
        assert!(thicc.x < normal.x);
    }
}
