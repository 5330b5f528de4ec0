pub const WINDOW_WIDTH: i32 = 960;             // Default window width
pub const WINDOW_HEIGHT: i32 = 540;            // Default window height
pub const FPS: u32 = 60;                       // Frames per second

pub const ANIMATION_DURATION: f32 = 0.5;       // Duration of the thicc animation, roughly the bam sound (seconds)
pub const IMAGE_FIT: f32 = 0.9;                // Share of the window the image may cover
pub const ERROR_SCREEN_DURATION: u64 = 5;      // How long startup errors stay on screen (seconds)

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const NORMAL_IMAGE: &str = "img/omniman.png";
pub const THICC_IMAGE: &str = "img/omnithicc.png";
pub const INTRO_SOUND: &str = "audio/intro.wav";
pub const BAM_SOUND: &str = "audio/bam.wav";
