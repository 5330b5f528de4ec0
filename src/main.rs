use std::path::PathBuf;
use std::process;
use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod audio;
mod constants;
mod controller;
mod events;
mod state;
mod style;
mod texture_loader;
mod view;
mod visibility;
mod widget;

use crate::audio::{init_audio_device, load_sound_or_silence};
use crate::constants::*;
use crate::events::FrameInput;
use crate::texture_loader::{load_texture_with_exif_rotation, AssetPaths};
use crate::view::ImageSet;
use crate::widget::Widget;

#[derive(Parser, Debug)]
#[command(author, version, about = "An image that gets thicc when you click it or come back to it", long_about = None)]
struct Args {
    /// Directory holding img/ and audio/ assets
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    assets: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,
}

fn load_images(rl: &mut RaylibHandle, thread: &RaylibThread, paths: &AssetPaths) -> Result<ImageSet> {
    Ok(ImageSet {
        normal: load_texture_with_exif_rotation(rl, thread, &paths.normal_image)?,
        thicc: load_texture_with_exif_rotation(rl, thread, &paths.thicc_image)?,
    })
}

fn show_error(rl: &mut RaylibHandle, thread: &RaylibThread, message: &str) {
    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::BLACK);
    d.draw_text(message, 20, 20, 20, Color::RED);
    drop(d);
    std::thread::sleep(Duration::from_secs(ERROR_SCREEN_DURATION));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let paths = AssetPaths::in_dir(&args.assets);
    log::info!("Loading assets from {:?}", args.assets);

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Thicc")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let images = match load_images(&mut rl, &thread, &paths) {
        Ok(images) => images,
        Err(e) => {
            log::error!("{:#}", e);
            show_error(&mut rl, &thread, &format!("Error: {:#}", e));
            process::exit(1);
        }
    };

    let audio = init_audio_device();
    let intro = load_sound_or_silence(audio.as_ref(), &paths.intro_sound);
    let bam = load_sound_or_silence(audio.as_ref(), &paths.bam_sound);

    let initial = FrameInput::poll(&rl);
    let mut widget = Widget::mount(intro, bam, initial.hidden());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let input = FrameInput::poll(&rl);
        let bounds = view::current_bounds(&rl, &images, widget.image_source(), widget.state_class());
        widget.frame(&input, bounds, dt);

        let source = widget.image_source();
        let class = widget.state_class();
        let bounds = view::current_bounds(&rl, &images, source, class);

        let mut d = rl.begin_drawing(&thread);
        view::draw(&mut d, &images, source, class, bounds);
    }
}
