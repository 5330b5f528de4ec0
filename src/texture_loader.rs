use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use crate::constants::*;

/// Locations of the four assets under one directory.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub normal_image: PathBuf,
    pub thicc_image: PathBuf,
    pub intro_sound: PathBuf,
    pub bam_sound: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            normal_image: dir.join(NORMAL_IMAGE),
            thicc_image: dir.join(THICC_IMAGE),
            intro_sound: dir.join(INTRO_SOUND),
            bam_sound: dir.join(BAM_SOUND),
        }
    }
}

fn supported_extension(path: &Path) -> Result<String> {
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    match extension.as_str() {
        "png" | "jpg" | "jpeg" | "bmp" | "gif" => Ok(extension),
        _ => bail!("Unsupported image format {:?}", path),
    }
}

// EXIF orientation, only JPEG carries it reliably
fn read_orientation(file_bytes: &[u8], image_path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            log::warn!("Could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let extension = supported_extension(image_path)?;
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {:?}", image_path))?;

    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes, image_path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to load image data for {:?}: {}", image_path, e))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Others involve flips, ignored here.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        log::debug!("Applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {:?}: {}", image_path, e))?;

    Ok(texture)
}
