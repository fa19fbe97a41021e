use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::catalog::{Orientation, read_photo_meta};
use crate::gui::slide::Slide;
use crate::item::Item;

/// Decodes an image file, applies its EXIF rotation and uploads it.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read file {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_photo_meta(&file_bytes).orientation
    } else {
        Orientation::Normal
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", image_path.display()))?;

    match orientation {
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
        Orientation::Normal => {}
    }
    if orientation != Orientation::Normal {
        debug!(path = %image_path.display(), ?orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {e}", image_path.display()))
}

/// Uploads every item's media. Items that fail to load are left out.
pub fn load_slides(rl: &mut RaylibHandle, thread: &RaylibThread, items: Vec<Item>) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(items.len());
    for item in items {
        match load_texture_with_exif_rotation(rl, thread, Path::new(&item.media)) {
            Ok(texture) => slides.push(Slide::new(item, texture)),
            Err(e) => warn!(id = %item.id, error = %e, "skipping slide"),
        }
    }
    slides
}
