use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{Exif, In, Reader, Tag, Value};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::item::Item;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Rotation baked into a photo by the camera. Flipped orientations are
/// shown unrotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    pub fn from_exif(value: u32) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoMeta {
    pub orientation: Orientation,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    FileName,
    Shuffled { seed: Option<u64> },
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping non-image entry");
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("no image files found in directory {}", dir.display());
    }
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_lowercase().as_str(), "jpg" | "jpeg"))
}

/// EXIF orientation and description. Missing or broken EXIF is not an error.
pub fn read_photo_meta(bytes: &[u8]) -> PhotoMeta {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => PhotoMeta {
            orientation: exif
                .get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
                .map(Orientation::from_exif)
                .unwrap_or_default(),
            description: description(&exif),
        },
        Err(e) => {
            debug!(error = %e, "no usable EXIF data");
            PhotoMeta::default()
        }
    }
}

fn description(exif: &Exif) -> Option<String> {
    let field = exif.get_field(Tag::ImageDescription, In::PRIMARY)?;
    let Value::Ascii(ref lines) = field.value else {
        return None;
    };
    let text = lines
        .iter()
        .map(|line| String::from_utf8_lossy(line).trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!text.is_empty()).then_some(text)
}

/// EXIF is only read from JPEGs; anything else reports the default.
pub fn read_photo_meta_at(path: &Path) -> PhotoMeta {
    if !is_jpeg(path) {
        return PhotoMeta::default();
    }
    match fs::read(path) {
        Ok(bytes) => read_photo_meta(&bytes),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            PhotoMeta::default()
        }
    }
}

/// Builds the display sequence: ids are positions, titles are file stems,
/// captions come from EXIF descriptions.
pub fn load_items(dir: &Path, order: Order) -> Result<Vec<Item>> {
    let mut paths = load_sorted_image_paths(dir)?;
    if let Order::Shuffled { seed } = order {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        paths.shuffle(&mut rng);
    }

    let items: Vec<Item> = paths
        .iter()
        .enumerate()
        .map(|(position, path)| {
            let mut item = Item::new(position as i64, path.to_string_lossy());
            if let Some(stem) = path.file_stem() {
                item = item.with_title(stem.to_string_lossy());
            }
            if let Some(caption) = read_photo_meta_at(path).description {
                item = item.with_caption(caption);
            }
            item
        })
        .collect();

    info!(dir = %dir.display(), count = items.len(), "loaded image catalog");
    Ok(items)
}
