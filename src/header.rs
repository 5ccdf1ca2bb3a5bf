// Header strip images, one per tool zone.
// Missing assets never stop the painter: a missing file is replaced by another
// image from the same folder, and failing that by a flat grey strip.

use crate::tool::TOOL_COUNT;
use crate::types::{FrameBuffer, Rgb};
use image::imageops;
use std::path::{Path, PathBuf};

/// Expected file names, in zone order.
pub const HEADER_FILES: [&str; TOOL_COUNT] = [
    "header_pink.png",
    "header_blue.png",
    "header_green.png",
    "header_eraser.png",
];

/// Colour of the stand-in strip used when no image is available.
pub const PLACEHOLDER: Rgb = Rgb::new(200, 200, 200);

/// The four header strips, all exactly `width` x `height`.
#[derive(Clone, Debug)]
pub struct HeaderSet {
    images: [FrameBuffer; TOOL_COUNT],
}

impl HeaderSet {
    /// Flat grey strips for every zone.
    pub fn placeholders(width: usize, height: usize) -> Self {
        Self { images: std::array::from_fn(|_| placeholder(width, height)) }
    }

    pub fn from_images(images: [FrameBuffer; TOOL_COUNT]) -> Self {
        Self { images }
    }

    /// Header for a tool zone; out-of-range zones clamp to the last one.
    pub fn get(&self, zone: usize) -> &FrameBuffer {
        &self.images[zone.min(TOOL_COUNT - 1)]
    }

    /// Load the headers from `dir`, resizing each to `width` x `height`.
    pub fn load(dir: &Path, width: usize, height: usize) -> Self {
        let listing = image_files(dir);

        let images = std::array::from_fn(|zone| {
            let expected = dir.join(HEADER_FILES[zone]);
            if let Some(img) = load_strip(&expected, width, height) {
                return img;
            }
            log::warn!("Header asset {} missing or unreadable", expected.display());

            if let Some(img) = listing.get(zone).and_then(|p| load_strip(p, width, height)) {
                log::warn!("Using {} for tool zone {zone}", listing[zone].display());
                return img;
            }

            log::warn!("No image left for tool zone {zone}, using placeholder");
            placeholder(width, height)
        });

        Self { images }
    }
}

fn placeholder(width: usize, height: usize) -> FrameBuffer {
    FrameBuffer::filled(width, height, PLACEHOLDER.to_u32())
}

/// Decode an image and scale it to the strip size.
fn load_strip(path: &Path, width: usize, height: usize) -> Option<FrameBuffer> {
    let img = match image::open(path) {
        Ok(img) => img.to_rgb8(),
        Err(e) => {
            log::debug!("Cannot load {}: {e}", path.display());
            return None;
        }
    };
    let img = if img.dimensions() != (width as u32, height as u32) {
        imageops::resize(&img, width as u32, height as u32, imageops::FilterType::Triangle)
    } else {
        img
    };
    Some(FrameBuffer::from_rgb_image(&img))
}

/// Image files in `dir` (png/jpg/jpeg), sorted by name. Empty if unreadable.
fn image_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot read header folder {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
