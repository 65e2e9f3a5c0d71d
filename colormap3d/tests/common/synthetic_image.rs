use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Writes a single-color PNG and returns its path.
pub fn solid_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(&path)
        .expect("write synthetic image");
    path
}

/// Writes a horizontal red ramp where every pixel is distinct.
pub fn gradient_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x / 256) % 256) as u8])
    })
    .save(&path)
    .expect("write synthetic image");
    path
}
