use std::path::Path;

use image::RgbImage;

use crate::error::{ColorMapError, Result};

/// Decode the image at `path` into an 8-bit RGB buffer.
///
/// Alpha is discarded and grayscale images are expanded to three channels.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path)
        .map_err(|source| ColorMapError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    tracing::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Flatten an image into its pixels, row by row.
pub fn flatten_pixels(image: &RgbImage) -> Vec<[u8; 3]> {
    image.pixels().map(|p| p.0).collect()
}
