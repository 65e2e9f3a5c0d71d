use std::path::Path;

use image::RgbImage;
use rand::Rng;

use crate::color_space::{ColorMode, convert_image};
use crate::error::Result;
use crate::image_load::{flatten_pixels, load_image};
use crate::sample::{PixelSample, SampleSize, sample_pixels};

/// Convert `image` into `mode` and pick the pixels to display.
pub fn sample_image<R: Rng + ?Sized>(
    image: &RgbImage,
    mode: ColorMode,
    sample_size: SampleSize,
    rng: &mut R,
) -> PixelSample {
    let converted = convert_image(image, mode);
    let pixels = flatten_pixels(&converted);
    let population = pixels.len();
    let picked = sample_pixels(&pixels, sample_size, rng);
    tracing::info!(
        "sampled {} of {} pixels in {} space",
        picked.len(),
        population,
        mode
    );
    PixelSample::new(mode, population, picked)
}

/// Load, convert and sample an image with the caller's random source.
///
/// The image is decoded before `mode` is looked at, so a bad path is reported
/// ahead of a bad mode.
pub fn prepare_sample_with_rng<R: Rng + ?Sized>(
    image_path: &Path,
    sample_size: Option<usize>,
    mode: &str,
    rng: &mut R,
) -> Result<PixelSample> {
    let image = load_image(image_path)?;
    let sample_size = SampleSize::resolve(sample_size);
    let mode: ColorMode = mode.parse()?;
    Ok(sample_image(&image, mode, sample_size, rng))
}

/// Same as [`prepare_sample_with_rng`] with an unseeded thread-local generator.
pub fn prepare_sample(
    image_path: &Path,
    sample_size: Option<usize>,
    mode: &str,
) -> Result<PixelSample> {
    prepare_sample_with_rng(image_path, sample_size, mode, &mut rand::rng())
}
