use std::path::Path;

use colormap3d::{Chip, PixelSample, PlotOptions, prepare_sample, prepare_sample_with_rng};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::static_window;
use crate::turntable::{self, TurntableOptions};

/// Knobs beyond the four core arguments.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub seed: Option<u64>,
    pub point_size: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            seed: None,
            point_size: 3,
        }
    }
}

pub fn visualize_color_map(
    image_path: &Path,
    sample_size: Option<usize>,
    mode: &str,
    chip: &str,
) -> anyhow::Result<()> {
    visualize_with_settings(image_path, sample_size, mode, chip, &RenderSettings::default())
}

/// Load, convert and sample the image, then draw it on `chip`.
///
/// Errors are reported in argument order: a missing image first, then an
/// unknown mode, then an unknown chip. No window opens on any of them.
pub fn visualize_with_settings(
    image_path: &Path,
    sample_size: Option<usize>,
    mode: &str,
    chip: &str,
    settings: &RenderSettings,
) -> anyhow::Result<()> {
    let sample = match settings.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            prepare_sample_with_rng(image_path, sample_size, mode, &mut rng)?
        }
        None => prepare_sample(image_path, sample_size, mode)?,
    };
    let chip: Chip = chip.parse()?;

    render(sample, chip, settings)
}

fn render(sample: PixelSample, chip: Chip, settings: &RenderSettings) -> anyhow::Result<()> {
    let title = format!("3D Color Map ({})", sample.mode().as_str().to_uppercase());
    tracing::info!("rendering {} points on {}", sample.len(), chip);

    match chip {
        Chip::Cpu => {
            let options = PlotOptions::new()
                .title(title)
                .point_size(settings.point_size)
                .build()?;
            static_window::show(&sample, &options)
        }
        Chip::Gpu => {
            let options = TurntableOptions {
                title,
                point_size: settings.point_size as f32,
                ..Default::default()
            };
            turntable::run(sample, options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colormap3d::ColorMapError;
    use image::{Rgb, RgbImage};

    fn lib_error(err: anyhow::Error) -> ColorMapError {
        err.downcast::<ColorMapError>().expect("library error")
    }

    #[test]
    fn missing_image_fails_before_any_window() {
        let dir = tempfile::tempdir().unwrap();
        let err = visualize_color_map(&dir.path().join("gone.jpg"), None, "rgb", "cpu").unwrap_err();
        assert!(matches!(lib_error(err), ColorMapError::ImageLoad { .. }));
    }

    #[test]
    fn unsupported_mode_fails_before_any_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();

        let err = visualize_color_map(&path, Some(10), "cmyk", "gpu").unwrap_err();
        assert!(matches!(lib_error(err), ColorMapError::UnsupportedMode(_)));
    }

    #[test]
    fn unsupported_chip_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();
        let settings = RenderSettings {
            seed: Some(1),
            ..Default::default()
        };

        let err = visualize_with_settings(&path, None, "rgb", "tpu", &settings).unwrap_err();
        assert!(matches!(lib_error(err), ColorMapError::UnsupportedChip(_)));
    }

    #[test]
    fn missing_image_is_reported_before_bad_chip() {
        let dir = tempfile::tempdir().unwrap();
        let err = visualize_color_map(&dir.path().join("gone.png"), None, "cmyk", "tpu").unwrap_err();
        assert!(matches!(lib_error(err), ColorMapError::ImageLoad { .. }));
    }

    #[test]
    fn bad_mode_is_reported_before_bad_chip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("px.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&path).unwrap();

        let err = visualize_color_map(&path, Some(3), "cmyk", "tpu").unwrap_err();
        assert!(matches!(lib_error(err), ColorMapError::UnsupportedMode(_)));
    }
}
