use std::fmt;
use std::str::FromStr;

use image::{Rgb, RgbImage};
use palette::{FromColor, Hsv, Srgb};

use crate::error::ColorMapError;

/// Color space the pixel channels are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Rgb,
    Hsv,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Rgb, ColorMode::Hsv];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Hsv => "hsv",
        }
    }

    /// Axis names, in channel order.
    pub fn channel_labels(&self) -> [&'static str; 3] {
        match self {
            ColorMode::Rgb => ["Red", "Green", "Blue"],
            ColorMode::Hsv => ["Hue", "Saturation", "Value"],
        }
    }

    /// Largest value each channel can take. 8-bit hue is stored as degrees / 2.
    pub fn channel_max(&self) -> [u8; 3] {
        match self {
            ColorMode::Rgb => [255, 255, 255],
            ColorMode::Hsv => [180, 255, 255],
        }
    }

    pub fn convert_pixel(&self, rgb: [u8; 3]) -> [u8; 3] {
        match self {
            ColorMode::Rgb => rgb,
            ColorMode::Hsv => rgb_to_hsv8(rgb),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ColorMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(ColorMode::Rgb),
            "hsv" => Ok(ColorMode::Hsv),
            other => Err(ColorMapError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Re-express every pixel of an RGB image in `mode`. The output has the same dimensions.
pub fn convert_image(image: &RgbImage, mode: ColorMode) -> RgbImage {
    let mut converted = image.clone();
    if mode == ColorMode::Rgb {
        return converted;
    }
    for pixel in converted.pixels_mut() {
        *pixel = Rgb(mode.convert_pixel(pixel.0));
    }
    tracing::debug!(
        "converted {}x{} image to {}",
        converted.width(),
        converted.height(),
        mode
    );
    converted
}

/// 8-bit HSV: hue in [0, 180), saturation and value in [0, 255].
fn rgb_to_hsv8(rgb: [u8; 3]) -> [u8; 3] {
    let srgb: Srgb<f32> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let hsv: Hsv = Hsv::from_color(srgb);

    let hue = ((hsv.hue.into_positive_degrees() / 2.0).round() as u16 % 180) as u8;
    let saturation = (hsv.saturation * 255.0).round().clamp(0.0, 255.0) as u8;
    let value = (hsv.value * 255.0).round().clamp(0.0, 255.0) as u8;

    [hue, saturation, value]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("rgb".parse::<ColorMode>().unwrap(), ColorMode::Rgb);
        assert_eq!("hsv".parse::<ColorMode>().unwrap(), ColorMode::Hsv);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "cmyk".parse::<ColorMode>().unwrap_err();
        assert!(matches!(err, ColorMapError::UnsupportedMode(ref m) if m == "cmyk"));
        assert!(err.to_string().contains("cmyk"));
    }

    #[test]
    fn primaries_map_to_half_degree_hues() {
        assert_eq!(ColorMode::Hsv.convert_pixel([255, 0, 0]), [0, 255, 255]);
        assert_eq!(ColorMode::Hsv.convert_pixel([0, 255, 0]), [60, 255, 255]);
        assert_eq!(ColorMode::Hsv.convert_pixel([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn greys_have_no_hue_or_saturation() {
        assert_eq!(ColorMode::Hsv.convert_pixel([0, 0, 0]), [0, 0, 0]);
        assert_eq!(ColorMode::Hsv.convert_pixel([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn hue_wraps_below_180() {
        // 359 degrees rounds to 180 and must wrap back to 0.
        let [h, _, _] = ColorMode::Hsv.convert_pixel([255, 0, 4]);
        assert!(h < 180);
    }

    #[test]
    fn rgb_is_identity() {
        assert_eq!(ColorMode::Rgb.convert_pixel([12, 34, 56]), [12, 34, 56]);
    }

    #[test]
    fn conversion_keeps_shape() {
        let image = RgbImage::from_fn(7, 3, |x, y| Rgb([(x * 30) as u8, (y * 80) as u8, 9]));
        for mode in ColorMode::ALL {
            let converted = convert_image(&image, mode);
            assert_eq!(converted.dimensions(), image.dimensions());
        }
    }
}
