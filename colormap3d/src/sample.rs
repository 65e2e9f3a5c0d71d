use rand::Rng;

use crate::color_space::ColorMode;

pub const DEFAULT_SAMPLE_SIZE: usize = 5000;

/// How many pixels to keep. Zero and "unset" both mean the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSize(usize);

impl SampleSize {
    pub fn resolve(requested: Option<usize>) -> Self {
        match requested {
            Some(n) if n > 0 => SampleSize(n),
            _ => SampleSize(DEFAULT_SAMPLE_SIZE),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        SampleSize(DEFAULT_SAMPLE_SIZE)
    }
}

/// Indices of the pixels to keep out of a population of `population`.
///
/// Returns every index in order when the population fits, otherwise
/// `sample_size` distinct indices drawn uniformly.
pub fn sample_indices<R: Rng + ?Sized>(
    population: usize,
    sample_size: SampleSize,
    rng: &mut R,
) -> Vec<usize> {
    let amount = sample_size.get();
    if population <= amount {
        return (0..population).collect();
    }
    rand::seq::index::sample(rng, population, amount).into_vec()
}

pub fn sample_pixels<R: Rng + ?Sized>(
    pixels: &[[u8; 3]],
    sample_size: SampleSize,
    rng: &mut R,
) -> Vec<[u8; 3]> {
    sample_indices(pixels.len(), sample_size, rng)
        .into_iter()
        .map(|i| pixels[i])
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub channels: [u8; 3],
    /// `channels / 255`, used as the marker color.
    pub color: [f32; 3],
}

impl SamplePoint {
    pub fn new(channels: [u8; 3]) -> Self {
        Self {
            channels,
            color: channels.map(|c| c as f32 / 255.0),
        }
    }

    pub fn rgb8(&self) -> [u8; 3] {
        self.color.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
    }
}

/// The pixels picked for display, already in the target color space.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSample {
    mode: ColorMode,
    population: usize,
    points: Vec<SamplePoint>,
}

impl PixelSample {
    pub fn new(mode: ColorMode, population: usize, channels: Vec<[u8; 3]>) -> Self {
        Self {
            mode,
            population,
            points: channels.into_iter().map(SamplePoint::new).collect(),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of pixels the sample was drawn from.
    pub fn population(&self) -> usize {
        self.population
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
