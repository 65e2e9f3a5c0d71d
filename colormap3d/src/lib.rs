//! Pixel sampling and static charting for 3D color maps.
//!
//! An image is decoded, re-expressed in RGB or HSV, reduced to a random
//! subset of pixels and drawn as a 3D scatter chart with plotters. The
//! interactive viewer lives in the `gui` crate and consumes the same
//! [`PixelSample`].

pub mod chip;
pub mod color_space;
pub mod error;
pub mod image_load;
pub mod options;
pub mod pipeline;
pub mod sample;
pub mod scatter;

pub use chip::Chip;
pub use color_space::{ColorMode, convert_image};
pub use error::{ColorMapError, Result};
pub use image_load::load_image;
pub use options::{PlotOptions, PlotOptionsBuilder};
pub use pipeline::{prepare_sample, prepare_sample_with_rng, sample_image};
pub use sample::{DEFAULT_SAMPLE_SIZE, PixelSample, SamplePoint, SampleSize};
pub use scatter::{ScatterImage, render_scatter};
