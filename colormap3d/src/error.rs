use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorMapError {
    #[error("Could not load image: {path:?}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unsupported mode: {0}. Choose 'rgb' or 'hsv'.")]
    UnsupportedMode(String),
    #[error("Unsupported chip: {0}. Choose 'cpu' or 'gpu'.")]
    UnsupportedChip(String),
    #[error("Invalid plot options: {0}")]
    InvalidOptions(String),
    #[error("Failed to draw plot: {0}")]
    Plot(String),
    #[error("Failed to encode plot image")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ColorMapError>;
