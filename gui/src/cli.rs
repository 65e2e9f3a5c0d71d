use std::path::PathBuf;

use clap::Parser;

/// 3D color map of an image's pixels.
#[derive(Parser, Debug)]
#[command(name = "colormap", version, about)]
pub struct Args {
    /// Path to image
    #[arg(long)]
    pub img: PathBuf,

    /// Number of pixels to sample (default: 5000)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub samplesize: Option<usize>,

    /// Choose color space to map
    #[arg(long, value_parser = ["rgb", "hsv"])]
    pub mode: String,

    /// Choose to run on CPU (static chart) or GPU (interactive viewer)
    #[arg(long, value_parser = ["cpu", "gpu"])]
    pub chip: String,

    /// Seed the sampler so repeated runs pick the same pixels
    #[arg(long)]
    pub seed: Option<u64>,

    /// Marker radius in pixels
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    pub point_size: u32,
}
