//! 3D color map: plot an image's pixels in RGB or HSV space.
//!
//! ```sh
//! colormap --img photo.jpg --mode hsv --chip gpu --samplesize 20000
//! ```
//!
//! Set `RUST_LOG=debug` for more detail.

use clap::Parser;
use gui::cli::Args;
use gui::{RenderSettings, visualize_with_settings};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = RenderSettings {
        seed: args.seed,
        point_size: args.point_size,
    };

    visualize_with_settings(
        &args.img,
        args.samplesize,
        &args.mode,
        &args.chip,
        &settings,
    )
}
