#![allow(non_snake_case)]

use anyhow::Context;
use colormap3d::{PixelSample, PlotOptions, render_scatter};
use dioxus::{
    desktop::{Config, LogicalSize, WindowBuilder},
    prelude::*,
};

/// Rendered chart handed to the window as context.
#[derive(Clone, Debug, PartialEq)]
struct PlotImage {
    src: String,
    width: u32,
    height: u32,
}

#[component]
fn StaticPlot() -> Element {
    let plot = use_context::<PlotImage>();

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; width: 100vw; height: 100vh; margin: 0; background: white;",
            img {
                style: "user-select: none; -webkit-user-select: none;",
                src: "{plot.src}",
                width: "{plot.width}",
                height: "{plot.height}",
            }
        }
    }
}

/// Draw the chart and show it in a desktop window until the user closes it.
pub fn show(sample: &PixelSample, options: &PlotOptions) -> anyhow::Result<()> {
    let chart = render_scatter(sample, options).context("failed to render scatter chart")?;
    let plot = PlotImage {
        src: chart.to_data_uri()?,
        width: chart.width,
        height: chart.height,
    };
    tracing::debug!("opening static chart window");

    LaunchBuilder::new()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(options.title.as_str())
                    .with_always_on_top(false)
                    .with_inner_size(LogicalSize::new(
                        f64::from(options.width) + 40.0,
                        f64::from(options.height) + 40.0,
                    )),
            ),
        )
        .with_context(plot)
        .launch(StaticPlot);

    Ok(())
}
