//! Desktop front end for `colormap3d`.
//!
//! `--chip cpu` draws a static chart into a dioxus window, `--chip gpu` opens
//! an interactive turntable viewer in eframe.

pub mod cli;
pub mod static_window;
pub mod turntable;
pub mod visualize;

pub use visualize::{RenderSettings, visualize_color_map, visualize_with_settings};
