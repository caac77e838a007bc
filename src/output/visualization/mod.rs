//! Band-diagram visualization
//!
//! Renders band profiles with plotters, one line series per band. The backend
//! (PNG via bitmap, or SVG) is chosen from the output file extension.

mod band_diagram;
mod config;

pub use band_diagram::{plot_band_diagram, plot_band_diagram_comparison};
pub use config::{PlotConfig, NO_TITLE};
