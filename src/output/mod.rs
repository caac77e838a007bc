//! Output module for solver results
//!
//! This module provides tools to output band profiles in various formats:
//! - **Visualization**: PNG/SVG band diagrams using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Band diagrams
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── band_diagram.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use junction_rs::output::visualization::plot_band_diagram;
//!
//! plot_band_diagram(&solution.profile, "bands.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use junction_rs::output::export::export_band_profile_csv;
//!
//! export_band_profile_csv(&solution.profile, "bands.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! Output collaborators consume an already-validated [`BandProfile`] and hold
//! no physics: they never recompute band energies, only format what a solver
//! produced. Everything returns `Result<(), Box<dyn Error>>` so I/O failures
//! surface the same way regardless of format.
//!
//! [`BandProfile`]: crate::physics::BandProfile

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_band_profile_csv, CsvConfig, CsvMetadata};

pub use visualization::{plot_band_diagram, plot_band_diagram_comparison, PlotConfig};
