//! Data export for band profiles
//!
//! Currently supports CSV; the format modules accept an already-validated
//! [`BandProfile`](crate::physics::BandProfile) and a per-format config.

mod csv;

pub use csv::{export_band_profile_csv, CsvConfig, CsvMetadata};
