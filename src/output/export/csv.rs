//! CSV export for band profiles
//!
//! Writes one row per spatial sample, with the conduction and valence band
//! columns always present and the vacuum-level column only when the profile
//! carries one (Schottky solves). The output opens directly in Excel, pandas,
//! MATLAB, and most plotting tools.
//!
//! Data validation (non-empty, matching lengths, finite values) is the
//! [`BandProfile`] constructor's job; by the time a profile reaches this
//! module those invariants already hold.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use junction_rs::output::export::export_band_profile_csv;
//!
//! export_band_profile_csv(&solution.profile, "bands.csv", None)?;
//! ```
//!
//! **Output** (`bands.csv`):
//! ```csv
//! position_nm,Ec_eV,Ev_eV
//! -150.000000,0.966195,-0.153805
//! -149.398798,0.966195,-0.153805
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use junction_rs::output::export::{export_band_profile_csv, CsvConfig, CsvMetadata};
//!
//! let mut metadata = CsvMetadata::from_solve("p-n silicon", "Homojunction");
//! metadata.built_in_potential = Some(solution.scalars.built_in_potential);
//! metadata.depletion_width = Some(solution.scalars.depletion_width);
//!
//! let config = CsvConfig::default().with_metadata(metadata);
//! export_band_profile_csv(&solution.profile, "bands.csv", Some(&config))?;
//! ```
//!
//! **Output** (`bands.csv`):
//! ```csv
//! # Band Diagram Data
//! # Generated: 2026-08-23T15:30:00Z
//! # Device: p-n silicon
//! # Solver: Homojunction
//! # Built-in Potential: 0.7529 eV
//! # Depletion Width: 327.3 nm
//! #
//! position_nm,Ec_eV,Ev_eV
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::physics::BandProfile;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     include_metadata: true,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places), enough for a
    /// lossless-equivalent round-trip of the profile energies
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Device name (e.g., "p-n silicon")
    pub device_name: Option<String>,

    /// Solver name (e.g., "Homojunction", "Schottky")
    pub solver_name: Option<String>,

    /// Built-in potential Vbi (eV)
    pub built_in_potential: Option<f64>,

    /// Schottky barrier height (eV)
    pub barrier_height: Option<f64>,

    /// Depletion width (nm)
    pub depletion_width: Option<f64>,

    /// Temperature (K)
    pub temperature: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata naming the device and the solver variant
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_solve("Al on p-Si", "Schottky");
    /// ```
    pub fn from_solve(device: &str, solver: &str) -> Self {
        Self {
            device_name: Some(device.to_string()),
            solver_name: Some(solver.to_string()),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Band Diagram Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(device) = &metadata.device_name {
        writeln!(file, "# Device: {}", device)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(file, "# Solver: {}", solver)?;
    }

    // Derived scalars
    if let Some(vbi) = metadata.built_in_potential {
        writeln!(file, "# Built-in Potential: {} eV", vbi)?;
    }
    if let Some(sbh) = metadata.barrier_height {
        writeln!(file, "# Barrier Height: {} eV", sbh)?;
    }
    if let Some(w) = metadata.depletion_width {
        writeln!(file, "# Depletion Width: {} nm", w)?;
    }
    if let Some(t) = metadata.temperature {
        writeln!(file, "# Temperature: {} K", t)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a band profile to CSV
///
/// Writes one row per sample. Columns are `position_nm`, `Ec_eV`, `Ev_eV`,
/// and `Evac_eV` when the profile carries a vacuum level.
///
/// # Arguments
///
/// * `profile` - Band profile produced by a solver
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// File creation or write errors.
///
/// # Example
///
/// ```rust,ignore
/// export_band_profile_csv(&solution.profile, "bands.csv", None)?;
/// ```
pub fn export_band_profile_csv<P: AsRef<Path>>(
    profile: &BandProfile,
    output_path: P,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    let d = configuration.delimiter;
    if profile.has_vacuum_level() {
        writeln!(file, "position_nm{d}Ec_eV{d}Ev_eV{d}Evac_eV")?;
    } else {
        writeln!(file, "position_nm{d}Ec_eV{d}Ev_eV")?;
    }

    // ============================= Write Data =============================

    for i in 0..profile.len() {
        write!(
            file,
            "{}{d}{}{d}{}",
            format_number(profile.position_nm()[i], configuration),
            format_number(profile.conduction()[i], configuration),
            format_number(profile.valence()[i], configuration),
        )?;
        if let Some(vacuum) = profile.vacuum() {
            write!(file, "{d}{}", format_number(vacuum[i], configuration))?;
        }
        writeln!(file)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HomojunctionParams, SchottkyParams};
    use crate::solver::{GridConfig, HomojunctionSolver, SchottkySolver};
    use std::fs;
    use tempfile::NamedTempFile;

    fn homojunction_profile() -> BandProfile {
        let params = HomojunctionParams::new(1e17, 1e16, 150.0, 150.0).unwrap();
        HomojunctionSolver::silicon()
            .solve(&params, &GridConfig::coarse())
            .unwrap()
            .profile
    }

    fn schottky_profile() -> BandProfile {
        SchottkySolver::silicon_boron()
            .solve(&SchottkyParams::default(), &GridConfig::coarse())
            .unwrap()
            .profile
    }

    #[test]
    fn test_export_homojunction_columns() {
        let file = NamedTempFile::new().unwrap();
        export_band_profile_csv(&homojunction_profile(), file.path(), None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "position_nm,Ec_eV,Ev_eV");
        assert_eq!(lines.count(), 100);
    }

    #[test]
    fn test_export_schottky_includes_vacuum() {
        let file = NamedTempFile::new().unwrap();
        export_band_profile_csv(&schottky_profile(), file.path(), None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, "position_nm,Ec_eV,Ev_eV,Evac_eV");
        assert!(content.lines().skip(1).all(|l| l.split(',').count() == 4));
    }

    #[test]
    fn test_export_with_metadata() {
        let file = NamedTempFile::new().unwrap();
        let mut metadata = CsvMetadata::from_solve("p-n silicon", "Homojunction");
        metadata.built_in_potential = Some(0.7529);
        metadata.add_custom("Na".to_string(), "1e17 cm^-3".to_string());

        let config = CsvConfig::default().with_metadata(metadata);
        export_band_profile_csv(&homojunction_profile(), file.path(), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("# Band Diagram Data"));
        assert!(content.contains("# Device: p-n silicon"));
        assert!(content.contains("# Built-in Potential: 0.7529 eV"));
        assert!(content.contains("# Na: 1e17 cm^-3"));
    }

    #[test]
    fn test_european_format() {
        let file = NamedTempFile::new().unwrap();
        let config = CsvConfig::european();
        export_band_profile_csv(&homojunction_profile(), file.path(), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        let first_row = content.lines().nth(1).unwrap();
        assert!(first_row.contains(';'));
        assert!(!first_row.contains('.'));
    }

    #[test]
    fn test_high_precision_roundtrip() {
        let profile = homojunction_profile();
        let file = NamedTempFile::new().unwrap();
        let config = CsvConfig::high_precision();
        export_band_profile_csv(&profile, file.path(), Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        for (i, line) in content.lines().skip(1).enumerate() {
            let fields: Vec<f64> = line.split(',').map(|f| f.parse().unwrap()).collect();
            assert!((fields[1] - profile.conduction()[i]).abs() < 1e-9);
            assert!((fields[2] - profile.valence()[i]).abs() < 1e-9);
        }
    }
}
