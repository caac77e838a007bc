//! Band-diagram plotting
//!
//! Renders the band edges of a solved profile against position: conduction
//! and valence bands, the Fermi level, and the vacuum level when the profile
//! carries one.
//!
//! # Usage
//!
//! ```rust,ignore
//! use junction_rs::output::visualization::plot_band_diagram;
//!
//! let solution = solver.solve(&params, &grid)?;
//! plot_band_diagram(&solution.profile, "bands.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::BandProfile;

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot a band diagram (PNG or SVG by extension)
///
/// Draws one line series per band. The energy axis is padded by 5% of the
/// observed span so flat bands do not sit on the frame.
///
/// # Arguments
///
/// * `profile` - Band profile produced by a solver
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_band_diagram(&solution.profile, "bands.svg", None)?;
/// ```
pub fn plot_band_diagram(
    profile: &BandProfile,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::band_diagram(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_band_diagram_impl(backend, profile, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_band_diagram_impl(backend, profile, config)
        }
    }
}

/// Implementation for band-diagram plotting with concrete backend
fn plot_band_diagram_impl<DB: DrawingBackend>(
    backend: DB,
    profile: &BandProfile,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let positions = profile.position_nm();
    let (x_min, x_max) = (positions[0], positions[positions.len() - 1]);
    let (y_min, y_max) = energy_range(std::slice::from_ref(&profile));

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    let bands: Vec<(&str, &nalgebra::DVector<f64>, RGBColor)> = band_series(profile, config);

    for (label, energies, color) in bands {
        chart
            .draw_series(LineSeries::new(
                positions.iter().zip(energies.iter()).map(|(x, e)| (*x, *e)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Plot several band profiles for comparison
///
/// Overlays the conduction and valence bands of each profile on the same
/// axes, one color per profile. Useful for doping or temperature sweeps.
///
/// # Arguments
///
/// * `profiles` - Vec of (label, profile)
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// let profiles = vec![
///     ("Na = 1e16", &light.profile),
///     ("Na = 1e17", &heavy.profile),
/// ];
/// plot_band_diagram_comparison(profiles, "sweep.png", None)?;
/// ```
pub fn plot_band_diagram_comparison(
    profiles: Vec<(&str, &BandProfile)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if profiles.is_empty() {
        return Err("No profiles provided".into());
    }

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::band_diagram(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &profiles, config)
        }
    }
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    profiles: &[(&str, &BandProfile)],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let x_min = profiles
        .iter()
        .map(|(_, p)| p.position_nm()[0])
        .fold(f64::INFINITY, f64::min);
    let x_max = profiles
        .iter()
        .map(|(_, p)| p.position_nm()[p.len() - 1])
        .fold(f64::NEG_INFINITY, f64::max);

    let only_profiles: Vec<&BandProfile> = profiles.iter().map(|(_, p)| *p).collect();
    let (y_min, y_max) = energy_range(&only_profiles);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    // One color per profile, conduction and valence bands in the same color
    for (idx, (label, profile)) in profiles.iter().enumerate() {
        let color = config.get_series_color(idx);
        let positions = profile.position_nm();

        chart
            .draw_series(LineSeries::new(
                positions
                    .iter()
                    .zip(profile.conduction().iter())
                    .map(|(x, e)| (*x, *e)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        chart.draw_series(LineSeries::new(
            positions
                .iter()
                .zip(profile.valence().iter())
                .map(|(x, e)| (*x, *e)),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Energy range over every band of every profile, padded by 5%
fn energy_range(profiles: &[&BandProfile]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for profile in profiles {
        let mut scan = |column: &nalgebra::DVector<f64>| {
            for &e in column.iter() {
                min = min.min(e);
                max = max.max(e);
            }
        };
        scan(profile.conduction());
        scan(profile.valence());
        scan(profile.fermi());
        if let Some(vacuum) = profile.vacuum() {
            scan(vacuum);
        }
    }

    let padding = ((max - min) * 0.05).max(0.05);
    (min - padding, max + padding)
}

/// The labeled band series of one profile in drawing order
fn band_series<'a>(
    profile: &'a BandProfile,
    config: &PlotConfig,
) -> Vec<(&'static str, &'a nalgebra::DVector<f64>, RGBColor)> {
    let mut bands = vec![
        ("Ec", profile.conduction(), config.conduction_color),
        ("Ev", profile.valence(), config.valence_color),
        ("Ef", profile.fermi(), config.fermi_color),
    ];
    if let Some(vacuum) = profile.vacuum() {
        bands.push(("Evac", vacuum, config.vacuum_color));
    }
    bands
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HomojunctionParams, SchottkyParams};
    use crate::solver::{GridConfig, HomojunctionSolver, SchottkySolver};

    fn homojunction_profile() -> BandProfile {
        let params = HomojunctionParams::new(1e17, 1e16, 150.0, 150.0).unwrap();
        HomojunctionSolver::silicon()
            .solve(&params, &GridConfig::coarse())
            .unwrap()
            .profile
    }

    #[test]
    fn test_plot_band_diagram_png() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        plot_band_diagram(&homojunction_profile(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_band_diagram_svg() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("svg");

        plot_band_diagram(&homojunction_profile(), path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_schottky_with_vacuum_level() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let solution = SchottkySolver::silicon_boron()
            .solve(&SchottkyParams::default(), &GridConfig::coarse())
            .unwrap();

        let config = PlotConfig::band_diagram("Al / p-Si Contact");
        plot_band_diagram(&solution.profile, path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().with_extension("png");

        let solver = HomojunctionSolver::silicon();
        let grid = GridConfig::coarse();
        let light = solver
            .solve(
                &HomojunctionParams::new(1e16, 1e16, 150.0, 150.0).unwrap(),
                &grid,
            )
            .unwrap();
        let heavy = solver
            .solve(
                &HomojunctionParams::new(1e18, 1e16, 150.0, 150.0).unwrap(),
                &grid,
            )
            .unwrap();

        let profiles = vec![
            ("Na = 1e16", &light.profile),
            ("Na = 1e18", &heavy.profile),
        ];
        plot_band_diagram_comparison(profiles, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_comparison_rejects_empty() {
        assert!(plot_band_diagram_comparison(vec![], "unused.png", None).is_err());
    }

    #[test]
    fn test_energy_range_padding() {
        let profile = homojunction_profile();
        let (lo, hi) = energy_range(&[&profile]);
        assert!(lo < profile.valence().min());
        assert!(hi > profile.conduction().max());
    }
}
