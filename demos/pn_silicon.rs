//! Example: Silicon p-n Homojunction Band Diagram
//!
//! Solves the reference silicon junction at 300 K and writes the band
//! diagram (PNG) plus the raw profile (CSV) to the system temp directory.
//!
//! **Physical System**:
//! - Abrupt p-n homojunction in silicon, fully ionized dopants
//! - Na = 1e17 cm⁻³ (p side), Nd = 10^16.5 cm⁻³ (n side)
//! - 150 nm rendered on each side of the junction plane
//!
//! Also sweeps the acceptor doping over a decade and overlays the resulting
//! band diagrams in a comparison plot.

use junction_rs::{
    models::HomojunctionParams,
    output::{
        export::{export_band_profile_csv, CsvConfig, CsvMetadata},
        visualization::{plot_band_diagram, plot_band_diagram_comparison, PlotConfig},
    },
    solver::{GridConfig, HomojunctionSolver},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Silicon p-n Homojunction - Equilibrium Band Diagram");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Device parameters ======

    let na_exp = 17.0; // log10(Na [cm^-3])
    let nd_exp = 16.5; // log10(Nd [cm^-3])
    let side_length = 150.0; // rendered extent per side [nm]

    let params = HomojunctionParams::from_log_doping(na_exp, nd_exp, side_length, side_length)?;

    println!("Device:");
    println!("  Na : 1e{} cm^-3", na_exp);
    println!("  Nd : 1e{} cm^-3", nd_exp);
    println!("  L  : {} nm per side\n", side_length);

    // ====== Solve ======

    let solver = HomojunctionSolver::silicon();
    let grid = GridConfig::default();
    let solution = solver.solve(&params, &grid)?;

    println!("Derived scalars:");
    println!("  Vbi : {:.4} eV", solution.scalars.built_in_potential);
    println!("  W   : {:.1} nm", solution.scalars.depletion_width);
    println!("  xp  : {:.1} nm", solution.scalars.p_depletion_width);
    println!("  xn  : {:.1} nm\n", solution.scalars.n_depletion_width);

    // ====== Output artifacts ======

    let tmp_dir = std::env::temp_dir();

    let png_path = tmp_dir.join("pn_silicon_bands.png");
    let config = PlotConfig::band_diagram("Silicon p-n Junction at 300 K");
    plot_band_diagram(&solution.profile, png_path.to_str().unwrap(), Some(&config))?;
    println!("Band diagram : {}", png_path.display());

    let csv_path = tmp_dir.join("pn_silicon_bands.csv");
    let mut metadata = CsvMetadata::from_solve("p-n silicon", "Homojunction");
    metadata.built_in_potential = Some(solution.scalars.built_in_potential);
    metadata.depletion_width = Some(solution.scalars.depletion_width);
    metadata.add_custom("Na".to_string(), format!("1e{} cm^-3", na_exp));
    metadata.add_custom("Nd".to_string(), format!("1e{} cm^-3", nd_exp));
    let csv_config = CsvConfig::default().with_metadata(metadata);
    export_band_profile_csv(&solution.profile, csv_path.to_str().unwrap(), Some(&csv_config))?;
    println!("Profile CSV  : {}", csv_path.display());

    // ====== Doping sweep comparison ======

    let sweep_exponents = [16.0, 16.5, 17.0];
    let mut sweep = Vec::new();
    for &exp in &sweep_exponents {
        let params = HomojunctionParams::from_log_doping(exp, nd_exp, side_length, side_length)?;
        sweep.push((format!("Na = 1e{}", exp), solver.solve(&params, &grid)?));
    }

    let profiles: Vec<(&str, _)> = sweep
        .iter()
        .map(|(label, solution)| (label.as_str(), &solution.profile))
        .collect();

    let sweep_path = tmp_dir.join("pn_silicon_sweep.png");
    let sweep_config = PlotConfig::band_diagram("Acceptor Doping Sweep");
    plot_band_diagram_comparison(profiles, sweep_path.to_str().unwrap(), Some(&sweep_config))?;
    println!("Doping sweep : {}", sweep_path.display());

    for (label, solution) in &sweep {
        println!(
            "  {} : Vbi = {:.4} eV, W = {:.1} nm",
            label, solution.scalars.built_in_potential, solution.scalars.depletion_width
        );
    }

    println!("\nDone.");
    Ok(())
}
