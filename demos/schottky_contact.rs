//! Example: Aluminium on p-type Silicon - Schottky Contact
//!
//! Solves a metal / p-type contact with incomplete dopant ionization and
//! writes the band diagram (with vacuum level) and profile CSV to the system
//! temp directory.
//!
//! **Physical System**:
//! - Metal: aluminium-like, Wm = 4.5 eV
//! - Semiconductor: boron-doped silicon, Na = 1e16 cm⁻³ over a 1e12 cm⁻³
//!   donor background, Xs = 4.05 eV, T = 300 K

use junction_rs::{
    models::SchottkyParams,
    output::{
        export::{export_band_profile_csv, CsvConfig, CsvMetadata},
        visualization::{plot_band_diagram, PlotConfig},
    },
    solver::{GridConfig, SchottkySolver},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Al / p-Si Schottky Contact - Equilibrium Band Diagram");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Device parameters ======

    let params = SchottkyParams::new(1e16, 1e12, 300.0, 4.5, 4.05)?;

    println!("Device:");
    println!("  Na : {:e} cm^-3", params.acceptor_concentration);
    println!("  Nd : {:e} cm^-3", params.donor_concentration);
    println!("  T  : {} K", params.temperature);
    println!("  Wm : {} eV", params.metal_work_function);
    println!("  Xs : {} eV\n", params.electron_affinity);

    // ====== Solve ======

    let solver = SchottkySolver::silicon_boron();
    let solution = solver.solve(&params, &GridConfig::default())?;

    println!("Derived scalars:");
    println!("  Ea  : {:.4} eV", solution.scalars.ionization_energy);
    println!("  Nv  : {:.3e} cm^-3", solution.scalars.valence_dos);
    println!("  F   : {:.4} eV above Ev", solution.scalars.fermi_level);
    println!("  Ws  : {:.4} eV", solution.scalars.semiconductor_work_function);
    println!("  Vbi : {:.4} eV", solution.scalars.built_in_voltage);
    println!("  Sbh : {:.4} eV", solution.scalars.barrier_height);
    println!("  w   : {:.1} nm", solution.scalars.depletion_width);
    if solution.scalars.discriminant_clamped {
        println!("  (discriminant clamped at zero)");
    }
    println!();

    // ====== Output artifacts ======

    let tmp_dir = std::env::temp_dir();

    let png_path = tmp_dir.join("schottky_contact_bands.png");
    let config = PlotConfig::band_diagram("Al / p-Si Schottky Contact");
    plot_band_diagram(&solution.profile, png_path.to_str().unwrap(), Some(&config))?;
    println!("Band diagram : {}", png_path.display());

    let csv_path = tmp_dir.join("schottky_contact_bands.csv");
    let mut metadata = CsvMetadata::from_solve("Al on p-Si", "Schottky");
    metadata.barrier_height = Some(solution.scalars.barrier_height);
    metadata.depletion_width = Some(solution.scalars.depletion_width);
    metadata.temperature = Some(params.temperature);
    let csv_config = CsvConfig::default().with_metadata(metadata);
    export_band_profile_csv(&solution.profile, csv_path.to_str().unwrap(), Some(&csv_config))?;
    println!("Profile CSV  : {}", csv_path.display());

    println!("\nDone.");
    Ok(())
}
