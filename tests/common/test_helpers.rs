//! Helper functions for integration tests

use junction_rs::models::{HomojunctionParams, SchottkyParams};
use junction_rs::physics::BandProfile;

/// Reference p-n device: Na = 1e17, Nd = 1e16 cm⁻³ in silicon, rendered wide
/// enough that both neutral zones are visible past the depletion edges.
pub fn reference_homojunction() -> HomojunctionParams {
    HomojunctionParams::new(1e17, 1e16, 150.0, 350.0).unwrap()
}

/// Reference contact: aluminium (Wm = 4.5 eV) on lightly boron-doped silicon
/// (Na = 1e16 over an Nd = 1e12 cm⁻³ background) at 300 K.
pub fn reference_schottky() -> SchottkyParams {
    SchottkyParams::new(1e16, 1e12, 300.0, 4.5, 4.05).unwrap()
}

/// Largest jump between adjacent samples of a profile column.
pub fn max_adjacent_jump(column: &nalgebra::DVector<f64>) -> f64 {
    column
        .as_slice()
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .fold(0.0, f64::max)
}

/// Assert that a column is constant over a position predicate.
pub fn assert_flat_where<F>(profile: &BandProfile, predicate: F, message: &str)
where
    F: Fn(f64) -> bool,
{
    let positions = profile.position_nm();
    let conduction = profile.conduction();

    let selected: Vec<f64> = positions
        .iter()
        .zip(conduction.iter())
        .filter(|(&x, _)| predicate(x))
        .map(|(_, &e)| e)
        .collect();

    assert!(selected.len() > 1, "{}: too few samples selected", message);
    let first = selected[0];
    for (i, &e) in selected.iter().enumerate() {
        assert!(
            (e - first).abs() < 1e-12,
            "{}: sample {} deviates by {}",
            message,
            i,
            (e - first).abs()
        );
    }
}
