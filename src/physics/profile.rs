//! Band profile container
//!
//! A [`BandProfile`] is the spatial output of one solve: an ordered sequence
//! of samples over a finite position axis, stored column-wise. Each sample
//! carries the conduction-band, valence-band, and Fermi-level energies, plus
//! the vacuum level for the Schottky variant.
//!
//! The container is immutable after construction and is the single artifact
//! the rendering and export collaborators consume.
//!
//! # Invariants (checked at construction)
//!
//! - all columns have the same, non-zero length
//! - positions are strictly increasing (no gaps, no duplicates)
//! - every energy is finite (a NaN here would mean a solver bug, and must
//!   never leak into rendering or export)

use nalgebra::DVector;

use crate::solver::SolverError;

// =================================================================================================
// Band Profile
// =================================================================================================

/// Ordered spatial samples of the band energies over a finite interval
///
/// Positions are in nanometers; all energies are in eV relative to the Fermi
/// level, which is the constant-zero equilibrium reference.
///
/// # Columns
///
/// - **position_nm**: sample positions, strictly increasing
/// - **conduction**: Ec(x)
/// - **valence**: Ev(x)
/// - **fermi**: Ef(x) ≡ 0 across the whole domain (equilibrium)
/// - **vacuum**: Evac(x), present only for the Schottky variant
///
/// # Example
///
/// ```rust
/// use junction_rs::models::HomojunctionParams;
/// use junction_rs::solver::{GridConfig, HomojunctionSolver};
///
/// # fn main() -> Result<(), junction_rs::solver::SolverError> {
/// let params = HomojunctionParams::from_log_doping(17.0, 16.0, 150.0, 150.0)?;
/// let solution = HomojunctionSolver::silicon().solve(&params, &GridConfig::default())?;
///
/// let profile = &solution.profile;
/// assert!(!profile.has_vacuum_level());
/// assert_eq!(profile.fermi()[0], 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BandProfile {
    position_nm: DVector<f64>,
    conduction: DVector<f64>,
    valence: DVector<f64>,
    fermi: DVector<f64>,
    vacuum: Option<DVector<f64>>,
}

impl BandProfile {
    /// Create a profile, checking the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidParameter`] when the columns are empty
    /// or mismatched in length, positions are not strictly increasing, or any
    /// value is non-finite.
    pub fn new(
        position_nm: DVector<f64>,
        conduction: DVector<f64>,
        valence: DVector<f64>,
        fermi: DVector<f64>,
        vacuum: Option<DVector<f64>>,
    ) -> Result<Self, SolverError> {
        let n = position_nm.len();
        if n == 0 {
            return Err(SolverError::InvalidParameter {
                name: "profile samples",
                value: 0.0,
                reason: "profile must contain at least one sample",
            });
        }

        let lengths_match = conduction.len() == n
            && valence.len() == n
            && fermi.len() == n
            && vacuum.as_ref().map_or(true, |v| v.len() == n);
        if !lengths_match {
            return Err(SolverError::InvalidParameter {
                name: "profile columns",
                value: n as f64,
                reason: "all energy columns must match the position axis length",
            });
        }

        for pair in position_nm.as_slice().windows(2) {
            if !(pair[1] > pair[0]) {
                return Err(SolverError::InvalidParameter {
                    name: "position_nm",
                    value: pair[1],
                    reason: "positions must be strictly increasing",
                });
            }
        }

        let all_finite = position_nm.iter().all(|v| v.is_finite())
            && conduction.iter().all(|v| v.is_finite())
            && valence.iter().all(|v| v.is_finite())
            && fermi.iter().all(|v| v.is_finite())
            && vacuum
                .as_ref()
                .map_or(true, |col| col.iter().all(|v| v.is_finite()));
        if !all_finite {
            return Err(SolverError::InvalidParameter {
                name: "profile energies",
                value: f64::NAN,
                reason: "profile contains NaN or Inf",
            });
        }

        Ok(Self {
            position_nm,
            conduction,
            valence,
            fermi,
            vacuum,
        })
    }

    // ========================================== Queries ==========================================

    /// Number of spatial samples.
    pub fn len(&self) -> usize {
        self.position_nm.len()
    }

    /// Check emptiness (never true for a constructed profile).
    pub fn is_empty(&self) -> bool {
        self.position_nm.is_empty()
    }

    /// Whether the profile carries a vacuum-level column (Schottky variant).
    pub fn has_vacuum_level(&self) -> bool {
        self.vacuum.is_some()
    }

    // ========================================= Accessors =========================================

    /// Sample positions [nm], strictly increasing.
    pub fn position_nm(&self) -> &DVector<f64> {
        &self.position_nm
    }

    /// Conduction-band energy Ec [eV] per sample.
    pub fn conduction(&self) -> &DVector<f64> {
        &self.conduction
    }

    /// Valence-band energy Ev [eV] per sample.
    pub fn valence(&self) -> &DVector<f64> {
        &self.valence
    }

    /// Fermi level Ef [eV] per sample (constant zero at equilibrium).
    pub fn fermi(&self) -> &DVector<f64> {
        &self.fermi
    }

    /// Vacuum level Evac [eV] per sample, when present.
    pub fn vacuum(&self) -> Option<&DVector<f64>> {
        self.vacuum.as_ref()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[f64]) -> DVector<f64> {
        DVector::from_row_slice(values)
    }

    #[test]
    fn test_valid_profile() {
        let profile = BandProfile::new(
            column(&[0.0, 1.0, 2.0]),
            column(&[0.5, 0.6, 0.7]),
            column(&[-0.5, -0.4, -0.3]),
            DVector::zeros(3),
            None,
        )
        .unwrap();

        assert_eq!(profile.len(), 3);
        assert!(!profile.is_empty());
        assert!(!profile.has_vacuum_level());
        assert_eq!(profile.conduction()[2], 0.7);
    }

    #[test]
    fn test_vacuum_column_roundtrip() {
        let profile = BandProfile::new(
            column(&[-1.0, 0.0]),
            column(&[0.1, 0.2]),
            column(&[-1.0, -0.9]),
            DVector::zeros(2),
            Some(column(&[4.5, 4.6])),
        )
        .unwrap();

        assert!(profile.has_vacuum_level());
        assert_eq!(profile.vacuum().unwrap()[1], 4.6);
    }

    #[test]
    fn test_empty_profile_rejected() {
        let result = BandProfile::new(
            DVector::zeros(0),
            DVector::zeros(0),
            DVector::zeros(0),
            DVector::zeros(0),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = BandProfile::new(
            column(&[0.0, 1.0, 2.0]),
            column(&[0.5, 0.6]),
            column(&[-0.5, -0.4, -0.3]),
            DVector::zeros(3),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_monotonic_positions_rejected() {
        let result = BandProfile::new(
            column(&[0.0, 2.0, 1.0]),
            DVector::zeros(3),
            DVector::zeros(3),
            DVector::zeros(3),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_positions_rejected() {
        let result = BandProfile::new(
            column(&[0.0, 1.0, 1.0]),
            DVector::zeros(3),
            DVector::zeros(3),
            DVector::zeros(3),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_energy_rejected() {
        let result = BandProfile::new(
            column(&[0.0, 1.0]),
            column(&[0.5, f64::NAN]),
            DVector::zeros(2),
            DVector::zeros(2),
            None,
        );
        assert!(result.is_err());
    }
}
