//! p-n homojunction solver (full ionization, depletion approximation)
//!
//! Derives the equilibrium scalars of an abrupt p-n junction and samples its
//! four-zone band profile. All dopants are taken as fully ionized, so the
//! closed-form depletion results apply directly:
//!
//! ```text
//! Vbi = kT · ln(Na·Nd / ni²)
//! W   = sqrt( (2·ε·Vbi/q) · (Na+Nd)/(Na·Nd) )        [cm → nm]
//! xn  = W · Na/(Na+Nd)        xp = W · Nd/(Na+Nd)
//! ```
//!
//! The intrinsic level Ei(x) is flat in the neutral zones and parabolic in
//! the depletion zones, with curvatures K = q·N/(2ε) set by the local doping.
//! The band edges follow rigidly: Ec = Ei + Eg/2, Ev = Ei − Eg/2, and the
//! Fermi level is the zero of energy everywhere (equilibrium).

use nalgebra::DVector;

use crate::models::HomojunctionParams;
use crate::physics::{BandProfile, MaterialConstants, CM_TO_NM, PER_NM2};
use crate::solver::{linspace, GridConfig, SolverError};

// =================================================================================================
// Zone Classification
// =================================================================================================

/// The four contiguous zones of the junction, p side to n side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    /// Neutral p region, x < -xp
    NeutralP,
    /// p-side depletion, -xp ≤ x < 0
    DepletionP,
    /// n-side depletion, 0 ≤ x < xn
    DepletionN,
    /// Neutral n region, x ≥ xn
    NeutralN,
}

impl Zone {
    /// Classify a position against the depletion edges.
    fn classify(x: f64, xp: f64, xn: f64) -> Self {
        if x < -xp {
            Zone::NeutralP
        } else if x < 0.0 {
            Zone::DepletionP
        } else if x < xn {
            Zone::DepletionN
        } else {
            Zone::NeutralN
        }
    }
}

// =================================================================================================
// Scalar Results
// =================================================================================================

/// Closed-form equilibrium scalars of one homojunction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomojunctionScalars {
    /// Built-in potential Vbi [eV]
    pub built_in_potential: f64,

    /// Total depletion width W = xp + xn [nm]
    pub depletion_width: f64,

    /// p-side depletion width xp [nm]
    pub p_depletion_width: f64,

    /// n-side depletion width xn [nm]
    pub n_depletion_width: f64,
}

/// Scalars plus the sampled band profile of one solve
#[derive(Clone, Debug, PartialEq)]
pub struct HomojunctionSolution {
    /// Derived device scalars
    pub scalars: HomojunctionScalars,

    /// Sampled band profile over [-Lp, +Ln]
    pub profile: BandProfile,
}

// =================================================================================================
// Solver
// =================================================================================================

/// Equilibrium band-profile solver for abrupt p-n homojunctions
///
/// Holds only the material constants; every solve is a pure function of the
/// supplied parameters.
///
/// # Example
///
/// ```rust
/// use junction_rs::models::HomojunctionParams;
/// use junction_rs::solver::{GridConfig, HomojunctionSolver};
///
/// # fn main() -> Result<(), junction_rs::solver::SolverError> {
/// let solver = HomojunctionSolver::silicon();
/// let params = HomojunctionParams::new(1.0e17, 1.0e16, 150.0, 150.0)?;
///
/// let scalars = solver.scalars(&params)?;
/// assert!(scalars.built_in_potential > 0.7 && scalars.built_in_potential < 0.8);
///
/// let solution = solver.solve(&params, &GridConfig::default())?;
/// assert_eq!(solution.scalars, scalars);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HomojunctionSolver {
    constants: MaterialConstants,
}

impl HomojunctionSolver {
    /// Solver over silicon at 300 K.
    pub const fn silicon() -> Self {
        Self {
            constants: MaterialConstants::silicon(),
        }
    }

    /// Solver over custom material constants.
    pub const fn new(constants: MaterialConstants) -> Self {
        Self { constants }
    }

    /// Material constants this solver evaluates with.
    pub fn constants(&self) -> &MaterialConstants {
        &self.constants
    }

    // ===================================== Scalar Derivation =====================================

    /// Derive the closed-form junction scalars.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] on invalid parameters, or when the
    /// doping product Na·Nd does not exceed ni² (Vbi would be non-positive
    /// and the depletion width undefined).
    pub fn scalars(&self, params: &HomojunctionParams) -> Result<HomojunctionScalars, SolverError> {
        params.validate()?;

        let c = &self.constants;
        let na = params.acceptor_concentration;
        let nd = params.donor_concentration;
        let ni2 = c.intrinsic_concentration * c.intrinsic_concentration;

        if na * nd <= ni2 {
            return Err(SolverError::InvalidParameter {
                name: "doping_product",
                value: na * nd,
                reason: "Na*Nd must exceed ni^2 for a positive built-in potential",
            });
        }

        let kt = c.thermal_voltage();
        let built_in_potential = kt * (na * nd / ni2).ln();

        // W in cm, then nm. The (Na+Nd)/(Na·Nd) factor is the series sum of
        // the two one-sided widths.
        let width_cm = ((2.0 * c.permittivity() * built_in_potential / c.elementary_charge)
            * (na + nd)
            / (na * nd))
            .sqrt();
        let depletion_width = width_cm * CM_TO_NM;

        let n_depletion_width = depletion_width * na / (na + nd);
        let p_depletion_width = depletion_width * nd / (na + nd);

        Ok(HomojunctionScalars {
            built_in_potential,
            depletion_width,
            p_depletion_width,
            n_depletion_width,
        })
    }

    // ===================================== Profile Generation ====================================

    /// Sample the four-zone band profile over [-Lp, +Ln].
    pub fn band_profile(
        &self,
        params: &HomojunctionParams,
        scalars: &HomojunctionScalars,
        grid: &GridConfig,
    ) -> Result<BandProfile, SolverError> {
        grid.validate()?;

        let c = &self.constants;
        let kt = c.thermal_voltage();
        let xp = scalars.p_depletion_width;
        let xn = scalars.n_depletion_width;

        // Neutral intrinsic levels and depletion curvatures [eV/nm²].
        let level_p = kt * (params.acceptor_concentration / c.intrinsic_concentration).ln();
        let level_n = -kt * (params.donor_concentration / c.intrinsic_concentration).ln();
        let curvature_p =
            c.elementary_charge * params.acceptor_concentration / (2.0 * c.permittivity())
                * PER_NM2;
        let curvature_n =
            c.elementary_charge * params.donor_concentration / (2.0 * c.permittivity()) * PER_NM2;

        let axis = linspace(-params.p_side_length, params.n_side_length, grid.samples);
        let half_gap = c.bandgap / 2.0;

        let mut conduction = Vec::with_capacity(axis.len());
        let mut valence = Vec::with_capacity(axis.len());

        for &x in &axis {
            let intrinsic = match Zone::classify(x, xp, xn) {
                Zone::NeutralP => level_p,
                Zone::DepletionP => {
                    let dx = x + xp;
                    level_p - curvature_p * dx * dx
                }
                Zone::DepletionN => {
                    let dx = xn - x;
                    level_n + curvature_n * dx * dx
                }
                Zone::NeutralN => level_n,
            };
            conduction.push(intrinsic + half_gap);
            valence.push(intrinsic - half_gap);
        }

        BandProfile::new(
            DVector::from_vec(axis),
            DVector::from_vec(conduction),
            DVector::from_vec(valence),
            DVector::zeros(grid.samples),
            None,
        )
    }

    /// Derive the scalars and sample the profile in one call.
    pub fn solve(
        &self,
        params: &HomojunctionParams,
        grid: &GridConfig,
    ) -> Result<HomojunctionSolution, SolverError> {
        let scalars = self.scalars(params)?;
        let profile = self.band_profile(params, &scalars, grid)?;
        Ok(HomojunctionSolution { scalars, profile })
    }
}

impl Default for HomojunctionSolver {
    fn default() -> Self {
        Self::silicon()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params() -> HomojunctionParams {
        HomojunctionParams::new(1e17, 1e16, 150.0, 350.0).unwrap()
    }

    #[test]
    fn test_reference_scalars() {
        let scalars = HomojunctionSolver::silicon()
            .scalars(&reference_params())
            .unwrap();

        // Vbi = 0.025851 · ln(1e33 / 2.25e20) ≈ 0.7529 eV
        assert_relative_eq!(scalars.built_in_potential, 0.75286, max_relative = 1e-3);
        // W ≈ 327 nm, split 1:10 against the doping ratio
        assert_relative_eq!(scalars.depletion_width, 327.3, max_relative = 5e-3);
        assert_relative_eq!(
            scalars.n_depletion_width / scalars.p_depletion_width,
            10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_width_additivity_and_charge_balance() {
        let params = reference_params();
        let scalars = HomojunctionSolver::silicon().scalars(&params).unwrap();

        assert_relative_eq!(
            scalars.p_depletion_width + scalars.n_depletion_width,
            scalars.depletion_width,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            params.acceptor_concentration * scalars.p_depletion_width,
            params.donor_concentration * scalars.n_depletion_width,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_symmetric_junction_splits_evenly() {
        let params = HomojunctionParams::new(1e16, 1e16, 300.0, 300.0).unwrap();
        let scalars = HomojunctionSolver::silicon().scalars(&params).unwrap();
        assert_relative_eq!(
            scalars.p_depletion_width,
            scalars.n_depletion_width,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rejects_intrinsic_doping_product() {
        // Na·Nd = 1e20 < ni² = 2.25e20: no positive Vbi exists.
        let params = HomojunctionParams::new(1e10, 1e10, 150.0, 150.0).unwrap();
        let result = HomojunctionSolver::silicon().scalars(&params);
        assert!(matches!(
            result,
            Err(SolverError::InvalidParameter { name: "doping_product", .. })
        ));
    }

    #[test]
    fn test_profile_shape() {
        let params = reference_params();
        let solver = HomojunctionSolver::silicon();
        let solution = solver.solve(&params, &GridConfig { samples: 1001 }).unwrap();

        let profile = &solution.profile;
        assert_eq!(profile.len(), 1001);
        assert!(!profile.has_vacuum_level());

        // Band edges track the intrinsic level rigidly: Ec − Ev = Eg.
        let eg = solver.constants().bandgap;
        for i in 0..profile.len() {
            assert_relative_eq!(
                profile.conduction()[i] - profile.valence()[i],
                eg,
                epsilon = 1e-12
            );
            assert_eq!(profile.fermi()[i], 0.0);
        }
    }

    #[test]
    fn test_profile_total_band_bending_is_vbi() {
        let params = reference_params();
        let solver = HomojunctionSolver::silicon();
        let solution = solver.solve(&params, &GridConfig::default()).unwrap();

        let ec = solution.profile.conduction();
        let drop = ec[0] - ec[solution.profile.len() - 1];
        assert_relative_eq!(
            drop,
            solution.scalars.built_in_potential,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_solve_is_idempotent() {
        let params = reference_params();
        let solver = HomojunctionSolver::silicon();
        let grid = GridConfig::default();
        let first = solver.solve(&params, &grid).unwrap();
        let second = solver.solve(&params, &grid).unwrap();
        assert_eq!(first, second);
    }
}
