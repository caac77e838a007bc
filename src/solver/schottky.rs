//! Metal / p-type Schottky contact solver (incomplete ionization)
//!
//! Unlike the homojunction variant, the dopants here are not assumed fully
//! ionized. The bulk Fermi level comes from the closed-form solution of the
//! charge-neutrality equation with an acceptor level at a doping-dependent
//! ionization energy:
//!
//! ```text
//! Ea   = Ea₀ − c·Na^(1/3)
//! Nv   = 2·(2π·m*·k_B·T / h²)^(3/2)                   [m⁻³ → cm⁻³]
//! A    = g·exp(Ea/kT)·Nd/Nv      B = 4·g·exp(Ea/kT)·Na/Nv
//! disc = 1 + B + A·(A − 2)                            (clamped at 0)
//! F    = kT·ln(Nv/(Na−Nd)) + kT·ln(½·(sqrt(disc) + 1 + A))
//! ```
//!
//! with F measured up from the valence band edge. The contact scalars follow:
//! semiconductor work function Ws = Xs + F, built-in voltage Vbi = Ws − Wm,
//! barrier height Sbh = F + Vbi, and depletion width
//! w = sqrt(2·|Vbi|·ε/(q·Na)).
//!
//! The discriminant can only dip below zero through floating-point
//! cancellation; it is clamped to zero and the clamp is flagged on the
//! returned scalars rather than treated as a failure. A genuinely divergent
//! `exp(Ea/kT)` (very low temperature) is a [`SolverError::NumericOverflow`].

use nalgebra::DVector;

use crate::models::SchottkyParams;
use crate::physics::{BandProfile, SchottkyConstants, CM_TO_NM, PER_NM2};
use crate::solver::{linspace, GridConfig, SolverError};

// =================================================================================================
// Zone Classification & Bending Policy
// =================================================================================================

/// The three contiguous zones of the contact, metal side to bulk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContactZone {
    /// Metal, z < 0
    Metal,
    /// Semiconductor depletion, 0 ≤ z < w
    Depletion,
    /// Neutral semiconductor bulk, z ≥ w
    Bulk,
}

impl ContactZone {
    fn classify(z: f64, depletion_width: f64) -> Self {
        if z < 0.0 {
            ContactZone::Metal
        } else if z < depletion_width {
            ContactZone::Depletion
        } else {
            ContactZone::Bulk
        }
    }
}

/// Sign of the depletion-zone band bending, fixed once per solve by the sign
/// of the built-in voltage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BandBending {
    /// Vbi ≥ 0: bands bend up toward the interface
    Upward,
    /// Vbi < 0: bands bend down toward the interface
    Downward,
}

impl BandBending {
    fn from_built_in_voltage(vbi: f64) -> Self {
        if vbi >= 0.0 {
            BandBending::Upward
        } else {
            BandBending::Downward
        }
    }

    /// Parabolic bending at depth z, vanishing at the depletion edge.
    fn evaluate(&self, curvature: f64, z: f64, depletion_width: f64) -> f64 {
        let dz = z - depletion_width;
        let magnitude = curvature * dz * dz;
        match self {
            BandBending::Upward => magnitude,
            BandBending::Downward => -magnitude,
        }
    }
}

/// Charge-neutrality discriminant with the negative-value saturation applied.
///
/// Algebraically `1 + b + a·(a−2) = (1−a)² + b`, which is non-negative for
/// the physical (non-negative) intermediates; floating-point cancellation
/// near a ≈ 1 can still round it below zero. The value saturates at zero and
/// the clamp is reported so the caller can surface it. Non-finite values pass
/// through untouched for the caller's overflow guard.
fn clamped_discriminant(a: f64, b: f64) -> (f64, bool) {
    let raw = 1.0 + b + a * (a - 2.0);
    if raw < 0.0 {
        (0.0, true)
    } else {
        (raw, false)
    }
}

// =================================================================================================
// Scalar Results
// =================================================================================================

/// Closed-form equilibrium scalars of one metal / p-type contact
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchottkyScalars {
    /// Bulk Fermi level above the valence band edge F [eV]
    pub fermi_level: f64,

    /// Semiconductor work function Ws = Xs + F [eV]
    pub semiconductor_work_function: f64,

    /// Built-in voltage Vbi = Ws − Wm [eV], sign carries the bending direction
    pub built_in_voltage: f64,

    /// Schottky barrier height Sbh = F + Vbi [eV]
    pub barrier_height: f64,

    /// Depletion width w [nm]
    pub depletion_width: f64,

    /// Doping-dependent acceptor ionization energy Ea [eV]
    pub ionization_energy: f64,

    /// Effective valence density of states Nv [cm⁻³]
    pub valence_dos: f64,

    /// Whether the charge-neutrality discriminant was clamped at zero
    /// (floating-point cancellation; the result saturates rather than fails)
    pub discriminant_clamped: bool,
}

/// Scalars plus the sampled band profile of one solve
#[derive(Clone, Debug, PartialEq)]
pub struct SchottkySolution {
    /// Derived contact scalars
    pub scalars: SchottkyScalars,

    /// Sampled band profile over [-metal_margin, w + bulk_margin]
    pub profile: BandProfile,
}

// =================================================================================================
// Solver
// =================================================================================================

/// Equilibrium band-profile solver for metal / p-type Schottky contacts
///
/// # Example
///
/// ```rust
/// use junction_rs::models::SchottkyParams;
/// use junction_rs::solver::{GridConfig, SchottkySolver};
///
/// # fn main() -> Result<(), junction_rs::solver::SolverError> {
/// let solver = SchottkySolver::silicon_boron();
/// let scalars = solver.scalars(&SchottkyParams::default())?;
///
/// // Lightly doped p-silicon under aluminium: Fermi level ~0.19 eV above Ev
/// assert!(scalars.fermi_level > 0.0 && scalars.fermi_level < 1.12);
/// assert!(!scalars.discriminant_clamped);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SchottkySolver {
    constants: SchottkyConstants,
}

impl SchottkySolver {
    /// Solver over boron-doped silicon.
    pub const fn silicon_boron() -> Self {
        Self {
            constants: SchottkyConstants::silicon_boron(),
        }
    }

    /// Solver over custom material constants.
    pub const fn new(constants: SchottkyConstants) -> Self {
        Self { constants }
    }

    /// Material constants this solver evaluates with.
    pub fn constants(&self) -> &SchottkyConstants {
        &self.constants
    }

    // ===================================== Scalar Derivation =====================================

    /// Derive the contact scalars from the incomplete-ionization equation.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] / [`SolverError::InvalidDopingRegime`]
    /// on invalid parameters, [`SolverError::NumericOverflow`] when
    /// `exp(Ea/kT)` or the neutrality intermediates leave the finite range.
    pub fn scalars(&self, params: &SchottkyParams) -> Result<SchottkyScalars, SolverError> {
        params.validate()?;

        let c = &self.constants;
        let na = params.acceptor_concentration;
        let nd = params.donor_concentration;
        let kt = c.thermal_voltage(params.temperature);

        let ionization_energy = c.ionization_energy(na);
        let valence_dos = c.valence_dos(params.temperature);

        let exp_term = (ionization_energy / kt).exp();
        if !exp_term.is_finite() {
            return Err(SolverError::NumericOverflow {
                context: "exp(Ea/kT)",
                temperature: params.temperature,
            });
        }

        let a = c.acceptor_degeneracy * exp_term * nd / valence_dos;
        let b = 4.0 * c.acceptor_degeneracy * exp_term * na / valence_dos;
        if !a.is_finite() || !b.is_finite() {
            return Err(SolverError::NumericOverflow {
                context: "charge-neutrality intermediates",
                temperature: params.temperature,
            });
        }

        let (discriminant, discriminant_clamped) = clamped_discriminant(a, b);
        if !discriminant.is_finite() {
            return Err(SolverError::NumericOverflow {
                context: "charge-neutrality discriminant",
                temperature: params.temperature,
            });
        }

        let fermi_level =
            kt * (valence_dos / (na - nd)).ln() + kt * (0.5 * (discriminant.sqrt() + 1.0 + a)).ln();

        let semiconductor_work_function = params.electron_affinity + fermi_level;
        let built_in_voltage = semiconductor_work_function - params.metal_work_function;
        let barrier_height = fermi_level + built_in_voltage;

        let depletion_width = (2.0 * built_in_voltage.abs() * c.permittivity()
            / (c.elementary_charge * na))
            .sqrt()
            * CM_TO_NM;

        Ok(SchottkyScalars {
            fermi_level,
            semiconductor_work_function,
            built_in_voltage,
            barrier_height,
            depletion_width,
            ionization_energy,
            valence_dos,
            discriminant_clamped,
        })
    }

    // ===================================== Profile Generation ====================================

    /// Sample the three-zone band profile over [-metal_margin, w + bulk_margin].
    ///
    /// The metal zone pins the Fermi level at zero and the vacuum level at Wm;
    /// Ec and Ev are carried parallel through it so the band spacing
    /// invariants (Ec − Ev = Eg, Evac − Ec = Xs) hold at every sample.
    pub fn band_profile(
        &self,
        params: &SchottkyParams,
        scalars: &SchottkyScalars,
        grid: &GridConfig,
    ) -> Result<BandProfile, SolverError> {
        grid.validate()?;

        let c = &self.constants;
        let w = scalars.depletion_width;
        let bending = BandBending::from_built_in_voltage(scalars.built_in_voltage);
        let curvature = c.elementary_charge * params.acceptor_concentration
            / (2.0 * c.permittivity())
            * PER_NM2;

        let metal_conduction = params.metal_work_function - params.electron_affinity;

        let axis = linspace(-params.metal_margin, w + params.bulk_margin, grid.samples);

        let mut conduction = Vec::with_capacity(axis.len());
        let mut valence = Vec::with_capacity(axis.len());
        let mut vacuum = Vec::with_capacity(axis.len());

        for &z in &axis {
            let ec = match ContactZone::classify(z, w) {
                ContactZone::Metal => metal_conduction,
                ContactZone::Depletion => {
                    scalars.fermi_level + bending.evaluate(curvature, z, w)
                }
                ContactZone::Bulk => scalars.fermi_level,
            };
            conduction.push(ec);
            valence.push(ec - c.bandgap);
            vacuum.push(ec + params.electron_affinity);
        }

        BandProfile::new(
            DVector::from_vec(axis),
            DVector::from_vec(conduction),
            DVector::from_vec(valence),
            DVector::zeros(grid.samples),
            Some(DVector::from_vec(vacuum)),
        )
    }

    /// Derive the scalars and sample the profile in one call.
    pub fn solve(
        &self,
        params: &SchottkyParams,
        grid: &GridConfig,
    ) -> Result<SchottkySolution, SolverError> {
        let scalars = self.scalars(params)?;
        let profile = self.band_profile(params, &scalars, grid)?;
        Ok(SchottkySolution { scalars, profile })
    }
}

impl Default for SchottkySolver {
    fn default() -> Self {
        Self::silicon_boron()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
