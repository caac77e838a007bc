//! p-n homojunction device parameters
//!
//! The homojunction variant models an abrupt junction between a uniformly
//! acceptor-doped p side and a uniformly donor-doped n side of the same
//! material, with fully ionized dopants. The parameters are the two doping
//! levels and how far the rendered profile extends into each side.
//!
//! The metallurgical junction sits at x = 0; the p side occupies negative
//! positions and the n side positive ones.

use crate::solver::SolverError;

// =================================================================================================
// Homojunction Parameters
// =================================================================================================

/// User-supplied parameters of one p-n homojunction
///
/// # Fields
///
/// - `acceptor_concentration`: Na on the p side [cm⁻³]
/// - `donor_concentration`: Nd on the n side [cm⁻³]
/// - `p_side_length`: rendered extent of the p side, x ∈ [-Lp, 0) [nm]
/// - `n_side_length`: rendered extent of the n side, x ∈ [0, Ln] [nm]
///
/// The side lengths bound the plotted axis only; they do not clip the
/// depletion region, which may extend past them for light doping.
///
/// # Example
///
/// ```rust
/// use junction_rs::models::HomojunctionParams;
///
/// // Na = 1e17 cm^-3, Nd = 1e16 cm^-3, 150 nm rendered on each side
/// let params = HomojunctionParams::new(1.0e17, 1.0e16, 150.0, 150.0).unwrap();
///
/// // Equivalent, from the log10 exponents a doping slider would supply
/// let same = HomojunctionParams::from_log_doping(17.0, 16.0, 150.0, 150.0).unwrap();
/// assert_eq!(params, same);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HomojunctionParams {
    /// Acceptor concentration Na [cm⁻³]
    pub acceptor_concentration: f64,

    /// Donor concentration Nd [cm⁻³]
    pub donor_concentration: f64,

    /// Rendered p-side length Lp [nm]
    pub p_side_length: f64,

    /// Rendered n-side length Ln [nm]
    pub n_side_length: f64,
}

impl HomojunctionParams {
    /// Create parameters from concentrations in cm⁻³.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] when any field is non-positive or
    /// non-finite.
    pub fn new(
        acceptor_concentration: f64,
        donor_concentration: f64,
        p_side_length: f64,
        n_side_length: f64,
    ) -> Result<Self, SolverError> {
        let params = Self {
            acceptor_concentration,
            donor_concentration,
            p_side_length,
            n_side_length,
        };
        params.validate()?;
        Ok(params)
    }

    /// Create parameters from log₁₀ doping exponents.
    ///
    /// `from_log_doping(17.0, 16.5, ...)` means Na = 10¹⁷ cm⁻³ and
    /// Nd = 10^16.5 cm⁻³, matching the log-scaled sliders these doping levels
    /// are usually entered with.
    pub fn from_log_doping(
        acceptor_exponent: f64,
        donor_exponent: f64,
        p_side_length: f64,
        n_side_length: f64,
    ) -> Result<Self, SolverError> {
        if !acceptor_exponent.is_finite() {
            return Err(SolverError::InvalidParameter {
                name: "acceptor_exponent",
                value: acceptor_exponent,
                reason: "must be finite",
            });
        }
        if !donor_exponent.is_finite() {
            return Err(SolverError::InvalidParameter {
                name: "donor_exponent",
                value: donor_exponent,
                reason: "must be finite",
            });
        }
        Self::new(
            10.0_f64.powf(acceptor_exponent),
            10.0_f64.powf(donor_exponent),
            p_side_length,
            n_side_length,
        )
    }

    /// Check positivity and finiteness of every field.
    pub fn validate(&self) -> Result<(), SolverError> {
        let checks = [
            ("acceptor_concentration", self.acceptor_concentration),
            ("donor_concentration", self.donor_concentration),
            ("p_side_length", self.p_side_length),
            ("n_side_length", self.n_side_length),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(SolverError::InvalidParameter {
                    name,
                    value,
                    reason: "must be strictly positive and finite",
                });
            }
        }
        Ok(())
    }
}

impl Default for HomojunctionParams {
    /// Moderately asymmetric silicon junction: Na = 10¹⁷, Nd = 10^16.5 cm⁻³,
    /// 150 nm rendered per side.
    fn default() -> Self {
        Self {
            acceptor_concentration: 1.0e17,
            donor_concentration: 10.0_f64.powf(16.5),
            p_side_length: 150.0,
            n_side_length: 150.0,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
