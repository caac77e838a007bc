//! Metal / p-type Schottky contact parameters
//!
//! The Schottky variant models a metal deposited on a compensated p-type
//! semiconductor. Dopant ionization is incomplete, so the temperature and the
//! compensating donor background enter the Fermi-level computation, and the
//! contact metal enters through its work function.
//!
//! The metallurgical interface sits at z = 0; the metal occupies negative
//! positions and the semiconductor positive ones.

use crate::solver::SolverError;

// =================================================================================================
// Schottky Parameters
// =================================================================================================

/// User-supplied parameters of one metal / p-type contact
///
/// # Fields
///
/// - `acceptor_concentration`: Na [cm⁻³], the dominant dopant
/// - `donor_concentration`: Nd [cm⁻³], compensating background (Na > Nd)
/// - `temperature`: lattice temperature T [K]
/// - `metal_work_function`: Wm [eV] below the vacuum level
/// - `electron_affinity`: semiconductor Xs [eV]
/// - `metal_margin` / `bulk_margin`: rendered extent past the interface and
///   past the depletion edge [nm]
///
/// # Example
///
/// ```rust
/// use junction_rs::models::SchottkyParams;
///
/// // Aluminium-like contact on lightly boron-doped silicon
/// let params = SchottkyParams::new(1.0e16, 1.0e12, 300.0, 4.5, 4.05).unwrap();
/// assert!(params.acceptor_concentration > params.donor_concentration);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchottkyParams {
    /// Acceptor concentration Na [cm⁻³]
    pub acceptor_concentration: f64,

    /// Compensating donor concentration Nd [cm⁻³]
    pub donor_concentration: f64,

    /// Lattice temperature T [K]
    pub temperature: f64,

    /// Metal work function Wm [eV]
    pub metal_work_function: f64,

    /// Semiconductor electron affinity Xs [eV]
    pub electron_affinity: f64,

    /// Rendered metal-side extent [nm]
    pub metal_margin: f64,

    /// Rendered bulk extent beyond the depletion edge [nm]
    pub bulk_margin: f64,
}

impl SchottkyParams {
    /// Default rendered extent on either side of the active region [nm].
    pub const DEFAULT_MARGIN: f64 = 50.0;

    /// Create parameters with the default rendering margins.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidParameter`] when a field is non-positive or
    /// non-finite; [`SolverError::InvalidDopingRegime`] when Na ≤ Nd.
    pub fn new(
        acceptor_concentration: f64,
        donor_concentration: f64,
        temperature: f64,
        metal_work_function: f64,
        electron_affinity: f64,
    ) -> Result<Self, SolverError> {
        let params = Self {
            acceptor_concentration,
            donor_concentration,
            temperature,
            metal_work_function,
            electron_affinity,
            metal_margin: Self::DEFAULT_MARGIN,
            bulk_margin: Self::DEFAULT_MARGIN,
        };
        params.validate()?;
        Ok(params)
    }

    /// Create parameters from log₁₀ doping exponents.
    pub fn from_log_doping(
        acceptor_exponent: f64,
        donor_exponent: f64,
        temperature: f64,
        metal_work_function: f64,
        electron_affinity: f64,
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
            temperature,
            metal_work_function,
            electron_affinity,
        )
    }

    /// Builder pattern: set both rendering margins [nm].
    pub fn with_margins(mut self, metal_margin: f64, bulk_margin: f64) -> Result<Self, SolverError> {
        self.metal_margin = metal_margin;
        self.bulk_margin = bulk_margin;
        self.validate()?;
        Ok(self)
    }

    /// Check positivity/finiteness of every field and the p-type regime.
    pub fn validate(&self) -> Result<(), SolverError> {
        let checks = [
            ("acceptor_concentration", self.acceptor_concentration),
            ("donor_concentration", self.donor_concentration),
            ("temperature", self.temperature),
            ("metal_work_function", self.metal_work_function),
            ("electron_affinity", self.electron_affinity),
            ("metal_margin", self.metal_margin),
            ("bulk_margin", self.bulk_margin),
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
        if self.acceptor_concentration <= self.donor_concentration {
            return Err(SolverError::InvalidDopingRegime {
                na: self.acceptor_concentration,
                nd: self.donor_concentration,
            });
        }
        Ok(())
    }
}

impl Default for SchottkyParams {
    /// Aluminium-like contact (Wm = 4.5 eV) on lightly boron-doped silicon
    /// (Na = 10¹⁶ cm⁻³ over a 10¹² cm⁻³ donor background) at 300 K.
    fn default() -> Self {
        Self {
            acceptor_concentration: 1.0e16,
            donor_concentration: 1.0e12,
            temperature: 300.0,
            metal_work_function: 4.5,
            electron_affinity: 4.05,
            metal_margin: Self::DEFAULT_MARGIN,
            bulk_margin: Self::DEFAULT_MARGIN,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let params = SchottkyParams::new(1e16, 1e12, 300.0, 4.5, 4.05).unwrap();
        assert_eq!(params.metal_margin, SchottkyParams::DEFAULT_MARGIN);
        assert_eq!(params.temperature, 300.0);
    }

    #[test]
    fn test_from_log_doping() {
        let params = SchottkyParams::from_log_doping(16.0, 12.0, 300.0, 4.5, 4.05).unwrap();
        assert!((params.acceptor_concentration - 1e16).abs() / 1e16 < 1e-12);
    }

    #[test]
    fn test_rejects_n_type_regime() {
        let result = SchottkyParams::new(1e12, 1e16, 300.0, 4.5, 4.05);
        assert!(matches!(
            result,
            Err(SolverError::InvalidDopingRegime { .. })
        ));
    }

    #[test]
    fn test_rejects_equal_doping() {
        let result = SchottkyParams::new(1e16, 1e16, 300.0, 4.5, 4.05);
        assert!(matches!(
            result,
            Err(SolverError::InvalidDopingRegime { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_fields() {
        assert!(SchottkyParams::new(1e16, 1e12, 0.0, 4.5, 4.05).is_err());
        assert!(SchottkyParams::new(1e16, 1e12, 300.0, -4.5, 4.05).is_err());
        assert!(SchottkyParams::new(1e16, 0.0, 300.0, 4.5, 4.05).is_err());
    }

    #[test]
    fn test_with_margins() {
        let params = SchottkyParams::default().with_margins(25.0, 100.0).unwrap();
        assert_eq!(params.metal_margin, 25.0);
        assert_eq!(params.bulk_margin, 100.0);
        assert!(SchottkyParams::default().with_margins(-1.0, 50.0).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(SchottkyParams::default().validate().is_ok());
    }
}
