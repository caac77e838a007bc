//! Solver error taxonomy
//!
//! Every fallible solver operation returns one of these variants. Validation
//! runs at the solver boundary before any physics is evaluated, so a failed
//! solve never yields a partial result.

use thiserror::Error;

/// Errors raised by parameter validation and scalar derivation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A parameter is outside its admissible range (non-positive, non-finite,
    /// or incompatible with the closed-form equations).
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as exposed on the params record
        name: &'static str,
        /// Offending value
        value: f64,
        /// Human-readable constraint that was violated
        reason: &'static str,
    },

    /// The doping combination violates the p-type precondition of the
    /// Schottky contact model (requires Na > Nd strictly).
    #[error("invalid doping regime: Na = {na:e} cm^-3 must exceed Nd = {nd:e} cm^-3")]
    InvalidDopingRegime {
        /// Acceptor concentration [cm⁻³]
        na: f64,
        /// Donor concentration [cm⁻³]
        nd: f64,
    },

    /// An intermediate of the incomplete-ionization equation overflowed to
    /// Inf or collapsed to NaN, typically `exp(Ea/kT)` at a low temperature.
    #[error("numeric overflow in {context} at T = {temperature} K")]
    NumericOverflow {
        /// Which intermediate blew up
        context: &'static str,
        /// Temperature the solve was attempted at [K]
        temperature: f64,
    },
}

// =================================================================================================
// Tests
// =================================================================================================
