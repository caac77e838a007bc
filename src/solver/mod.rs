//! Band-profile solvers
//!
//! This module hosts the two solver variants and the machinery they share:
//!
//! - [`HomojunctionSolver`]: p-n junction with fully ionized dopants
//! - [`SchottkySolver`]: metal / p-type contact with incomplete ionization
//! - [`GridConfig`]: spatial sampling resolution
//! - [`SolverError`]: the error taxonomy
//!
//! # Architecture
//!
//! Each solver is a value holding only material constants. A solve is a pure
//! function of (constants, parameters): `scalars()` derives the closed-form
//! device quantities, `band_profile()` samples the piecewise bands on a grid,
//! and `solve()` bundles both into a solution record. No state is retained
//! between calls, so repeated solves of the same inputs are bit-identical.
//!
//! # Usage
//!
//! ```rust
//! use junction_rs::models::SchottkyParams;
//! use junction_rs::solver::{GridConfig, SchottkySolver};
//!
//! # fn main() -> Result<(), junction_rs::solver::SolverError> {
//! let params = SchottkyParams::default();
//! let solution = SchottkySolver::silicon_boron().solve(&params, &GridConfig::default())?;
//!
//! println!("barrier height = {:.3} eV", solution.scalars.barrier_height);
//! # Ok(())
//! # }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================

mod error;
mod homojunction;
mod schottky;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use error::SolverError;
pub use homojunction::{HomojunctionScalars, HomojunctionSolution, HomojunctionSolver};
pub use schottky::{SchottkyScalars, SchottkySolution, SchottkySolver};

// =================================================================================================
// Grid Configuration
// =================================================================================================

/// Spatial sampling resolution for profile generation
///
/// The sample count trades plot smoothness against work; it never changes the
/// derived scalars, which are closed-form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of evenly spaced samples over the rendered axis (default: 500)
    pub samples: usize,
}

impl GridConfig {
    /// Coarse grid for quick previews.
    pub fn coarse() -> Self {
        Self { samples: 100 }
    }

    /// Fine grid for publication-quality renders.
    pub fn fine() -> Self {
        Self { samples: 2000 }
    }

    /// Builder pattern: set the sample count.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// A grid needs at least two samples to span an interval.
    pub(crate) fn validate(&self) -> Result<(), SolverError> {
        if self.samples < 2 {
            return Err(SolverError::InvalidParameter {
                name: "samples",
                value: self.samples as f64,
                reason: "grid needs at least 2 samples",
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { samples: 500 }
    }
}

// =================================================================================================
// Shared Helpers
// =================================================================================================

/// Evenly spaced axis over [start, end] with `samples` points, endpoints
/// included.
pub(crate) fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    let step = (end - start) / (samples - 1) as f64;
    (0..samples).map(|i| start + step * i as f64).collect()
}

// =================================================================================================
// Tests
// =================================================================================================
