//! junction-rs: Semiconductor Junction Band-Diagram Toolkit
//!
//! A small, pure library for computing the equilibrium electrostatic band
//! profile of semiconductor junctions under the depletion approximation.
//! Built with Rust for correctness and safety.
//!
//! # Architecture
//!
//! junction-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Presentation**
//!    - Solvers derive scalars and band profiles (what the device does)
//!    - Output collaborators render or export them (how they are shown)
//!
//! 2. **Pure, Stateless Solves**
//!    - Each solve is a pure function of (parameters, material constants)
//!    - Value records in, value records out — no retained state between calls
//!
//! # Solver Variants
//!
//! - **Homojunction**: p-n junction with fully ionized dopants. Derives the
//!   built-in potential and depletion widths, then a four-zone band profile
//!   (neutral p / p-side depletion / n-side depletion / neutral n).
//! - **Schottky**: metal contact on a p-type semiconductor with incomplete
//!   dopant ionization. Determines the Fermi level from a closed-form
//!   charge-neutrality equation, then derives the built-in voltage, barrier
//!   height, depletion width, and a three-zone profile (metal / depletion /
//!   bulk) including the vacuum level.
//!
//! # Quick Start
//!
//! ```rust
//! use junction_rs::models::HomojunctionParams;
//! use junction_rs::solver::{GridConfig, HomojunctionSolver};
//!
//! # fn main() -> Result<(), junction_rs::solver::SolverError> {
//! // 1. Device parameters: doping as log10 exponents, side lengths in nm
//! let params = HomojunctionParams::from_log_doping(17.0, 16.0, 150.0, 150.0)?;
//!
//! // 2. Solve: scalars (Vbi, W, xp, xn) plus the sampled band profile
//! let solver = HomojunctionSolver::silicon();
//! let solution = solver.solve(&params, &GridConfig::default())?;
//!
//! println!("Vbi = {:.4} eV", solution.scalars.built_in_potential);
//! println!("W   = {:.1} nm", solution.scalars.depletion_width);
//! assert_eq!(solution.profile.len(), GridConfig::default().samples);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: material constants and the [`BandProfile`](physics::BandProfile) value type
//! - [`models`]: user-supplied device parameters with validation
//! - [`solver`]: the two solver variants and the error taxonomy
//! - [`output`]: CSV export and plotters-based band-diagram rendering

// Core modules
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use junction_rs::prelude::*;
    //! ```
    pub use crate::models::{HomojunctionParams, SchottkyParams};
    pub use crate::physics::{BandProfile, MaterialConstants, SchottkyConstants};
    pub use crate::solver::{
        GridConfig, HomojunctionSolution, HomojunctionSolver, SchottkySolution, SchottkySolver,
        SolverError,
    };
}
