//! Physical constants and shared value types
//!
//! This module provides the fixed material data and the profile container
//! shared by both solver variants:
//!
//! - **Material constants**: immutable records of the physical constants a
//!   solver needs (charge, permittivity, bandgap, ...), supplied as
//!   compile-time defaults rather than user input
//! - **Band profile**: the ordered sequence of spatial samples produced by a
//!   solve, consumed by the rendering and export collaborators
//!
//! # Architecture
//!
//! Constants are **separate from device parameters**:
//! - Constants describe the material (silicon by default) and never change
//!   between solves
//! - Parameters ([`crate::models`]) describe one device and are supplied by
//!   the user for every solve
//!
//! This separation keeps a solver a pure function of (constants, parameters).

// =================================================================================================
// Module Declarations
// =================================================================================================

mod constants;
mod profile;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use constants::{MaterialConstants, SchottkyConstants, CM_TO_NM, M3_TO_CM3, PER_NM2};
pub use profile::BandProfile;
