//! Device parameter records
//!
//! This module defines the user-facing inputs of the two solver variants.
//! Parameters describe **one device** (doping, geometry, contact metal) and
//! are supplied fresh for every solve; the fixed material data lives in
//! [`crate::physics`] instead.
//!
//! Both records validate on construction, so a solver receiving a constructed
//! record can trust the basic positivity/finiteness constraints and only has
//! to check the regime conditions its own equations add.
//!
//! # Available Parameter Records
//!
//! - [`HomojunctionParams`]: p-n homojunction (Na, Nd, side lengths)
//! - [`SchottkyParams`]: metal / p-type contact (Na, Nd, T, work function,
//!   electron affinity, rendering margins)

// =================================================================================================
// Module Declarations
// =================================================================================================

mod homojunction;
mod schottky;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use homojunction::HomojunctionParams;
pub use schottky::SchottkyParams;
