//! Predefined quantity kinds.
//!
//! `mensura-core` ships a small set of built-in kinds so that conversions, parsing and formatting work out of the
//! box.
//!
//! ## Modules
//!
//! - [`electric_potential`]: volt family (volt is the base unit).
//! - [`length`]: SI and imperial lengths (metre is the base unit).
//! - [`mass`]: SI and avoirdupois masses (kilogram is the base unit).
//! - [`duration`]: time spans (second is the base unit).

pub mod duration;
pub mod electric_potential;
pub mod length;
pub mod mass;
