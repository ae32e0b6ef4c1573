//! Core type system for strongly typed physical quantities.
//!
//! `mensura-core` provides a small, table-driven units model:
//!
//! - A *quantity kind* (electric potential, length, …) is a marker type implementing [`Kind`].
//! - Each kind has a closed set of unit identifiers implementing [`UnitKind`], and one immutable
//!   [`UnitTable`] mapping every registered unit to its linear scale and display abbreviation.
//! - A value of a kind is a [`Quantity<K>`], backed by a single `f64` expressed in the kind's base unit.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of kinds (you can't add volts to metres).
//! - One normalisation on construction; arithmetic and comparisons never re-scale.
//! - Explicit failure for units a kind does not register, both as a `Result` ([`Quantity::convert`]) and as an
//!   `Option` ([`Quantity::try_convert`]).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Affine conversions such as Celsius to Kelvin; [`UnitTableBuilder::affine`] exists only so such units are
//!   rejected with a precise [`ConfigError::NonLinearTransform`].
//! - Unit algebra across kinds (volts times amperes).
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::electric_potential::{ElectricPotential, ElectricPotentialUnit};
//! use mensura_core::Quantity;
//!
//! let v = Quantity::<ElectricPotential>::from_volts(5.0) + Quantity::from_volts(2.5);
//! assert_eq!(v.to_string(), "7.5 V");
//! assert_eq!(v.convert(ElectricPotentialUnit::Kilovolt).unwrap(), 0.0075);
//! ```
//!
//! # Panics and errors
//!
//! Lookups return [`QuantityError`]; table construction returns [`ConfigError`]. The built-in kinds panic
//! during their one-time lazy initialisation if their own table declaration is invalid. Arithmetic follows
//! IEEE-754 behaviour (NaN and infinities propagate).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod config;
mod error;
mod kind;
mod macros;
mod quantity;
mod table;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use config::{KindConfig, UnitConfig};
pub use error::{ConfigError, ConfigResult, ParseQuantityError, QuantityError, QuantityResult};
pub use kind::Kind;
pub use quantity::{Quantity, QuantityDisplay};
pub use table::{UnitEntry, UnitTable, UnitTableBuilder};
pub use unit::UnitKind;

/// Derive macro used by `mensura-core` to define unit enums.
pub use mensura_derive::UnitKind;

#[doc(hidden)]
pub mod __private {
    pub use crate::table::expect_table;
    pub use once_cell::sync::Lazy;
}

// ─────────────────────────────────────────────────────────────────────────────
// Predefined quantity kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined quantity kinds.
///
/// These are defined in `mensura-core` so their named constructors (`from_volts`, `meters`, …) can be inherent
/// methods on [`Quantity`].
pub mod units;

pub use units::duration;
pub use units::electric_potential;
pub use units::length;
pub use units::mass;
