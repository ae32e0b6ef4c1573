//! Table-driven, strongly typed physical quantities.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API from `mensura-core` plus the
//! built-in quantity kinds (electric potential, length, mass, duration).
//!
//! The core idea is: a value is always a `Quantity<K>`, where `K` is a zero-sized *kind* marker. The magnitude is
//! stored once, in the kind's base unit, and every unit the kind knows about lives in a single immutable table.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds (you can't add volts to metres).
//! - Normalises once on construction, so comparisons and arithmetic never need to re-scale.
//! - Reports unregistered units as errors instead of silently producing a value.
//! - Loads additional unit tables from TOML configuration.
//!
//! # What this crate does not try to solve
//!
//! - Unit algebra across kinds (`V * A`), or automatic simplification of such expressions.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Affine units (temperature scales with an offset).
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{ElectricPotential, ElectricPotentialUnit, Quantity};
//!
//! let v = Quantity::<ElectricPotential>::from_volts(5.0) + Quantity::from_volts(2.5);
//! assert_eq!(v.to_string(), "7.5 V");
//!
//! let mv = Quantity::<ElectricPotential>::from_unit(250.0, ElectricPotentialUnit::Millivolt).unwrap();
//! assert!(mv < v);
//! ```
//!
//! Parse a quantity written with any registered abbreviation:
//!
//! ```rust
//! use mensura::{Length, Quantity};
//!
//! let d: Quantity<Length> = "3 ft".parse().unwrap();
//! assert!((d.meters() - 0.9144).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Duration, ElectricPotential, Quantity};
//!
//! let v = Quantity::<ElectricPotential>::from_volts(1.0);
//! let t = Quantity::<Duration>::from_seconds(1.0);
//! let _ = v + t; // cannot add different kinds
//! ```
//!
//! # Modules
//!
//! Kinds are grouped under modules (also re-exported at the crate root for convenience):
//!
//! - `mensura::electric_potential` (volts and their SI prefixes)
//! - `mensura::length` (metres, kilometres, inches, miles, nautical miles, …)
//! - `mensura::mass` (grams, kilograms, tonnes, pounds, ounces)
//! - `mensura::duration` (seconds through weeks)
//!
//! # Feature flags
//!
//! - `approx`: implements `approx::{AbsDiffEq, RelativeEq, UlpsEq}` for `Quantity<K>`.
//!
//! # Panics and errors
//!
//! Conversions to units a kind does not register return [`QuantityError`]. Building or loading a unit table
//! returns [`ConfigError`]. Arithmetic follows IEEE-754 behaviour (NaN and infinities propagate).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define unit enums.
///
/// This macro expands in terms of `crate::UnitKind`, so the deriving crate must have `UnitKind` in scope at its
/// root (for example through `use mensura::UnitKind;`).
pub use mensura_derive::UnitKind;

pub use mensura_core::units::duration;
pub use mensura_core::units::electric_potential;
pub use mensura_core::units::length;
pub use mensura_core::units::mass;

pub use mensura_core::units::duration::*;
pub use mensura_core::units::electric_potential::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass::*;
