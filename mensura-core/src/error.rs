//! Error types for unit lookups, table configuration and quantity parsing.

use std::num::ParseFloatError;
use std::path::PathBuf;

/// Result type for conversions and unit lookups.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Result type for building unit tables.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error raised when a quantity is built from, or converted to, a unit the kind does not register.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The unit is part of the kind's unit enum but has no entry in its [`UnitTable`](crate::UnitTable).
    #[error("unit {unit} is not supported for {kind}")]
    UnsupportedUnit {
        /// Name of the quantity kind whose table was consulted.
        kind: String,
        /// Identifier of the rejected unit.
        unit: &'static str,
    },
}

/// Invalid unit table configuration.
///
/// Raised while a [`UnitTable`](crate::UnitTable) is being built, never during a lookup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No unit was declared as the base unit.
    #[error("{kind}: no base unit declared")]
    MissingBaseUnit {
        /// Quantity kind being configured.
        kind: String,
    },

    /// More than one unit was declared as the base unit.
    #[error("{kind}: base unit {first} conflicts with base unit {second}")]
    MultipleBaseUnits {
        /// Quantity kind being configured.
        kind: String,
        /// First declared base unit.
        first: &'static str,
        /// Second declared base unit.
        second: &'static str,
    },

    /// The base unit's scale is not exactly `1`.
    #[error("{kind}: base unit {unit} must have scale 1, found {scale}")]
    BaseScaleNotOne {
        /// Quantity kind being configured.
        kind: String,
        /// Declared base unit.
        unit: &'static str,
        /// Declared scale.
        scale: f64,
    },

    /// A unit was registered with an empty or missing abbreviation.
    #[error("{kind}: unit {unit} has no abbreviation")]
    MissingAbbreviation {
        /// Quantity kind being configured.
        kind: String,
        /// Offending unit.
        unit: &'static str,
    },

    /// A scale is zero, negative, NaN or infinite.
    #[error("{kind}: unit {unit} has invalid scale {scale} (must be finite and positive)")]
    InvalidScale {
        /// Quantity kind being configured.
        kind: String,
        /// Offending unit.
        unit: &'static str,
        /// Declared scale.
        scale: f64,
    },

    /// A unit declares an affine transform (non-zero offset).
    #[error("{kind}: unit {unit} declares offset {offset}; only linear conversions are supported")]
    NonLinearTransform {
        /// Quantity kind being configured.
        kind: String,
        /// Offending unit.
        unit: &'static str,
        /// Declared offset.
        offset: f64,
    },

    /// The same unit was registered twice.
    #[error("{kind}: unit {unit} registered more than once")]
    DuplicateUnit {
        /// Quantity kind being configured.
        kind: String,
        /// Offending unit.
        unit: &'static str,
    },

    /// Two units share one abbreviation, which would make parsing ambiguous.
    #[error("{kind}: abbreviation {abbreviation:?} used by more than one unit")]
    DuplicateAbbreviation {
        /// Quantity kind being configured.
        kind: String,
        /// Shared abbreviation.
        abbreviation: String,
    },

    /// A configuration document names a unit the unit enum does not declare.
    #[error("{kind}: unknown unit {name:?}")]
    UnknownUnit {
        /// Quantity kind being configured.
        kind: String,
        /// Unrecognised unit name.
        name: String,
    },

    /// The TOML document is malformed or does not match the expected shape.
    #[error("failed to parse unit configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read unit configuration {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Error returned when parsing a [`Quantity`](crate::Quantity) from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseQuantityError {
    /// The input is empty or only whitespace.
    #[error("cannot parse a quantity from an empty string")]
    Empty,

    /// The input holds a number but no unit abbreviation.
    #[error("missing unit abbreviation in {0:?}")]
    MissingUnit(String),

    /// The numeric part could not be parsed.
    #[error("invalid number {input:?}: {source}")]
    InvalidNumber {
        /// Text that failed to parse.
        input: String,
        /// Underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// No registered unit uses the abbreviation.
    #[error("unknown {kind} unit abbreviation {abbreviation:?}")]
    UnknownAbbreviation {
        /// Quantity kind whose table was consulted.
        kind: String,
        /// Unrecognised abbreviation.
        abbreviation: String,
    },

    /// The abbreviation resolved to a unit that cannot be used.
    #[error(transparent)]
    Unit(#[from] QuantityError),
}
