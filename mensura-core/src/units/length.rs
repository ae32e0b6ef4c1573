//! Length units.
//!
//! The base unit for this kind is [`Meter`](LengthUnit::Meter).
//!
//! This module covers:
//! - The metre and its usual SI-prefixed submultiples plus the kilometre.
//! - Exact international customary units (inch, foot, yard, mile; defined from `1 in = 0.0254 m`).
//! - The international nautical mile (`1852 m`).
//!
//! ```rust
//! use mensura_core::length::{Length, LengthUnit};
//! use mensura_core::Quantity;
//!
//! let marathon = Quantity::<Length>::from_kilometers(42.195);
//! let miles = marathon.convert(LengthUnit::Mile).unwrap();
//! assert!((miles - 26.2188).abs() < 1e-4);
//! ```

use crate::macros::unit_accessors;
use crate::UnitKind;

const NANOMETER: f64 = 1e-9;
const MICROMETER: f64 = 1e-6;
const MILLIMETER: f64 = 1e-3;
const CENTIMETER: f64 = 1e-2;
const DECIMETER: f64 = 1e-1;
const METER: f64 = 1.0;
const KILOMETER: f64 = 1e3;

const INCH: f64 = 0.0254;
const FOOT: f64 = 0.3048;
const YARD: f64 = 0.9144;
const MILE: f64 = 1609.344;
const NAUTICAL_MILE: f64 = 1852.0;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
pub enum LengthUnit {
    /// `nm`
    Nanometer,
    /// `µm`
    Micrometer,
    /// `mm`
    Millimeter,
    /// `cm`
    Centimeter,
    /// `dm`
    Decimeter,
    /// `m` (base unit)
    Meter,
    /// `km`
    Kilometer,
    /// `in`
    Inch,
    /// `ft`
    Foot,
    /// `yd`
    Yard,
    /// `mi`
    Mile,
    /// `NM`
    NauticalMile,
}

crate::quantity_kind! {
    /// Length.
    pub enum Length: LengthUnit {
        base Meter => "m",
        Nanometer => (NANOMETER, "nm"),
        Micrometer => (MICROMETER, "µm"),
        Millimeter => (MILLIMETER, "mm"),
        Centimeter => (CENTIMETER, "cm"),
        Decimeter => (DECIMETER, "dm"),
        Kilometer => (KILOMETER, "km"),
        Inch => (INCH, "in"),
        Foot => (FOOT, "ft"),
        Yard => (YARD, "yd"),
        Mile => (MILE, "mi"),
        NauticalMile => (NAUTICAL_MILE, "NM"),
    }
}

unit_accessors!(Length {
    NANOMETER => from_nanometers, nanometers, "nanometres";
    MICROMETER => from_micrometers, micrometers, "micrometres";
    MILLIMETER => from_millimeters, millimeters, "millimetres";
    CENTIMETER => from_centimeters, centimeters, "centimetres";
    DECIMETER => from_decimeters, decimeters, "decimetres";
    METER => from_meters, meters, "metres";
    KILOMETER => from_kilometers, kilometers, "kilometres";
    INCH => from_inches, inches, "inches";
    FOOT => from_feet, feet, "feet";
    YARD => from_yards, yards, "yards";
    MILE => from_miles, miles, "miles";
    NAUTICAL_MILE => from_nautical_miles, nautical_miles, "nautical miles";
});
