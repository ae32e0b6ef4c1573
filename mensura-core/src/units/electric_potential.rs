//! Electric potential units.
//!
//! The base unit for this kind is [`Volt`](ElectricPotentialUnit::Volt). The table carries the volt and its
//! common SI-prefixed multiples.
//!
//! ```rust
//! use mensura_core::electric_potential::{ElectricPotential, ElectricPotentialUnit};
//! use mensura_core::Quantity;
//!
//! let v = Quantity::<ElectricPotential>::from_millivolts(1500.0);
//! assert_eq!(v.to_string(), "1.5 V");
//! assert_eq!(v.convert(ElectricPotentialUnit::Kilovolt).unwrap(), 0.0015);
//! ```

use crate::macros::unit_accessors;
use crate::UnitKind;

const NANOVOLT: f64 = 1e-9;
const MICROVOLT: f64 = 1e-6;
const MILLIVOLT: f64 = 1e-3;
const VOLT: f64 = 1.0;
const KILOVOLT: f64 = 1e3;
const MEGAVOLT: f64 = 1e6;

/// Units of electric potential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
pub enum ElectricPotentialUnit {
    /// `nV`
    Nanovolt,
    /// `µV`
    Microvolt,
    /// `mV`
    Millivolt,
    /// `V` (base unit)
    Volt,
    /// `kV`
    Kilovolt,
    /// `MV`
    Megavolt,
}

crate::quantity_kind! {
    /// Electric potential difference (voltage).
    pub enum ElectricPotential: ElectricPotentialUnit {
        base Volt => "V",
        Nanovolt => (NANOVOLT, "nV"),
        Microvolt => (MICROVOLT, "µV"),
        Millivolt => (MILLIVOLT, "mV"),
        Kilovolt => (KILOVOLT, "kV"),
        Megavolt => (MEGAVOLT, "MV"),
    }
}

unit_accessors!(ElectricPotential {
    NANOVOLT => from_nanovolts, nanovolts, "nanovolts";
    MICROVOLT => from_microvolts, microvolts, "microvolts";
    MILLIVOLT => from_millivolts, millivolts, "millivolts";
    VOLT => from_volts, volts, "volts";
    KILOVOLT => from_kilovolts, kilovolts, "kilovolts";
    MEGAVOLT => from_megavolts, megavolts, "megavolts";
});
