//! Mass units.
//!
//! The base unit for this kind is [`Kilogram`](MassUnit::Kilogram). Avoirdupois units use the exact
//! international definition `1 lb = 0.45359237 kg`.

use crate::macros::unit_accessors;
use crate::UnitKind;

const MICROGRAM: f64 = 1e-9;
const MILLIGRAM: f64 = 1e-6;
const GRAM: f64 = 1e-3;
const KILOGRAM: f64 = 1.0;
const TONNE: f64 = 1e3;
const POUND: f64 = 0.453_592_37;
const OUNCE: f64 = POUND / 16.0;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
pub enum MassUnit {
    /// `µg`
    Microgram,
    /// `mg`
    Milligram,
    /// `g`
    Gram,
    /// `kg` (base unit)
    Kilogram,
    /// `t`
    Tonne,
    /// `lb`
    Pound,
    /// `oz`
    Ounce,
}

crate::quantity_kind! {
    /// Mass.
    pub enum Mass: MassUnit {
        base Kilogram => "kg",
        Microgram => (MICROGRAM, "µg"),
        Milligram => (MILLIGRAM, "mg"),
        Gram => (GRAM, "g"),
        Tonne => (TONNE, "t"),
        Pound => (POUND, "lb"),
        Ounce => (OUNCE, "oz"),
    }
}

unit_accessors!(Mass {
    MICROGRAM => from_micrograms, micrograms, "micrograms";
    MILLIGRAM => from_milligrams, milligrams, "milligrams";
    GRAM => from_grams, grams, "grams";
    KILOGRAM => from_kilograms, kilograms, "kilograms";
    TONNE => from_tonnes, tonnes, "tonnes";
    POUND => from_pounds, pounds, "pounds";
    OUNCE => from_ounces, ounces, "ounces";
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Quantity};
    use approx::assert_relative_eq;

    type M = Quantity<Mass>;

    #[test]
    fn base_unit_is_kilogram() {
        assert_eq!(Mass::base_unit(), MassUnit::Kilogram);
        assert_eq!(M::from_grams(1500.0).to_string(), "1.5 kg");
    }

    #[test]
    fn named_factories_agree_with_table() {
        use MassUnit::*;
        let cases: [(MassUnit, fn(f64) -> M, fn(M) -> f64); 7] = [
            (Microgram, M::from_micrograms, M::micrograms),
            (Milligram, M::from_milligrams, M::milligrams),
            (Gram, M::from_grams, M::grams),
            (Kilogram, M::from_kilograms, M::kilograms),
            (Tonne, M::from_tonnes, M::tonnes),
            (Pound, M::from_pounds, M::pounds),
            (Ounce, M::from_ounces, M::ounces),
        ];
        for (unit, from, get) in cases {
            let named = from(7.0);
            assert_eq!(M::from_unit(7.0, unit).unwrap(), named, "{unit}");
            assert_eq!(named.convert(unit).unwrap(), get(named), "{unit}");
        }
    }

    #[test]
    fn pound_and_ounce() {
        assert_relative_eq!(M::from_pounds(1.0).ounces(), 16.0, max_relative = 1e-15);
        assert_relative_eq!(M::from_kilograms(1.0).pounds(), 2.204_622_621_848_776, max_relative = 1e-12);
    }

    #[test]
    fn metric_ladder() {
        assert_relative_eq!(M::from_tonnes(1.0).grams(), 1e6, max_relative = 1e-15);
        assert_relative_eq!(M::from_milligrams(1.0).micrograms(), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn table_lookup_matches_named_accessor() {
        let m = M::from_pounds(3.0);
        assert_eq!(m.convert(MassUnit::Pound).unwrap(), m.pounds());
        assert_eq!(Mass::table().default_abbreviation(MassUnit::Ounce).unwrap(), "oz");
    }
}
