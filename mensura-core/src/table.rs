//! Unit tables: per-kind conversion factors and abbreviations.
//!
//! Every kind has exactly one base unit with scale `1`. All other units convert linearly through the
//! origin:
//!
//! ```text
//! v_base = v_unit * scale
//! v_unit = v_base / scale
//! ```
//!
//! Tables are validated once, when [`UnitTableBuilder::build`] runs, and are immutable afterwards.

use std::collections::HashMap;

use crate::error::{ConfigError, ConfigResult, QuantityError, QuantityResult};
use crate::UnitKind;

// ─────────────────────────────────────────────────────────────────────────────
// Entries
// ─────────────────────────────────────────────────────────────────────────────

/// One registered unit: its identifier, linear scale to the base unit and display abbreviation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitEntry<U: UnitKind> {
    unit: U,
    scale: f64,
    abbreviation: String,
}

impl<U: UnitKind> UnitEntry<U> {
    /// The unit identifier.
    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Factor such that `base = value * scale`.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Default display abbreviation.
    #[inline]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable lookup table mapping the units of one kind to their conversion rule.
///
/// ```rust
/// use mensura_core::{UnitKind, UnitTable};
/// use mensura_core::electric_potential::ElectricPotentialUnit as U;
///
/// let table = UnitTable::builder("ElectricPotential")
///     .base(U::Volt, "V")
///     .unit(U::Millivolt, 1e-3, "mV")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.scale_to_base(U::Millivolt).unwrap(), 1e-3);
/// assert_eq!(table.default_abbreviation(U::Volt).unwrap(), "V");
/// assert!(table.scale_to_base(U::Kilovolt).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct UnitTable<U: UnitKind> {
    kind: String,
    base_index: usize,
    entries: Vec<UnitEntry<U>>,
    index: HashMap<U, usize>,
}

impl<U: UnitKind> UnitTable<U> {
    /// Starts a new table for the named kind.
    pub fn builder(kind: impl Into<String>) -> UnitTableBuilder<U> {
        UnitTableBuilder::new(kind)
    }

    /// Name of the kind this table describes.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The base unit (scale `1`).
    #[inline]
    pub fn base_unit(&self) -> U {
        self.entries[self.base_index].unit
    }

    /// Abbreviation of the base unit. Infallible: the base unit is always registered.
    #[inline]
    pub fn base_abbreviation(&self) -> &str {
        &self.entries[self.base_index].abbreviation
    }

    /// Multiplicative factor such that `base = value * factor`.
    ///
    /// Fails with [`QuantityError::UnsupportedUnit`] when `unit` is not registered.
    #[inline]
    pub fn scale_to_base(&self, unit: U) -> QuantityResult<f64> {
        self.entry(unit)
            .map(UnitEntry::scale)
            .ok_or_else(|| self.unsupported(unit))
    }

    /// Default display abbreviation of `unit`.
    ///
    /// Fails with [`QuantityError::UnsupportedUnit`] when `unit` is not registered.
    #[inline]
    pub fn default_abbreviation(&self, unit: U) -> QuantityResult<&str> {
        self.entry(unit)
            .map(UnitEntry::abbreviation)
            .ok_or_else(|| self.unsupported(unit))
    }

    /// Full entry for `unit`, if registered.
    #[inline]
    pub fn entry(&self, unit: U) -> Option<&UnitEntry<U>> {
        self.index.get(&unit).map(|&i| &self.entries[i])
    }

    /// Whether `unit` is registered.
    #[inline]
    pub fn contains(&self, unit: U) -> bool {
        self.index.contains_key(&unit)
    }

    /// Registered units, in registration order.
    pub fn units(&self) -> impl Iterator<Item = U> + '_ {
        self.entries.iter().map(UnitEntry::unit)
    }

    /// Registered entries, in registration order.
    #[inline]
    pub fn entries(&self) -> &[UnitEntry<U>] {
        &self.entries
    }

    /// Number of registered units.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a built table, which holds at least its base unit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reverse abbreviation lookup. Exact, case-sensitive.
    pub fn unit_for_abbreviation(&self, abbreviation: &str) -> Option<U> {
        self.entries
            .iter()
            .find(|entry| entry.abbreviation == abbreviation)
            .map(UnitEntry::unit)
    }

    /// Converts a raw value between two registered units, going through the base unit.
    ///
    /// ```rust
    /// use mensura_core::{Kind, UnitTable};
    /// use mensura_core::length::{Length, LengthUnit};
    ///
    /// let feet = Length::table()
    ///     .convert_value(1.0, LengthUnit::Yard, LengthUnit::Foot)
    ///     .unwrap();
    /// assert!((feet - 3.0).abs() < 1e-12);
    /// ```
    pub fn convert_value(&self, value: f64, from: U, to: U) -> QuantityResult<f64> {
        let from_scale = self.scale_to_base(from)?;
        let to_scale = self.scale_to_base(to)?;

        if from == to {
            return Ok(value);
        }

        Ok(value * from_scale / to_scale)
    }

    fn unsupported(&self, unit: U) -> QuantityError {
        QuantityError::UnsupportedUnit {
            kind: self.kind.clone(),
            unit: unit.name(),
        }
    }
}

/// Unwraps a built-in table, treating invalid configuration as fatal.
///
/// Used by [`quantity_kind!`](crate::quantity_kind) inside its lazy initialiser.
///
/// # Panics
///
/// Panics with the configuration error when `result` is an error.
#[doc(hidden)]
pub fn expect_table<U: UnitKind>(result: ConfigResult<UnitTable<U>>) -> UnitTable<U> {
    match result {
        Ok(table) => table,
        Err(err) => panic!("invalid built-in unit table: {err}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct PendingEntry<U> {
    unit: U,
    scale: f64,
    offset: f64,
    abbreviation: String,
    base: bool,
}

/// Collects unit registrations and validates them into a [`UnitTable`].
#[derive(Debug, Clone)]
pub struct UnitTableBuilder<U: UnitKind> {
    kind: String,
    entries: Vec<PendingEntry<U>>,
}

impl<U: UnitKind> UnitTableBuilder<U> {
    /// Starts an empty builder for the named kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            entries: Vec::new(),
        }
    }

    /// Registers the base unit (scale `1`).
    pub fn base(self, unit: U, abbreviation: impl Into<String>) -> Self {
        self.push(unit, 1.0, 0.0, abbreviation.into(), true)
    }

    /// Registers a unit with `base = value * scale`.
    pub fn unit(self, unit: U, scale: f64, abbreviation: impl Into<String>) -> Self {
        self.push(unit, scale, 0.0, abbreviation.into(), false)
    }

    /// Registers a unit with an affine transform `base = value * scale + offset`.
    ///
    /// Affine conversions (temperature-style) are an extension point only: [`build`](Self::build) rejects
    /// any non-zero offset with [`ConfigError::NonLinearTransform`].
    pub fn affine(self, unit: U, scale: f64, offset: f64, abbreviation: impl Into<String>) -> Self {
        self.push(unit, scale, offset, abbreviation.into(), false)
    }

    pub(crate) fn push(
        mut self,
        unit: U,
        scale: f64,
        offset: f64,
        abbreviation: String,
        base: bool,
    ) -> Self {
        self.entries.push(PendingEntry {
            unit,
            scale,
            offset,
            abbreviation,
            base,
        });
        self
    }

    /// Validates the registrations and produces the table.
    pub fn build(self) -> ConfigResult<UnitTable<U>> {
        self.validate().inspect_err(|err| {
            log::error!("rejected unit table configuration: {err}");
        })
    }

    fn validate(self) -> ConfigResult<UnitTable<U>> {
        let kind = self.kind;
        let mut base: Option<U> = None;
        let mut entries: Vec<UnitEntry<U>> = Vec::with_capacity(self.entries.len());
        let mut index: HashMap<U, usize> = HashMap::with_capacity(self.entries.len());

        for pending in self.entries {
            let unit = pending.unit.name();

            if index.contains_key(&pending.unit) {
                return Err(ConfigError::DuplicateUnit { kind, unit });
            }

            let abbreviation = pending.abbreviation.trim();
            if abbreviation.is_empty() {
                return Err(ConfigError::MissingAbbreviation { kind, unit });
            }

            if !pending.scale.is_finite() || pending.scale <= 0.0 {
                return Err(ConfigError::InvalidScale {
                    kind,
                    unit,
                    scale: pending.scale,
                });
            }

            if pending.offset != 0.0 {
                return Err(ConfigError::NonLinearTransform {
                    kind,
                    unit,
                    offset: pending.offset,
                });
            }

            if pending.base {
                if pending.scale != 1.0 {
                    return Err(ConfigError::BaseScaleNotOne {
                        kind,
                        unit,
                        scale: pending.scale,
                    });
                }
                if let Some(first) = base {
                    return Err(ConfigError::MultipleBaseUnits {
                        kind,
                        first: first.name(),
                        second: unit,
                    });
                }
                base = Some(pending.unit);
            }

            if entries.iter().any(|e| e.abbreviation == abbreviation) {
                return Err(ConfigError::DuplicateAbbreviation {
                    kind,
                    abbreviation: abbreviation.to_owned(),
                });
            }

            index.insert(pending.unit, entries.len());
            entries.push(UnitEntry {
                unit: pending.unit,
                scale: pending.scale,
                abbreviation: abbreviation.to_owned(),
            });
        }

        let Some(base_index) = base.and_then(|b| index.get(&b).copied()) else {
            return Err(ConfigError::MissingBaseUnit { kind });
        };

        log::debug!(
            "built {} unit table: {} units, base {}",
            kind,
            entries.len(),
            entries[base_index].unit.name()
        );

        Ok(UnitTable {
            kind,
            base_index,
            entries,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::ProbeUnit;
    use approx::assert_relative_eq;

    fn probe_table() -> UnitTable<ProbeUnit> {
        UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .unit(ProbeUnit::Double, 2.0, "dpb")
            .unit(ProbeUnit::Half, 0.5, "hpb")
            .build()
            .unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn scale_to_base_for_registered_units() {
        let table = probe_table();
        assert_eq!(table.scale_to_base(ProbeUnit::Base).unwrap(), 1.0);
        assert_eq!(table.scale_to_base(ProbeUnit::Double).unwrap(), 2.0);
        assert_eq!(table.scale_to_base(ProbeUnit::Half).unwrap(), 0.5);
    }

    #[test]
    fn scale_to_base_unregistered_unit_fails() {
        let table = probe_table();
        let err = table.scale_to_base(ProbeUnit::Unregistered).unwrap_err();
        assert_eq!(
            err,
            QuantityError::UnsupportedUnit {
                kind: "Probe".to_owned(),
                unit: "Unregistered",
            }
        );
        assert_eq!(err.to_string(), "unit Unregistered is not supported for Probe");
    }

    #[test]
    fn default_abbreviation_lookup() {
        let table = probe_table();
        assert_eq!(table.default_abbreviation(ProbeUnit::Double).unwrap(), "dpb");
        assert!(table.default_abbreviation(ProbeUnit::Unregistered).is_err());
        assert_eq!(table.base_abbreviation(), "pb");
    }

    #[test]
    fn base_unit_and_membership() {
        let table = probe_table();
        assert_eq!(table.kind(), "Probe");
        assert_eq!(table.base_unit(), ProbeUnit::Base);
        assert!(table.contains(ProbeUnit::Half));
        assert!(!table.contains(ProbeUnit::Unregistered));
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn units_iterate_in_registration_order() {
        let table = probe_table();
        let units: Vec<_> = table.units().collect();
        assert_eq!(
            units,
            vec![ProbeUnit::Base, ProbeUnit::Double, ProbeUnit::Half]
        );
        assert_eq!(table.entries()[1].abbreviation(), "dpb");
    }

    #[test]
    fn reverse_abbreviation_lookup_is_exact() {
        let table = probe_table();
        assert_eq!(table.unit_for_abbreviation("hpb"), Some(ProbeUnit::Half));
        assert_eq!(table.unit_for_abbreviation("HPB"), None);
        assert_eq!(table.unit_for_abbreviation(""), None);
    }

    #[test]
    fn convert_value_between_units() {
        let table = probe_table();
        let v = table
            .convert_value(3.0, ProbeUnit::Double, ProbeUnit::Half)
            .unwrap();
        assert_relative_eq!(v, 12.0);
        assert_eq!(
            table
                .convert_value(7.25, ProbeUnit::Half, ProbeUnit::Half)
                .unwrap(),
            7.25
        );
        assert!(table
            .convert_value(1.0, ProbeUnit::Base, ProbeUnit::Unregistered)
            .is_err());
    }

    #[test]
    fn convert_value_same_unregistered_unit_still_fails() {
        let table = probe_table();
        assert!(table
            .convert_value(1.0, ProbeUnit::Unregistered, ProbeUnit::Unregistered)
            .is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Builder validation
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn missing_base_unit_is_rejected() {
        let err = UnitTable::builder("Probe")
            .unit(ProbeUnit::Double, 2.0, "dpb")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUnit { ref kind } if kind == "Probe"));
    }

    #[test]
    fn empty_builder_is_rejected() {
        let err = UnitTableBuilder::<ProbeUnit>::new("Probe").build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUnit { .. }));
    }

    #[test]
    fn second_base_unit_is_rejected() {
        let err = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .base(ProbeUnit::Double, "dpb")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MultipleBaseUnits {
                first: "Base",
                second: "Double",
                ..
            }
        ));
    }

    #[test]
    fn base_scale_other_than_one_is_rejected() {
        let err = UnitTable::builder("Probe")
            .push(ProbeUnit::Base, 2.0, 0.0, "pb".to_owned(), true)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::BaseScaleNotOne { scale, .. } if scale == 2.0));
    }

    #[test]
    fn blank_abbreviation_is_rejected() {
        let err = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .unit(ProbeUnit::Double, 2.0, "   ")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingAbbreviation { unit: "Double", .. }
        ));
    }

    #[test]
    fn abbreviation_is_trimmed() {
        let table = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, " pb ")
            .build()
            .unwrap();
        assert_eq!(table.base_abbreviation(), "pb");
    }

    #[test]
    fn invalid_scales_are_rejected() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = UnitTable::builder("Probe")
                .base(ProbeUnit::Base, "pb")
                .unit(ProbeUnit::Double, scale, "dpb")
                .build()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidScale { unit: "Double", .. }));
        }
    }

    #[test]
    fn affine_transform_is_rejected() {
        let err = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .affine(ProbeUnit::Double, 1.0, 273.15, "dpb")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonLinearTransform { offset, .. } if offset == 273.15
        ));
    }

    #[test]
    fn affine_with_zero_offset_is_linear() {
        let table = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .affine(ProbeUnit::Double, 2.0, 0.0, "dpb")
            .build()
            .unwrap();
        assert_eq!(table.scale_to_base(ProbeUnit::Double).unwrap(), 2.0);
    }

    #[test]
    fn duplicate_unit_is_rejected() {
        let err = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .unit(ProbeUnit::Double, 2.0, "dpb")
            .unit(ProbeUnit::Double, 3.0, "tpb")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateUnit { unit: "Double", .. }));
    }

    #[test]
    fn duplicate_abbreviation_is_rejected() {
        let err = UnitTable::builder("Probe")
            .base(ProbeUnit::Base, "pb")
            .unit(ProbeUnit::Double, 2.0, "pb")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateAbbreviation { ref abbreviation, .. } if abbreviation == "pb"
        ));
    }

    #[test]
    #[should_panic(expected = "invalid built-in unit table")]
    fn expect_table_panics_on_invalid_configuration() {
        let _ = expect_table(UnitTableBuilder::<ProbeUnit>::new("Probe").build());
    }
}
