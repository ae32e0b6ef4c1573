//! Unit identifier trait.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Closed set of unit identifiers for one quantity kind.
///
/// Implemented on a field-less enum, usually through `#[derive(UnitKind)]`:
///
/// ```rust
/// use mensura_core::electric_potential::ElectricPotentialUnit;
/// use mensura_core::UnitKind;
///
/// assert_eq!(ElectricPotentialUnit::Volt.name(), "Volt");
/// assert_eq!(
///     ElectricPotentialUnit::from_name("Millivolt"),
///     Some(ElectricPotentialUnit::Millivolt)
/// );
/// ```
///
/// Being a member of the enum does not make a unit usable: only units registered in the kind's
/// [`UnitTable`](crate::UnitTable) convert, everything else is reported as
/// [`QuantityError::UnsupportedUnit`](crate::QuantityError::UnsupportedUnit).
pub trait UnitKind: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static {
    /// Every identifier of the set, in declaration order.
    const ALL: &'static [Self];

    /// Stable identifier used by configuration documents and error messages.
    fn name(self) -> &'static str;

    /// Looks up an identifier by [`name`](UnitKind::name). Exact, case-sensitive match.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.name() == name)
    }
}
