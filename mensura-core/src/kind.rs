//! Quantity kind trait.

use crate::{UnitKind, UnitTable};

/// Marker trait for **quantity kinds** (electric potential, length, mass …).
///
/// A kind is the category that distinguishes a volt from a metre. Each kind is modelled as an empty enum
/// that ties together its unit identifiers and the process-wide [`UnitTable`] describing them. Distinct kinds
/// are distinct types, so `Quantity<Length>` and `Quantity<ElectricPotential>` never mix.
///
/// Kinds are normally declared with [`quantity_kind!`](crate::quantity_kind), which builds the table lazily
/// exactly once.
pub trait Kind: 'static {
    /// Unit identifiers of this kind.
    type Unit: UnitKind;

    /// Human-readable kind name, used in error messages.
    const NAME: &'static str;

    /// The kind's unit table.
    fn table() -> &'static UnitTable<Self::Unit>;

    /// The base unit; all magnitudes are stored in it and it is the default display unit.
    #[inline]
    fn base_unit() -> Self::Unit {
        Self::table().base_unit()
    }
}
