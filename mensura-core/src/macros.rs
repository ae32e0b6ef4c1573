//! Macros for defining quantity kinds and their named unit accessors.

/// Declares a quantity kind and its lazily built, process-wide [`UnitTable`](crate::UnitTable).
///
/// The unit enum must implement [`UnitKind`](crate::UnitKind). The table is validated the first time it is
/// used; an invalid declaration panics at that point with the [`ConfigError`](crate::ConfigError).
///
/// ```rust
/// use mensura_core::{quantity_kind, Kind, Quantity, UnitKind};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// pub enum PressureUnit {
///     Pascal,
///     Bar,
/// }
///
/// impl UnitKind for PressureUnit {
///     const ALL: &'static [Self] = &[Self::Pascal, Self::Bar];
///     fn name(self) -> &'static str {
///         match self {
///             Self::Pascal => "Pascal",
///             Self::Bar => "Bar",
///         }
///     }
/// }
///
/// impl core::fmt::Display for PressureUnit {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         f.write_str(self.name())
///     }
/// }
///
/// quantity_kind! {
///     /// Pressure.
///     pub enum Pressure: PressureUnit {
///         base Pascal => "Pa",
///         Bar => (1e5, "bar"),
///     }
/// }
///
/// let p = Quantity::<Pressure>::from_unit(2.0, PressureUnit::Bar).unwrap();
/// assert_eq!(p.base_value(), 200_000.0);
/// assert_eq!(Pressure::base_unit(), PressureUnit::Pascal);
/// ```
#[macro_export]
macro_rules! quantity_kind {
    (
        $(#[$meta:meta])*
        $vis:vis enum $kind:ident : $unit:ident {
            base $base:ident => $base_abbr:literal,
            $($variant:ident => ($scale:expr, $abbr:literal)),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $kind {}

        impl $crate::Kind for $kind {
            type Unit = $unit;
            const NAME: &'static str = stringify!($kind);

            fn table() -> &'static $crate::UnitTable<$unit> {
                static TABLE: $crate::__private::Lazy<$crate::UnitTable<$unit>> =
                    $crate::__private::Lazy::new(|| {
                        $crate::__private::expect_table(
                            $crate::UnitTable::builder(stringify!($kind))
                                .base($unit::$base, $base_abbr)
                                $(.unit($unit::$variant, $scale, $abbr))*
                                .build(),
                        )
                    });
                &TABLE
            }
        }
    };
}

/// Generates `from_<unit>` constructors and `<unit>` accessors on `Quantity<$kind>`.
///
/// Only usable inside this crate: inherent impls on `Quantity` cannot live elsewhere.
///
/// The scales are plain constants and are not read from the kind's [`UnitTable`](crate::UnitTable). Each
/// `quantity_kind!` declaration must use the same constants, and the kind's tests must check that every
/// accessor agrees with [`Quantity::from_unit`](crate::Quantity::from_unit).
macro_rules! unit_accessors {
    ($kind:ty { $($scale:expr => $from:ident, $get:ident, $label:literal;)* }) => {
        impl $crate::Quantity<$kind> {
            $(
                #[doc = concat!("Creates a quantity from a value in ", $label, ".")]
                #[inline]
                pub const fn $from(value: f64) -> Self {
                    Self::from_base(value * $scale)
                }

                #[doc = concat!("The magnitude expressed in ", $label, ".")]
                #[inline]
                pub fn $get(self) -> f64 {
                    self.base_value() / $scale
                }
            )*
        }
    };
}

pub(crate) use unit_accessors;
