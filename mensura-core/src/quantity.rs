//! Quantity type and its implementations.

use core::cmp::Ordering;
use core::fmt::{self, Write as _};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use core::str::FromStr;

use crate::error::{ParseQuantityError, QuantityResult};
use crate::Kind;

#[cfg(feature = "approx")]
use approx::{AbsDiffEq, RelativeEq, UlpsEq};

/// Fractional digits shown by `Display` when no precision is given.
const DEFAULT_DISPLAY_DIGITS: usize = 2;

/// A quantity of kind `K`.
///
/// `Quantity<K>` wraps a single `f64`, the magnitude expressed in the kind's base unit, together with
/// phantom type information about the kind. Construction from any registered unit normalises into the base
/// unit once; arithmetic and comparisons then work on the base magnitude without consulting the
/// [`UnitTable`](crate::UnitTable) again.
///
/// # Examples
///
/// ```rust
/// use mensura_core::electric_potential::{ElectricPotential, ElectricPotentialUnit};
/// use mensura_core::Quantity;
///
/// let a = Quantity::<ElectricPotential>::from_volts(5.0);
/// let b = Quantity::<ElectricPotential>::from_unit(2500.0, ElectricPotentialUnit::Millivolt).unwrap();
/// let sum = a + b;
/// assert_eq!(sum.base_value(), 7.5);
/// assert_eq!(sum.to_string(), "7.5 V");
/// ```
///
/// Quantities of different kinds are different types:
///
/// ```compile_fail
/// use mensura_core::electric_potential::ElectricPotential;
/// use mensura_core::length::Length;
/// use mensura_core::Quantity;
///
/// let v = Quantity::<ElectricPotential>::from_volts(1.0);
/// let m = Quantity::<Length>::from_meters(1.0);
/// let _ = v + m;
/// ```
pub struct Quantity<K: Kind>(f64, PhantomData<K>);

impl<K: Kind> Quantity<K> {
    /// The additive identity.
    pub const ZERO: Self = Self::from_base(0.0);

    /// A quantity whose magnitude is NaN.
    ///
    /// ```rust
    /// use mensura_core::length::Length;
    /// use mensura_core::Quantity;
    /// assert!(Quantity::<Length>::NAN.is_nan());
    /// ```
    pub const NAN: Self = Self::from_base(f64::NAN);

    /// Creates a quantity from a magnitude already expressed in the base unit.
    #[inline]
    pub const fn from_base(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// The additive identity, magnitude `0` in the base unit.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a quantity from a value in `unit`.
    ///
    /// Computes `value * scale_to_base(unit)`. Negative values are allowed.
    ///
    /// Fails with [`QuantityError::UnsupportedUnit`](crate::QuantityError::UnsupportedUnit) when `unit` is
    /// not registered for the kind.
    #[inline]
    pub fn from_unit(value: f64, unit: K::Unit) -> QuantityResult<Self> {
        let scale = K::table().scale_to_base(unit)?;
        Ok(Self::from_base(value * scale))
    }

    /// The magnitude in the base unit.
    #[inline]
    pub const fn base_value(self) -> f64 {
        self.0
    }

    /// Expresses the quantity in `unit`.
    ///
    /// ```rust
    /// use mensura_core::electric_potential::{ElectricPotential, ElectricPotentialUnit};
    /// use mensura_core::Quantity;
    ///
    /// let v = Quantity::<ElectricPotential>::from_volts(1.5);
    /// assert_eq!(v.convert(ElectricPotentialUnit::Millivolt).unwrap(), 1500.0);
    /// ```
    ///
    /// Fails with [`QuantityError::UnsupportedUnit`](crate::QuantityError::UnsupportedUnit) when `unit` is
    /// not registered for the kind.
    #[inline]
    pub fn convert(self, unit: K::Unit) -> QuantityResult<f64> {
        let scale = K::table().scale_to_base(unit)?;
        Ok(self.0 / scale)
    }

    /// Expresses the quantity in `unit`, or returns `None` when `unit` is not registered.
    #[inline]
    pub fn try_convert(self, unit: K::Unit) -> Option<f64> {
        self.convert(unit).ok()
    }

    /// Formats the quantity in `unit` instead of the base unit.
    ///
    /// Uses the same rounding rules as the `Display` impl of `Quantity`.
    ///
    /// ```rust
    /// use mensura_core::electric_potential::{ElectricPotential, ElectricPotentialUnit};
    /// use mensura_core::Quantity;
    ///
    /// let v = Quantity::<ElectricPotential>::from_volts(0.0123456);
    /// let shown = v.display_in(ElectricPotentialUnit::Millivolt).unwrap();
    /// assert_eq!(shown.to_string(), "12.35 mV");
    /// assert_eq!(format!("{shown:.0}"), "12 mV");
    /// ```
    pub fn display_in(self, unit: K::Unit) -> QuantityResult<QuantityDisplay<'static>> {
        let table = K::table();
        let abbreviation = table.default_abbreviation(unit)?;
        let value = self.convert(unit)?;
        Ok(QuantityDisplay {
            value,
            abbreviation,
        })
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_base(self.0.abs())
    }

    /// Returns the smaller of two quantities (NaN-ignoring, like [`f64::min`]).
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_base(self.0.min(other.0))
    }

    /// Returns the larger of two quantities (NaN-ignoring, like [`f64::max`]).
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_base(self.0.max(other.0))
    }

    /// Whether the magnitude is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Whether the magnitude is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// IEEE-754 total order on the base magnitudes, see [`f64::total_cmp`].
    ///
    /// Unlike `partial_cmp` this orders NaN magnitudes as well.
    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Const addition of two quantities.
    ///
    /// ```rust
    /// use mensura_core::length::Length;
    /// use mensura_core::Quantity;
    /// let a = Quantity::<Length>::from_meters(1.0);
    /// let b = Quantity::<Length>::from_meters(2.0);
    /// assert_eq!(a.add(b).meters(), 3.0);
    /// ```
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self::from_base(self.0 + other.0)
    }

    /// Const subtraction of two quantities.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self::from_base(self.0 - other.0)
    }

    /// Const multiplication by a dimensionless factor.
    #[inline]
    pub const fn scale(self, factor: f64) -> Self {
        Self::from_base(self.0 * factor)
    }

    /// Const dimensionless ratio of two quantities of the same kind.
    #[inline]
    pub const fn ratio(self, other: Self) -> f64 {
        self.0 / other.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value semantics
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Clone for Quantity<K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind> Copy for Quantity<K> {}

impl<K: Kind> Default for Quantity<K> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<K: Kind> fmt::Debug for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity<{}>({:?})", K::NAME, self.0)
    }
}

/// Exact equality of the base magnitudes; no epsilon. NaN is never equal to anything.
impl<K: Kind> PartialEq for Quantity<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Ordering by base magnitude.
///
/// Total for finite magnitudes. If either side is NaN the result is `None`, exactly as for `f64`; use
/// [`Quantity::total_cmp`] when an order over NaN is required.
impl<K: Kind> PartialOrd for Quantity<K> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Add for Quantity<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.0 + rhs.0)
    }
}

impl<K: Kind> AddAssign for Quantity<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<K: Kind> Sub for Quantity<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.0 - rhs.0)
    }
}

impl<K: Kind> SubAssign for Quantity<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<K: Kind> Neg for Quantity<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_base(-self.0)
    }
}

impl<K: Kind> Mul<f64> for Quantity<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_base(self.0 * rhs)
    }
}

impl<K: Kind> Mul<Quantity<K>> for f64 {
    type Output = Quantity<K>;
    #[inline]
    fn mul(self, rhs: Quantity<K>) -> Self::Output {
        rhs * self
    }
}

impl<K: Kind> MulAssign<f64> for Quantity<K> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
    }
}

impl<K: Kind> Div<f64> for Quantity<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_base(self.0 / rhs)
    }
}

impl<K: Kind> DivAssign<f64> for Quantity<K> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.0 /= rhs;
    }
}

/// Same-kind division yields a dimensionless ratio.
impl<K: Kind> Div for Quantity<K> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl<K: Kind> Sum for Quantity<K> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + q)
    }
}

impl<'a, K: Kind> Sum<&'a Quantity<K>> for Quantity<K> {
    fn sum<I: Iterator<Item = &'a Quantity<K>>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| acc + *q)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Renders the magnitude in the base unit, rounded to 2 fractional digits, then the unit abbreviation.
///
/// Trailing zeros are dropped (`"7.5 V"`, not `"7.50 V"`). A formatter precision overrides the number of
/// fractional digits: `format!("{:.4}", q)`. This output is lossy and is not a serialization format.
impl<K: Kind> fmt::Display for Quantity<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rounded(f, self.0, K::table().base_abbreviation())
    }
}

/// A quantity rendered in a chosen unit, produced by [`Quantity::display_in`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityDisplay<'a> {
    value: f64,
    abbreviation: &'a str,
}

impl QuantityDisplay<'_> {
    /// The unrounded value in the chosen unit.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The chosen unit's abbreviation.
    #[inline]
    pub fn abbreviation(&self) -> &str {
        self.abbreviation
    }
}

impl fmt::Display for QuantityDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rounded(f, self.value, self.abbreviation)
    }
}

fn write_rounded(f: &mut fmt::Formatter<'_>, value: f64, abbreviation: &str) -> fmt::Result {
    let digits = f.precision().unwrap_or(DEFAULT_DISPLAY_DIGITS);
    let rendered = format!("{} {}", format_digits(value, digits), abbreviation);
    pad(f, &rendered)
}

/// Formats `value` with at most `digits` fractional digits, dropping trailing zeros and any `-0`.
fn format_digits(value: f64, digits: usize) -> String {
    let mut text = format!("{value:.digits$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Applies width, fill and alignment. `Formatter::pad` would also treat the precision as a maximum length.
fn pad(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let len = text.chars().count();
    let Some(padding) = f.width().and_then(|width| width.checked_sub(len)) else {
        return f.write_str(text);
    };

    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Left) | None => (0, padding),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(text)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parses `"<number> <abbreviation>"`, e.g. `"12.5 mV"` or `"12.5mV"`.
///
/// The abbreviation must match a registered unit exactly (case-sensitive).
///
/// ```rust
/// use mensura_core::electric_potential::ElectricPotential;
/// use mensura_core::Quantity;
///
/// let v: Quantity<ElectricPotential> = "250 mV".parse().unwrap();
/// assert_eq!(v.volts(), 0.25);
/// ```
impl<K: Kind> FromStr for Quantity<K> {
    type Err = ParseQuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseQuantityError::Empty);
        }

        let (number, abbreviation) = split_number(input)?;
        let value: f64 = number
            .parse()
            .map_err(|source| ParseQuantityError::InvalidNumber {
                input: number.to_owned(),
                source,
            })?;

        let table = K::table();
        let unit = table.unit_for_abbreviation(abbreviation).ok_or_else(|| {
            ParseQuantityError::UnknownAbbreviation {
                kind: table.kind().to_owned(),
                abbreviation: abbreviation.to_owned(),
            }
        })?;

        Ok(Self::from_unit(value, unit)?)
    }
}

/// Splits at the first whitespace, or else after the longest prefix that parses as a number.
fn split_number(input: &str) -> Result<(&str, &str), ParseQuantityError> {
    if let Some((number, abbreviation)) = input.split_once(char::is_whitespace) {
        return Ok((number, abbreviation.trim()));
    }

    let source = match input.parse::<f64>() {
        Ok(_) => return Err(ParseQuantityError::MissingUnit(input.to_owned())),
        Err(source) => source,
    };

    for (idx, _) in input.char_indices().rev() {
        if idx == 0 {
            break;
        }
        let (number, abbreviation) = input.split_at(idx);
        if number.parse::<f64>().is_ok() {
            return Ok((number, abbreviation));
        }
    }

    Err(ParseQuantityError::InvalidNumber {
        input: input.to_owned(),
        source,
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Approximate equality
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "approx")]
impl<K: Kind> AbsDiffEq for Quantity<K> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<K: Kind> RelativeEq for Quantity<K> {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<K: Kind> UlpsEq for Quantity<K> {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuantityError;
    use crate::tests::{Probe, ProbeUnit};

    type P = Quantity<Probe>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_rounds_to_two_digits() {
        assert_eq!(P::from_base(12.345_678).to_string(), "12.35 pb");
        assert_eq!(P::from_base(12.34).to_string(), "12.34 pb");
    }

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(P::from_base(7.5).to_string(), "7.5 pb");
        assert_eq!(P::from_base(3.0).to_string(), "3 pb");
        assert_eq!(P::from_base(0.1).to_string(), "0.1 pb");
    }

    #[test]
    fn display_never_prints_negative_zero() {
        assert_eq!(P::from_base(-0.001).to_string(), "0 pb");
        assert_eq!(P::from_base(-0.0).to_string(), "0 pb");
    }

    #[test]
    fn display_negative_values() {
        assert_eq!(P::from_base(-3.456).to_string(), "-3.46 pb");
    }

    #[test]
    fn display_honours_precision() {
        let q = P::from_base(1.234_567);
        assert_eq!(format!("{q:.4}"), "1.2346 pb");
        assert_eq!(format!("{q:.0}"), "1 pb");
    }

    #[test]
    fn display_rounds_large_magnitudes() {
        assert_eq!(P::from_base(5e13 + 0.3).to_string(), "50000000000000.3 pb");
        assert_eq!(P::from_base(-4.5e15).to_string(), "-4500000000000000 pb");
        assert_eq!(format!("{:.1}", P::from_base(1e14 + 0.77)), "100000000000000.8 pb");
    }

    #[test]
    fn display_honours_width_and_alignment() {
        let q = P::from_base(1.5);
        assert_eq!(format!("{q:>12}"), "      1.5 pb");
        assert_eq!(format!("{q:<8}|"), "1.5 pb  |");
        assert_eq!(format!("{q:*^10.1}"), "**1.5 pb**");
        assert_eq!(format!("{q:3}"), "1.5 pb");
    }

    #[test]
    fn display_large_and_special_values() {
        assert_eq!(P::from_base(1e20).to_string(), "100000000000000000000 pb");
        assert_eq!(P::NAN.to_string(), "NaN pb");
        assert_eq!(P::from_base(f64::INFINITY).to_string(), "inf pb");
    }

    #[test]
    fn display_in_other_unit() {
        let q = P::from_base(3.0);
        assert_eq!(q.display_in(ProbeUnit::Double).unwrap().to_string(), "1.5 dpb");
        assert_eq!(q.display_in(ProbeUnit::Half).unwrap().to_string(), "6 hpb");
        let shown = q.display_in(ProbeUnit::Half).unwrap();
        assert_eq!(shown.value(), 6.0);
        assert_eq!(shown.abbreviation(), "hpb");
    }

    #[test]
    fn display_in_unregistered_unit_fails() {
        let err = P::from_base(1.0).display_in(ProbeUnit::Unregistered).unwrap_err();
        assert!(matches!(err, QuantityError::UnsupportedUnit { unit: "Unregistered", .. }));
    }

    #[test]
    fn debug_names_the_kind() {
        assert_eq!(format!("{:?}", P::from_base(2.5)), "Quantity<Probe>(2.5)");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Parsing
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn parse_with_space() {
        let q: P = "4 dpb".parse().unwrap();
        assert_eq!(q.base_value(), 8.0);
    }

    #[test]
    fn parse_without_space() {
        let q: P = "-4hpb".parse().unwrap();
        assert_eq!(q.base_value(), -2.0);
        let q: P = "1e1dpb".parse().unwrap();
        assert_eq!(q.base_value(), 20.0);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let q: P = "  2.5   pb  ".parse().unwrap();
        assert_eq!(q.base_value(), 2.5);
    }

    #[test]
    fn parse_empty_input() {
        assert_eq!("   ".parse::<P>().unwrap_err(), ParseQuantityError::Empty);
    }

    #[test]
    fn parse_missing_unit() {
        assert_eq!(
            "42".parse::<P>().unwrap_err(),
            ParseQuantityError::MissingUnit("42".to_owned())
        );
    }

    #[test]
    fn parse_invalid_number() {
        let err = "abc pb".parse::<P>().unwrap_err();
        assert!(matches!(err, ParseQuantityError::InvalidNumber { ref input, .. } if input == "abc"));
        let err = "pb".parse::<P>().unwrap_err();
        assert!(matches!(err, ParseQuantityError::InvalidNumber { .. }));
    }

    #[test]
    fn parse_unknown_abbreviation() {
        let err = "3 PB".parse::<P>().unwrap_err();
        assert_eq!(
            err,
            ParseQuantityError::UnknownAbbreviation {
                kind: "Probe".to_owned(),
                abbreviation: "PB".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "unknown Probe unit abbreviation \"PB\"");
    }

    #[test]
    fn display_then_parse_at_full_precision() {
        let q = P::from_base(0.125);
        let text = format!("{q:.3}");
        assert_eq!(text.parse::<P>().unwrap(), q);
    }
}
