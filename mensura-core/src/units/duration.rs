//! Duration units.
//!
//! The base unit for this kind is [`Second`](DurationUnit::Second). Days and weeks are fixed multiples of
//! `86 400 s`; calendar effects (leap seconds, DST) are out of scope.

use crate::macros::unit_accessors;
use crate::UnitKind;

const NANOSECOND: f64 = 1e-9;
const MICROSECOND: f64 = 1e-6;
const MILLISECOND: f64 = 1e-3;
const SECOND: f64 = 1.0;
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const WEEK: f64 = 604_800.0;

/// Units of duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, UnitKind)]
pub enum DurationUnit {
    /// `ns`
    Nanosecond,
    /// `µs`
    Microsecond,
    /// `ms`
    Millisecond,
    /// `s` (base unit)
    Second,
    /// `min`
    Minute,
    /// `h`
    Hour,
    /// `d`
    Day,
    /// `wk`
    Week,
}

crate::quantity_kind! {
    /// Duration (elapsed time).
    pub enum Duration: DurationUnit {
        base Second => "s",
        Nanosecond => (NANOSECOND, "ns"),
        Microsecond => (MICROSECOND, "µs"),
        Millisecond => (MILLISECOND, "ms"),
        Minute => (MINUTE, "min"),
        Hour => (HOUR, "h"),
        Day => (DAY, "d"),
        Week => (WEEK, "wk"),
    }
}

unit_accessors!(Duration {
    NANOSECOND => from_nanoseconds, nanoseconds, "nanoseconds";
    MICROSECOND => from_microseconds, microseconds, "microseconds";
    MILLISECOND => from_milliseconds, milliseconds, "milliseconds";
    SECOND => from_seconds, seconds, "seconds";
    MINUTE => from_minutes, minutes, "minutes";
    HOUR => from_hours, hours, "hours";
    DAY => from_days, days, "days";
    WEEK => from_weeks, weeks, "weeks";
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;
    use approx::assert_abs_diff_eq;

    type D = Quantity<Duration>;

    #[test]
    fn named_factories_agree_with_table() {
        use DurationUnit::*;
        let cases: [(DurationUnit, fn(f64) -> D, fn(D) -> f64); 8] = [
            (Nanosecond, D::from_nanoseconds, D::nanoseconds),
            (Microsecond, D::from_microseconds, D::microseconds),
            (Millisecond, D::from_milliseconds, D::milliseconds),
            (Second, D::from_seconds, D::seconds),
            (Minute, D::from_minutes, D::minutes),
            (Hour, D::from_hours, D::hours),
            (Day, D::from_days, D::days),
            (Week, D::from_weeks, D::weeks),
        ];
        for (unit, from, get) in cases {
            let named = from(7.0);
            assert_eq!(D::from_unit(7.0, unit).unwrap(), named, "{unit}");
            assert_eq!(named.convert(unit).unwrap(), get(named), "{unit}");
        }
    }

    #[test]
    fn calendar_multiples() {
        assert_eq!(D::from_days(1.0).hours(), 24.0);
        assert_eq!(D::from_weeks(1.0).days(), 7.0);
        assert_eq!(D::from_hours(1.5).minutes(), 90.0);
    }

    #[test]
    fn subsecond_units() {
        assert_abs_diff_eq!(D::from_milliseconds(1500.0).seconds(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(D::from_microseconds(1.0).nanoseconds(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn parse_minutes_not_meters() {
        let d: D = "90min".parse().unwrap();
        assert_eq!(d.hours(), 1.5);
        assert_eq!(d.to_string(), "5400 s");
    }
}
