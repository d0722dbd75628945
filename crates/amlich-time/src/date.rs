//! `SolarDate`: a plain Gregorian calendar date.
//!
//! A `SolarDate` is an immutable `(year, month, day)` value with no time
//! component.  It converts to and from Julian Day Numbers through
//! [`crate::julian`].
//!
//! # Null sentinel
//! `SolarDate::NULL` (`{0, 0, 0}`) is the value returned by
//! [`crate::lunar::lunar_to_solar`] when the requested lunar date does not
//! exist.  Callers that scan ranges of dates check [`SolarDate::is_null`]
//! and skip it.

use serde::{Deserialize, Serialize};

use amlich_core::errors::{Error, Result};
use amlich_core::{JulianDay, Year};

use crate::julian::{date_from_jd, jd_from_date};
use crate::weekday::Weekday;

/// First year for which the truncated ephemeris series is trusted.
pub const SUPPORTED_YEAR_MIN: Year = 1900;

/// Last year for which the truncated ephemeris series is trusted.
pub const SUPPORTED_YEAR_MAX: Year = 2100;

/// A civil calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SolarDate {
    year: Year,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// The null date sentinel `{0, 0, 0}`.
    pub const NULL: SolarDate = SolarDate {
        year: 0,
        month: 0,
        day: 0,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// Years 1–9999 are accepted.  Days removed by the 1582 calendar reform
    /// (5–14 October 1582) are rejected.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        let date = SolarDate { year, month, day };
        if date_from_jd(date.jd()) != date {
            return Err(Error::Date(format!(
                "{date} does not exist (calendar reform of 1582)"
            )));
        }
        Ok(date)
    }

    /// Create the date of a Julian Day Number.
    pub fn from_jd(jd: JulianDay) -> Self {
        date_from_jd(jd)
    }

    pub(crate) fn from_parts_unchecked(year: Year, month: u8, day: u8) -> Self {
        SolarDate { year, month, day }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12, 0 for the null date).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31, 0 for the null date).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Return the Julian Day Number.
    pub fn jd(&self) -> JulianDay {
        jd_from_date(self.day as i32, self.month as i32, self.year)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_jd(self.jd())
    }

    /// Return `true` if the year lies in 1900–2100, the range over which the
    /// lunar conversion is validated.
    pub fn is_in_supported_range(&self) -> bool {
        (SUPPORTED_YEAR_MIN..=SUPPORTED_YEAR_MAX).contains(&self.year)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative to go back).
    pub fn add_days(self, n: i64) -> Self {
        date_from_jd(self.jd() + n)
    }

    /// Number of days from `self` to `other`.  Positive if `other > self`.
    pub fn days_until(self, other: SolarDate) -> i64 {
        other.jd() - self.jd()
    }

    /// Iterate over every date from `self` to `last`, both inclusive.
    pub fn iter_to(self, last: SolarDate) -> impl Iterator<Item = SolarDate> {
        (self.jd()..=last.jd()).map(date_from_jd)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for SolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "SolarDate(null)");
        }
        write!(f, "SolarDate({self})")
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Whether `year` is a leap year of the civil calendar in force that year
/// (Julian rule before 1583, Gregorian rule after).
pub fn is_leap_year(year: Year) -> bool {
    if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn validation() {
        assert!(SolarDate::from_ymd(2024, 2, 29).is_ok());
        assert!(SolarDate::from_ymd(2023, 2, 29).is_err());
        assert!(SolarDate::from_ymd(1900, 2, 29).is_err());
        assert!(SolarDate::from_ymd(2024, 13, 1).is_err());
        assert!(SolarDate::from_ymd(2024, 4, 31).is_err());
        assert!(SolarDate::from_ymd(0, 1, 1).is_err());
        assert!(SolarDate::from_ymd(1582, 10, 10).is_err());
        assert!(SolarDate::from_ymd(1500, 2, 29).is_ok());
    }

    #[test]
    fn null_sentinel() {
        assert!(SolarDate::NULL.is_null());
        assert!(SolarDate::default().is_null());
        assert!(!date(2024, 1, 1).is_null());
        assert_eq!(SolarDate::NULL.to_string(), "null date");
    }

    #[test]
    fn arithmetic() {
        let d = date(2024, 2, 28);
        assert_eq!(d.add_days(1), date(2024, 2, 29));
        assert_eq!(d.add_days(2), date(2024, 3, 1));
        assert_eq!(date(2024, 1, 1).add_days(-1), date(2023, 12, 31));
        assert_eq!(date(2024, 1, 1).days_until(date(2025, 1, 1)), 366);
        assert_eq!(date(2024, 1, 30).iter_to(date(2024, 2, 2)).count(), 4);
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
    }

    #[test]
    fn display_and_weekday() {
        let d = date(2024, 2, 10);
        assert_eq!(d.to_string(), "2024-02-10");
        assert_eq!(format!("{d:?}"), "SolarDate(2024-02-10)");
        assert_eq!(d.weekday(), Weekday::Saturday);
        assert!(d.is_in_supported_range());
        assert!(!date(1850, 1, 1).is_in_supported_range());
    }
}
