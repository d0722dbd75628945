//! Vietnamese lunar calendar conversion.
//!
//! [`solar_to_lunar`] and [`lunar_to_solar`] are exact inverses over the
//! supported range (1900–2100).  Outside that window the conversion still
//! runs, but the truncated ephemeris has not been validated there and a
//! warning is logged.
//!
//! Lunar months are numbered 1 (Giêng) to 12 (Chạp).  A lunar year may
//! carry one extra *leap* month that repeats the number of the month before
//! it; [`LunarDate::is_leap_month`] tells the two apart.

use serde::{Deserialize, Serialize};

use amlich_core::errors::{Error, Result};
use amlich_core::{ensure, JulianDay, Real, Year};

use crate::date::{SolarDate, SUPPORTED_YEAR_MAX, SUPPORTED_YEAR_MIN};
use crate::ephemeris::{new_moon_day, new_moon_index, NEW_MOON_EPOCH, SYNODIC_MONTH};
use crate::julian::date_from_jd;
use crate::lunar_month::{
    has_thirteen_months, leap_month_from_offset, leap_month_offset, lunar_month11_start,
    month11_bracket,
};
use crate::timezone::TimeZone;

/// Traditional names of the twelve lunar months.
pub const MONTH_NAMES: [&str; 12] = [
    "Giêng", "Hai", "Ba", "Tư", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười", "Một", "Chạp",
];

/// A date in the Vietnamese lunar calendar.
///
/// `jd` is the Julian Day Number of the civil day this lunar date falls on.
/// It is filled in by [`solar_to_lunar`] and [`LunarDate::resolved`]; a date
/// built with [`LunarDate::new`] carries `jd == 0` until resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year (may differ from the civil year around Tết).
    pub year: Year,
    /// Lunar month, 1–12.
    pub month: u8,
    /// Day of the lunar month, 1–30.
    pub day: u8,
    /// `true` for the repeated (leap) month.
    pub is_leap_month: bool,
    /// Julian Day Number of the corresponding civil day.
    pub jd: JulianDay,
}

impl LunarDate {
    /// Create an unresolved lunar date (`jd == 0`), checking field ranges.
    ///
    /// Whether the leap flag matches the actual leap month of `year` is only
    /// known after conversion; see [`try_lunar_to_solar`].
    pub fn new(year: Year, month: u8, day: u8, is_leap_month: bool) -> Result<Self> {
        ensure!((1..=12).contains(&month), "lunar month {month} out of range [1, 12]");
        ensure!((1..=30).contains(&day), "lunar day {day} out of range [1, 30]");
        Ok(LunarDate {
            year,
            month,
            day,
            is_leap_month,
            jd: 0,
        })
    }

    /// Return a copy with `jd` filled in, or an error if the date does not
    /// exist.
    pub fn resolved(self, tz: TimeZone) -> Result<Self> {
        let solar = try_lunar_to_solar(&self, tz)?;
        Ok(LunarDate {
            jd: solar.jd(),
            ..self
        })
    }

    /// Traditional name of the month ("Giêng" … "Chạp").
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[amlich_core::cyclic_index(self.month as i32 - 1, 12)]
    }

    /// Whether this is the first day of the lunar year (mùng 1 Tết).
    pub fn is_new_year(&self) -> bool {
        self.month == 1 && self.day == 1 && !self.is_leap_month
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "n" } else { "" };
        write!(f, "{}/{}{}/{}", self.day, self.month, leap, self.year)
    }
}

fn warn_if_unsupported(year: Year) {
    if !(SUPPORTED_YEAR_MIN..=SUPPORTED_YEAR_MAX).contains(&year) {
        log::warn!(
            "year {year} is outside {SUPPORTED_YEAR_MIN}-{SUPPORTED_YEAR_MAX}; \
             lunar conversion accuracy is not guaranteed"
        );
    }
}

// ── Solar → lunar ─────────────────────────────────────────────────────────────

/// Convert a civil date to its lunar date in zone `tz`.
///
/// # Example
/// ```
/// use amlich_time::{solar_to_lunar, SolarDate, TimeZone};
/// let tet = solar_to_lunar(SolarDate::from_ymd(2024, 2, 10).unwrap(), TimeZone::VIETNAM);
/// assert_eq!((tet.year, tet.month, tet.day, tet.is_leap_month), (2024, 1, 1, false));
/// ```
pub fn solar_to_lunar(solar: SolarDate, tz: TimeZone) -> LunarDate {
    warn_if_unsupported(solar.year());
    let day_number = solar.jd();
    let k = ((day_number as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut month_start = new_moon_day(k + 1, tz);
    if month_start > day_number {
        month_start = new_moon_day(k, tz);
    }

    let year = solar.year();
    let mut a11 = lunar_month11_start(year, tz);
    let mut b11 = a11;
    let mut lunar_year;
    if a11 >= month_start {
        lunar_year = year;
        a11 = lunar_month11_start(year - 1, tz);
    } else {
        lunar_year = year + 1;
        b11 = lunar_month11_start(year + 1, tz);
    }

    let lunar_day = (day_number - month_start + 1) as u8;
    let diff = (month_start - a11).div_euclid(29);
    let mut is_leap_month = false;
    let mut lunar_month = diff + 11;
    if has_thirteen_months(a11, b11) {
        let leap_diff = leap_month_offset(a11, tz) as i64;
        if diff >= leap_diff {
            lunar_month = diff + 10;
            is_leap_month = diff == leap_diff;
        }
    }
    if lunar_month > 12 {
        lunar_month -= 12;
    }
    if lunar_month >= 11 && diff < 4 {
        lunar_year -= 1;
    }

    let lunar = LunarDate {
        year: lunar_year,
        month: lunar_month as u8,
        day: lunar_day,
        is_leap_month,
        jd: day_number,
    };
    log::debug!("{solar} -> lunar {lunar}");
    lunar
}

impl SolarDate {
    /// Lunar date of this day in the Vietnamese time zone.
    pub fn to_lunar(self) -> LunarDate {
        solar_to_lunar(self, TimeZone::default())
    }
}

// ── Lunar → solar ─────────────────────────────────────────────────────────────

/// Julian Day Number of the first day of a lunar month, or `None` if
/// `is_leap` is set and `month` is not the leap month of that year.
pub fn lunar_month_start(year: Year, month: u8, is_leap: bool, tz: TimeZone) -> Option<JulianDay> {
    warn_if_unsupported(year);
    let (a11, b11) = month11_bracket(year, month, tz);
    let k = (0.5 + (a11 as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
    let mut off = (month as i64 - 11).rem_euclid(12);

    if has_thirteen_months(a11, b11) {
        let leap_off = leap_month_offset(a11, tz);
        let leap_month = leap_month_from_offset(leap_off);
        if is_leap && month != leap_month {
            log::debug!("{month}/{year} is not a leap month (leap month is {leap_month})");
            return None;
        }
        if is_leap || off >= leap_off as i64 {
            off += 1;
        }
    } else if is_leap {
        log::debug!("lunar year {year} has no leap month");
        return None;
    }
    Some(new_moon_day(k + off, tz))
}

/// Convert a lunar date back to the civil calendar.
///
/// Returns [`SolarDate::NULL`] when the date claims a leap month that does
/// not exist in its year.
pub fn lunar_to_solar(lunar: &LunarDate, tz: TimeZone) -> SolarDate {
    match lunar_month_start(lunar.year, lunar.month, lunar.is_leap_month, tz) {
        Some(start) => date_from_jd(start + lunar.day as JulianDay - 1),
        None => SolarDate::NULL,
    }
}

/// Strict variant of [`lunar_to_solar`].
///
/// Fails with [`Error::InvalidLunarDate`] when the month or day is out of
/// range, when the leap flag is wrong, or when day 30 is requested in a
/// 29-day month.
pub fn try_lunar_to_solar(lunar: &LunarDate, tz: TimeZone) -> Result<SolarDate> {
    if !(1..=12).contains(&lunar.month) || !(1..=30).contains(&lunar.day) {
        return Err(Error::InvalidLunarDate(format!("{lunar}: field out of range")));
    }
    let start = lunar_month_start(lunar.year, lunar.month, lunar.is_leap_month, tz)
        .ok_or_else(|| Error::InvalidLunarDate(format!("{lunar}: no such leap month")))?;
    let jd = start + lunar.day as JulianDay - 1;
    if lunar.day == 30 && next_month_start(start, tz) <= jd {
        return Err(Error::InvalidLunarDate(format!("{lunar}: month has only 29 days")));
    }
    Ok(date_from_jd(jd))
}

fn next_month_start(start: JulianDay, tz: TimeZone) -> JulianDay {
    // Mid-month, the mean new moon index is that of `start` itself.
    let k = new_moon_index(start + 15);
    new_moon_day(k + 1, tz)
}

// ── Leap-year queries ─────────────────────────────────────────────────────────

/// The leap month (1–12) of lunar year `year`, or 0 if it has none.
///
/// A leap month 11 or 12 belongs to the lunar year that holds those months,
/// which is the year *before* the month-11 interval in which it occurs.
pub fn leap_month(year: Year, tz: TimeZone) -> u8 {
    let a11 = lunar_month11_start(year - 1, tz);
    let b11 = lunar_month11_start(year, tz);
    if has_thirteen_months(a11, b11) {
        let off = leap_month_offset(a11, tz);
        if off >= 3 {
            return leap_month_from_offset(off);
        }
    }
    let c11 = lunar_month11_start(year + 1, tz);
    if has_thirteen_months(b11, c11) {
        let off = leap_month_offset(b11, tz);
        if off <= 2 {
            return leap_month_from_offset(off);
        }
    }
    0
}

/// Whether lunar year `year` has a leap month.
pub fn is_leap_year(year: Year, tz: TimeZone) -> bool {
    leap_month(year, tz) != 0
}

/// Number of days (29 or 30) in a lunar month.
pub fn days_in_lunar_month(year: Year, month: u8, is_leap: bool, tz: TimeZone) -> Result<u8> {
    ensure!((1..=12).contains(&month), "lunar month {month} out of range [1, 12]");
    let start = lunar_month_start(year, month, is_leap, tz).ok_or_else(|| {
        Error::InvalidLunarDate(format!("{month}/{year} is not a leap month"))
    })?;
    Ok((next_month_start(start, tz) - start) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VN: TimeZone = TimeZone::VIETNAM;

    fn date(y: Year, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_validates_ranges() {
        assert!(LunarDate::new(2024, 0, 1, false).is_err());
        assert!(LunarDate::new(2024, 13, 1, false).is_err());
        assert!(LunarDate::new(2024, 1, 31, false).is_err());
        let l = LunarDate::new(2024, 1, 1, false).unwrap();
        assert_eq!(l.jd, 0);
        assert_eq!(l.resolved(VN).unwrap().jd, 2_460_351);
    }

    #[test]
    fn month_names() {
        let l = LunarDate::new(2024, 1, 1, false).unwrap();
        assert_eq!(l.month_name(), "Giêng");
        let l = LunarDate::new(2024, 12, 1, false).unwrap();
        assert_eq!(l.month_name(), "Chạp");
    }

    #[test]
    fn display() {
        let l = solar_to_lunar(date(2023, 3, 22), VN);
        assert_eq!(l.to_string(), "1/2n/2023");
        assert_eq!(solar_to_lunar(date(2024, 2, 10), VN).to_string(), "1/1/2024");
    }

    #[test]
    fn leap_queries() {
        assert_eq!(leap_month(2023, VN), 2);
        assert!(is_leap_year(2023, VN));
        assert_eq!(leap_month(2024, VN), 0);
        assert_eq!(leap_month(2025, VN), 6);
        assert_eq!(leap_month(2020, VN), 4);
    }

    #[test]
    fn wrong_leap_flag_is_sentinel() {
        let bogus = LunarDate::new(2023, 3, 1, true).unwrap();
        assert!(lunar_to_solar(&bogus, VN).is_null());
        assert!(matches!(
            try_lunar_to_solar(&bogus, VN),
            Err(Error::InvalidLunarDate(_))
        ));
        let no_leap = LunarDate::new(2024, 5, 1, true).unwrap();
        assert!(lunar_to_solar(&no_leap, VN).is_null());
    }

    #[test]
    fn month_lengths() {
        // Chạp of Quý Mão ran from 2024-01-11 to 2024-02-09.
        assert_eq!(days_in_lunar_month(2023, 12, false, VN).unwrap(), 30);
        let total: u32 = (1..=12)
            .map(|m| days_in_lunar_month(2024, m, false, VN).unwrap() as u32)
            .sum();
        assert!((353..=355).contains(&total));
        assert!(days_in_lunar_month(2024, 1, true, VN).is_err());
    }

    #[test]
    fn day_thirty_of_short_month_is_rejected() {
        for m in 1..=12 {
            let len = days_in_lunar_month(2024, m, false, VN).unwrap();
            let thirty = LunarDate::new(2024, m, 30, false).unwrap();
            assert_eq!(try_lunar_to_solar(&thirty, VN).is_ok(), len == 30);
        }
    }
}
