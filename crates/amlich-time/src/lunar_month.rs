//! Lunar month resolution.
//!
//! A lunar year is anchored on month 11, the month containing the winter
//! solstice.  Between two consecutive month-11 starts there are either 12 or
//! 13 new moons; in the latter case the first month that contains no major
//! solar term (no 30° sun-sector boundary) is the leap month.

use amlich_core::{JulianDay, Real, Year};

use crate::ephemeris::{new_moon_day, sun_sector, NEW_MOON_EPOCH, SYNODIC_MONTH};
use crate::julian::jd_from_date;
use crate::timezone::TimeZone;

/// Upper bound on new moons scanned when locating a leap month.
pub const MAX_LEAP_SCAN: i64 = 14;

/// Julian Day Number of the first day of lunar month 11 falling in civil
/// year `year`.
pub fn lunar_month11_start(year: Year, tz: TimeZone) -> JulianDay {
    let off = jd_from_date(31, 12, year) - 2_415_021;
    let k = (off as Real / SYNODIC_MONTH).floor() as i64;
    let mut nm = new_moon_day(k, tz);
    let sector = sun_sector(nm, tz);
    if sector >= 9 {
        nm = new_moon_day(k - 1, tz);
    }
    log::trace!("month 11 of {year}: k={k}, sector={sector}, start JDN {nm}");
    nm
}

/// Offset (in months, counted from `a11`) of the leap month in the 13-month
/// lunar year whose month 11 starts on `a11`.
///
/// An offset of 1 is a leap month 11, 2 a leap month 12, 3 a leap month 1 of
/// the following year, and so on.
pub fn leap_month_offset(a11: JulianDay, tz: TimeZone) -> u8 {
    let k = ((a11 as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
    let mut i = 1;
    let mut arc = sun_sector(new_moon_day(k + i, tz), tz);
    let last = loop {
        let last = arc;
        i += 1;
        arc = sun_sector(new_moon_day(k + i, tz), tz);
        if arc == last || i >= MAX_LEAP_SCAN {
            break last;
        }
    };
    if arc != last {
        log::warn!("no leap month found within {MAX_LEAP_SCAN} new moons after JDN {a11}");
    }
    log::debug!("leap month offset from JDN {a11}: {}", i - 1);
    (i - 1) as u8
}

/// Lunar month number (1–12) of the leap month at `offset` from month 11.
pub fn leap_month_from_offset(offset: u8) -> u8 {
    match (offset as i32 - 2).rem_euclid(12) {
        0 => 12,
        m => m as u8,
    }
}

/// Whether the lunar year interval starting at `a11` and ending at `b11`
/// holds 13 new moons.
pub fn has_thirteen_months(a11: JulianDay, b11: JulianDay) -> bool {
    b11 - a11 > 365
}

/// Month-11 starts bracketing lunar `month` of lunar `year`.
pub(crate) fn month11_bracket(year: Year, month: u8, tz: TimeZone) -> (JulianDay, JulianDay) {
    if month < 11 {
        (lunar_month11_start(year - 1, tz), lunar_month11_start(year, tz))
    } else {
        (lunar_month11_start(year, tz), lunar_month11_start(year + 1, tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::date_from_jd;

    const VN: TimeZone = TimeZone::VIETNAM;

    #[test]
    fn month11_is_near_solstice() {
        for year in [1950, 2000, 2022, 2023, 2024, 2050] {
            let a11 = lunar_month11_start(year, VN);
            let d = date_from_jd(a11);
            assert!(
                (d.year() == year && (d.month() == 11 || d.month() == 12))
                    && a11 <= jd_from_date(22, 12, year),
                "{year}: {d}"
            );
        }
    }

    #[test]
    fn month11_2022() {
        // 1/11 Nhâm Dần fell on 2022-11-24.
        assert_eq!(lunar_month11_start(2022, VN), jd_from_date(24, 11, 2022));
    }

    #[test]
    fn leap_year_2023_has_leap_second_month() {
        let a11 = lunar_month11_start(2022, VN);
        let b11 = lunar_month11_start(2023, VN);
        assert!(has_thirteen_months(a11, b11));
        let offset = leap_month_offset(a11, VN);
        assert_eq!(offset, 4);
        assert_eq!(leap_month_from_offset(offset), 2);
    }

    #[test]
    fn common_year_2024() {
        let a11 = lunar_month11_start(2023, VN);
        let b11 = lunar_month11_start(2024, VN);
        assert!(!has_thirteen_months(a11, b11));
    }

    #[test]
    fn offsets_map_to_months() {
        assert_eq!(leap_month_from_offset(1), 11);
        assert_eq!(leap_month_from_offset(2), 12);
        assert_eq!(leap_month_from_offset(3), 1);
        assert_eq!(leap_month_from_offset(13), 11);
    }
}
