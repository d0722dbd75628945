//! Julian Day Number arithmetic.
//!
//! Conversions between civil `(day, month, year)` triples and integer
//! Julian Day Numbers.  Dates from 15 October 1582 onward use the Gregorian
//! rules; earlier dates fall back to the Julian calendar, so JDN 2299160
//! (4 Oct 1582, Julian) is immediately followed by JDN 2299161
//! (15 Oct 1582, Gregorian).
//!
//! All arithmetic is exact integer arithmetic with floor division.

use amlich_core::JulianDay;

use crate::date::SolarDate;

/// First Julian Day Number of the Gregorian calendar (15 October 1582).
pub const GREGORIAN_START_JD: JulianDay = 2_299_161;

/// Convert a civil date to its Julian Day Number.
///
/// # Example
/// ```
/// use amlich_time::julian::jd_from_date;
/// assert_eq!(jd_from_date(10, 2, 2024), 2_460_351);
/// ```
pub fn jd_from_date(day: i32, month: i32, year: i32) -> JulianDay {
    let (day, month, year) = (day as i64, month as i64, year as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let base = day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    let jd = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
    if jd < GREGORIAN_START_JD {
        base - 32083
    } else {
        jd
    }
}

/// Convert a Julian Day Number back to a civil date.
///
/// Exact inverse of [`jd_from_date`] for every date the latter accepts.
pub fn date_from_jd(jd: JulianDay) -> SolarDate {
    let (b, c) = if jd >= GREGORIAN_START_JD {
        let a = jd + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        (b, a - (b * 146_097).div_euclid(4))
    } else {
        (0, jd + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = b * 100 + d - 4800 + m.div_euclid(10);
    SolarDate::from_parts_unchecked(year as i32, month as u8, day as u8)
}
