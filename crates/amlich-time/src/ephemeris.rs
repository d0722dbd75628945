//! Truncated solar and lunar ephemeris.
//!
//! Two low-order series are enough to place every new moon and every
//! 30° sun sector on the right civil day for 1900–2100:
//!
//! * the Sun's apparent ecliptic longitude (mean longitude plus the equation
//!   of centre);
//! * the time of the k-th mean new moon after the 1900-01-01 epoch, corrected
//!   by the principal periodic terms in the Sun's and Moon's mean anomalies
//!   and the Moon's argument of latitude, then by ΔT.
//!
//! Both are pure functions of their numeric inputs.

use std::f64::consts::PI;

use amlich_core::{Degrees, JulianDay, Real};

use crate::timezone::TimeZone;

/// Julian Day of the reference new moon (k = 0) on 1900-01-01.
pub const NEW_MOON_EPOCH: Real = 2_415_021.076_998_695;

/// Mean synodic month in days, as used for new-moon index estimation.
pub const SYNODIC_MONTH: Real = 29.530_588_853;

/// Julian Day of J2000.0.
pub const J2000: Real = 2_451_545.0;

const DR: Real = PI / 180.0;

/// ΔT correction (in days) for the Julian-century argument `t` of the
/// new-moon series.  A separate polynomial applies far in the past.
pub fn delta_t(t: Real) -> Real {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    }
}

/// Julian Day Number (local civil day in zone `tz`) of the k-th new moon
/// after the 1900 epoch.
///
/// # Example
/// ```
/// use amlich_time::ephemeris::new_moon_day;
/// use amlich_time::TimeZone;
/// // The new moon that opened lunar year Giáp Thìn: 2024-02-10, UTC+7.
/// assert_eq!(new_moon_day(1535, TimeZone::VIETNAM), 2_460_351);
/// ```
pub fn new_moon_day(k: i64, tz: TimeZone) -> JulianDay {
    let k = k as Real;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut jd1 = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd1 += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * DR).sin();

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mpr = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let s = |x: Real| (x * DR).sin();
    let c1 = (0.1734 - 0.000_393 * t) * s(m) + 0.0021 * s(2.0 * m)
        - 0.4068 * s(mpr)
        + 0.0161 * s(2.0 * mpr)
        - 0.0004 * s(3.0 * mpr)
        + 0.0104 * s(2.0 * f)
        - 0.0051 * s(m + mpr)
        - 0.0074 * s(m - mpr)
        + 0.0004 * s(2.0 * f + m)
        - 0.0004 * s(2.0 * f - m)
        - 0.0006 * s(2.0 * f + mpr)
        + 0.0010 * s(2.0 * f - mpr)
        + 0.0005 * s(2.0 * mpr + m);

    let jd_new = jd1 + c1 - delta_t(t);
    let day = (jd_new + 0.5 + tz.day_fraction()).floor() as JulianDay;
    log::trace!("new moon k={k} -> JDN {day}");
    day
}

/// Apparent ecliptic longitude of the Sun, in radians within [0, 2π), at the
/// (fractional, UT) Julian Day `jd`.
fn sun_longitude_radians(jd: Real) -> Real {
    let t = (jd - J2000) / 36_525.0;
    let t2 = t * t;
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (DR * m).sin()
        + (0.019_993 - 0.000_101 * t) * (DR * 2.0 * m).sin()
        + 0.000_290 * (DR * 3.0 * m).sin();
    let l = (l0 + dl) * DR;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}

/// Sun longitude in degrees [0, 360) at a fractional Julian Day.
pub fn sun_longitude_degrees(jd: Real) -> Degrees {
    sun_longitude_radians(jd).to_degrees()
}

/// Sun longitude in degrees [0, 360) at local midnight starting civil day
/// `jdn` in zone `tz`.
pub fn sun_longitude(jdn: JulianDay, tz: TimeZone) -> Degrees {
    sun_longitude_degrees(local_midnight(jdn, tz))
}

/// 30°-wide sun sector (0–11) at local midnight starting day `jdn`.
///
/// Sector 9 contains the winter solstice (270°); the lunar month holding it
/// is month 11.
pub fn sun_sector(jdn: JulianDay, tz: TimeZone) -> u8 {
    let l = sun_longitude_radians(local_midnight(jdn, tz));
    ((l / PI * 6.0).floor() as u8).min(11)
}

/// Fractional Julian Day of local midnight at the start of civil day `jdn`.
pub(crate) fn local_midnight(jdn: JulianDay, tz: TimeZone) -> Real {
    jdn as Real - 0.5 - tz.day_fraction()
}

/// Index k of the mean new moon at or before `jd`, measured from the epoch.
pub fn new_moon_index(jd: JulianDay) -> i64 {
    ((jd as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64
}
