//! # amlich-time
//!
//! Civil dates, Julian Day Numbers, a truncated solar/lunar ephemeris, and
//! the Vietnamese lunisolar calendar built on them.
//!
//! ```
//! use amlich_time::{lunar_to_solar, solar_to_lunar, SolarDate, TimeZone};
//!
//! let day = SolarDate::from_ymd(2023, 3, 22).unwrap();
//! let lunar = solar_to_lunar(day, TimeZone::VIETNAM);
//! assert_eq!((lunar.month, lunar.is_leap_month), (2, true));
//! assert_eq!(lunar_to_solar(&lunar, TimeZone::VIETNAM), day);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `SolarDate`: a civil calendar date.
pub mod date;

/// Sun longitude and new moon series.
pub mod ephemeris;

/// Vietnamese holidays and their placement in a civil year.
pub mod holidays;

/// Julian Day Number conversions.
pub mod julian;

/// Solar ↔ lunar conversion and leap-month queries.
pub mod lunar;

/// Month-11 anchoring and leap-month search.
pub mod lunar_month;

/// Moon phase estimation.
pub mod moon_phase;

/// The 24 solar terms.
pub mod solar_term;

/// Time zone offsets.
pub mod timezone;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::SolarDate;
pub use holidays::{holidays_for_date, holidays_on, year_festivals, Festival, Holiday, HolidayKind};
pub use julian::{date_from_jd, jd_from_date};
pub use lunar::{
    days_in_lunar_month, is_leap_year, leap_month, lunar_to_solar, solar_to_lunar,
    try_lunar_to_solar, LunarDate,
};
pub use moon_phase::{moon_phase, MoonPhase, MoonPhaseInfo};
pub use solar_term::{next_solar_term, solar_term_for_date, Season, SolarTerm};
pub use timezone::TimeZone;
pub use weekday::Weekday;
