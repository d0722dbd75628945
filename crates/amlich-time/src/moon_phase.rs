//! Moon phase estimation from the age of the Moon.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use amlich_core::Real;

use crate::date::SolarDate;
use crate::ephemeris::{new_moon_day, NEW_MOON_EPOCH};
use crate::timezone::TimeZone;

/// Mean synodic month used for phase bucketing.
pub const PHASE_SYNODIC_MONTH: Real = 29.530_588_68;

/// The eight canonical phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    /// Trăng non.
    New,
    /// Trăng lưỡi liềm đầu tháng.
    WaxingCrescent,
    /// Thượng huyền.
    FirstQuarter,
    /// Trăng khuyết đầu tháng.
    WaxingGibbous,
    /// Trăng tròn.
    Full,
    /// Trăng khuyết cuối tháng.
    WaningGibbous,
    /// Hạ huyền.
    LastQuarter,
    /// Trăng lưỡi liềm cuối tháng.
    WaningCrescent,
}

// Upper age bound (days, exclusive) of each phase but the last.
const PHASE_BOUNDS: [(Real, MoonPhase); 7] = [
    (1.85, MoonPhase::New),
    (7.38, MoonPhase::WaxingCrescent),
    (11.08, MoonPhase::FirstQuarter),
    (14.77, MoonPhase::WaxingGibbous),
    (18.46, MoonPhase::Full),
    (22.15, MoonPhase::WaningGibbous),
    (25.84, MoonPhase::LastQuarter),
];

impl MoonPhase {
    /// Phase for a Moon age in days.
    pub fn from_age(age: Real) -> Self {
        PHASE_BOUNDS
            .iter()
            .find(|(bound, _)| age < *bound)
            .map(|&(_, phase)| phase)
            .unwrap_or(MoonPhase::WaningCrescent)
    }

    /// Vietnamese label.
    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::New => "Trăng non",
            MoonPhase::WaxingCrescent => "Trăng lưỡi liềm đầu tháng",
            MoonPhase::FirstQuarter => "Thượng huyền",
            MoonPhase::WaxingGibbous => "Trăng khuyết đầu tháng",
            MoonPhase::Full => "Trăng tròn",
            MoonPhase::WaningGibbous => "Trăng khuyết cuối tháng",
            MoonPhase::LastQuarter => "Hạ huyền",
            MoonPhase::WaningCrescent => "Trăng lưỡi liềm cuối tháng",
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase, age and illuminated fraction of the Moon on a civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseInfo {
    /// Phase bucket.
    pub phase: MoonPhase,
    /// Days since the last new moon, rounded to two decimals.
    pub age: Real,
    /// Illuminated fraction in percent, 0–100.
    pub illumination: u8,
}

/// Illuminated fraction (0–1) for a Moon age in days.
pub fn illumination_fraction(age: Real) -> Real {
    (1.0 - (2.0 * PI * age / PHASE_SYNODIC_MONTH).cos()) / 2.0
}

/// Estimate the Moon's phase on `solar`.
pub fn moon_phase(solar: SolarDate, tz: TimeZone) -> MoonPhaseInfo {
    let jd = solar.jd();
    let k = ((jd as Real - NEW_MOON_EPOCH) / PHASE_SYNODIC_MONTH).floor() as i64;
    let mut new_moon = new_moon_day(k, tz);
    if new_moon > jd {
        new_moon = new_moon_day(k - 1, tz);
    }
    let age = (jd - new_moon) as Real;
    MoonPhaseInfo {
        phase: MoonPhase::from_age(age),
        age: (age * 100.0).round() / 100.0,
        illumination: (illumination_fraction(age) * 100.0).round() as u8,
    }
}
