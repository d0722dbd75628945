//! `TimeZone`: the civil offset at which lunar months are reckoned.
//!
//! The Vietnamese calendar is computed for UTC+7.  The offset shifts the
//! local day in which each new moon and solar-longitude boundary falls,
//! which is what makes it differ from the Chinese (UTC+8) calendar in a
//! handful of months.

use serde::{Deserialize, Serialize};

use amlich_core::errors::{Error, Result};
use amlich_core::Real;

/// Offset of local civil time from UTC, in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TimeZone(Real);

impl TimeZone {
    /// Vietnam, UTC+7.
    pub const VIETNAM: TimeZone = TimeZone(7.0);

    /// China, UTC+8.
    pub const CHINA: TimeZone = TimeZone(8.0);

    /// Create an offset.  Accepts the range of offsets in civil use,
    /// −12 h to +14 h.
    pub fn new(hours: Real) -> Result<Self> {
        if !hours.is_finite() || !(-12.0..=14.0).contains(&hours) {
            return Err(Error::InvalidArgument(format!(
                "time zone offset {hours} h out of range [-12, 14]"
            )));
        }
        Ok(TimeZone(hours))
    }

    /// Offset in hours.
    pub fn hours(&self) -> Real {
        self.0
    }

    /// Offset as a fraction of a day.
    pub fn day_fraction(&self) -> Real {
        self.0 / 24.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::VIETNAM
    }
}
