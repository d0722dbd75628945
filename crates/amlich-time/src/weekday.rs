//! `Weekday`: day-of-week enum.

use serde::{Deserialize, Serialize};

use amlich_core::{cyclic_index_i64, JulianDay};

/// Day of the week.
///
/// Variants are numbered 0–6 with Sunday = 0, the numbering used by the
/// Vietnamese week names ("Chủ Nhật", "Thứ Hai", …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the ordinal (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Weekday of a Julian Day Number.  JDN 0 was a Monday.
    pub fn from_jd(jd: JulianDay) -> Self {
        Self::ALL[cyclic_index_i64(jd + 1, 7)]
    }

    /// Return the ordinal (0 = Sunday … 6 = Saturday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Vietnamese identifier of the day ("Chủ Nhật", "Thứ Hai", …).
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Chủ Nhật",
            Weekday::Monday => "Thứ Hai",
            Weekday::Tuesday => "Thứ Ba",
            Weekday::Wednesday => "Thứ Tư",
            Weekday::Thursday => "Thứ Năm",
            Weekday::Friday => "Thứ Sáu",
            Weekday::Saturday => "Thứ Bảy",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_known_days() {
        // 2024-02-10
        assert_eq!(Weekday::from_jd(2_460_351), Weekday::Saturday);
        // 2000-01-01
        assert_eq!(Weekday::from_jd(2_451_545), Weekday::Saturday);
        assert_eq!(Weekday::from_jd(2_451_546), Weekday::Sunday);
    }

    #[test]
    fn ordinals() {
        assert_eq!(Weekday::from_ordinal(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_ordinal(7), None);
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Wednesday.is_weekend());
        assert_eq!(Weekday::Monday.to_string(), "Thứ Hai");
    }
}
