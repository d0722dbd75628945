//! The 24 solar terms (Tiết Khí).
//!
//! Terms are 15° steps of the Sun's ecliptic longitude, numbered here from
//! Xuân Phân (vernal equinox, 0°).  A civil day *is* a term day when the
//! term's longitude is crossed between its local midnight and the next.

use serde::{Deserialize, Serialize};

use amlich_core::{cyclic_index, Degrees, Year};

use crate::date::SolarDate;
use crate::ephemeris::sun_longitude;
use crate::timezone::TimeZone;

/// Season a solar term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    /// Mùa xuân.
    Spring,
    /// Mùa hạ.
    Summer,
    /// Mùa thu.
    Autumn,
    /// Mùa đông.
    Winter,
}

impl Season {
    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Xuân",
            Season::Summer => "Hạ",
            Season::Autumn => "Thu",
            Season::Winter => "Đông",
        }
    }
}

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTerm {
    /// Position 0–23, counted from Xuân Phân.
    pub index: u8,
    /// Vietnamese name.
    pub name: &'static str,
    /// Name in Chinese characters.
    pub han: &'static str,
    /// Season.
    pub season: Season,
}

impl SolarTerm {
    /// Sun longitude at which the term begins.
    pub fn longitude(&self) -> Degrees {
        self.index as Degrees * 15.0
    }
}

const fn term(index: u8, name: &'static str, han: &'static str, season: Season) -> SolarTerm {
    SolarTerm {
        index,
        name,
        han,
        season,
    }
}

use Season::{Autumn, Spring, Summer, Winter};

/// All 24 terms ordered by longitude.
pub static SOLAR_TERMS: [SolarTerm; 24] = [
    term(0, "Xuân Phân", "春分", Spring),
    term(1, "Thanh Minh", "清明", Spring),
    term(2, "Cốc Vũ", "穀雨", Spring),
    term(3, "Lập Hạ", "立夏", Summer),
    term(4, "Tiểu Mãn", "小滿", Summer),
    term(5, "Mang Chủng", "芒種", Summer),
    term(6, "Hạ Chí", "夏至", Summer),
    term(7, "Tiểu Thử", "小暑", Summer),
    term(8, "Đại Thử", "大暑", Summer),
    term(9, "Lập Thu", "立秋", Autumn),
    term(10, "Xử Thử", "處暑", Autumn),
    term(11, "Bạch Lộ", "白露", Autumn),
    term(12, "Thu Phân", "秋分", Autumn),
    term(13, "Hàn Lộ", "寒露", Autumn),
    term(14, "Sương Giáng", "霜降", Autumn),
    term(15, "Lập Đông", "立冬", Winter),
    term(16, "Tiểu Tuyết", "小雪", Winter),
    term(17, "Đại Tuyết", "大雪", Winter),
    term(18, "Đông Chí", "冬至", Winter),
    term(19, "Tiểu Hàn", "小寒", Winter),
    term(20, "Đại Hàn", "大寒", Winter),
    term(21, "Lập Xuân", "立春", Spring),
    term(22, "Vũ Thủy", "雨水", Spring),
    term(23, "Kinh Trập", "驚蟄", Spring),
];

/// Longest gap between consecutive term days, with margin.
const MAX_TERM_GAP_DAYS: i64 = 20;

/// Term at position `index`, normalized modulo 24.
pub fn solar_term_by_index(index: i32) -> &'static SolarTerm {
    &SOLAR_TERMS[cyclic_index(index, 24)]
}

/// Term whose 15° window contains `longitude`.
pub fn solar_term_at_longitude(longitude: Degrees) -> &'static SolarTerm {
    let lon = longitude.rem_euclid(360.0);
    solar_term_by_index((lon / 15.0).floor() as i32)
}

/// Terms of one season, in longitude order.
pub fn solar_terms_in_season(season: Season) -> impl Iterator<Item = &'static SolarTerm> {
    SOLAR_TERMS.iter().filter(move |t| t.season == season)
}

/// The term beginning on `solar`, if any.
pub fn solar_term_for_date(solar: SolarDate, tz: TimeZone) -> Option<&'static SolarTerm> {
    let jd = solar.jd();
    let start = sun_longitude(jd, tz);
    let mut end = sun_longitude(jd + 1, tz);
    if end < start {
        end += 360.0;
    }
    let next = ((start / 15.0).floor() + 1.0) * 15.0;
    (next <= end).then(|| solar_term_at_longitude(next))
}

/// Term in effect on `solar` (the most recent one to have begun).
pub fn current_solar_term(solar: SolarDate, tz: TimeZone) -> &'static SolarTerm {
    solar_term_at_longitude(sun_longitude(solar.jd() + 1, tz))
}

/// The first term day strictly after `solar`.
pub fn next_solar_term(solar: SolarDate, tz: TimeZone) -> Option<(&'static SolarTerm, SolarDate)> {
    (1..=MAX_TERM_GAP_DAYS)
        .map(|n| solar.add_days(n))
        .find_map(|d| solar_term_for_date(d, tz).map(|t| (t, d)))
}

/// Every term day of civil year `year`, in date order.
pub fn solar_terms_for_year(year: Year, tz: TimeZone) -> Vec<(&'static SolarTerm, SolarDate)> {
    let first = SolarDate::from_jd(crate::julian::jd_from_date(1, 1, year));
    let last = SolarDate::from_jd(crate::julian::jd_from_date(31, 12, year));
    first
        .iter_to(last)
        .filter_map(|d| solar_term_for_date(d, tz).map(|t| (t, d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VN: TimeZone = TimeZone::VIETNAM;

    fn date(y: Year, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn table_is_ordered() {
        for (i, t) in SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index as usize, i);
            assert_eq!(t.longitude(), i as f64 * 15.0);
        }
        assert_eq!(solar_terms_in_season(Season::Winter).count(), 6);
    }

    #[test]
    fn lookup_normalizes() {
        assert_eq!(solar_term_by_index(-1).name, "Kinh Trập");
        assert_eq!(solar_term_by_index(24).name, "Xuân Phân");
        assert_eq!(solar_term_at_longitude(359.9).name, "Kinh Trập");
        assert_eq!(solar_term_at_longitude(-0.1).name, "Kinh Trập");
        assert_eq!(solar_term_at_longitude(271.0).name, "Đông Chí");
    }

    #[test]
    fn known_term_days_2024() {
        assert_eq!(solar_term_for_date(date(2024, 3, 20), VN).map(|t| t.name), Some("Xuân Phân"));
        assert_eq!(solar_term_for_date(date(2024, 2, 4), VN).map(|t| t.name), Some("Lập Xuân"));
        assert_eq!(solar_term_for_date(date(2024, 12, 21), VN).map(|t| t.name), Some("Đông Chí"));
        assert!(solar_term_for_date(date(2024, 3, 10), VN).is_none());
    }

    #[test]
    fn year_has_24_terms() {
        let terms = solar_terms_for_year(2024, VN);
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[0].0.name, "Tiểu Hàn");
        assert!(terms.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn next_term_follows() {
        let (t, d) = next_solar_term(date(2024, 3, 10), VN).unwrap();
        assert_eq!(t.name, "Xuân Phân");
        assert_eq!(d, date(2024, 3, 20));
        assert_eq!(current_solar_term(date(2024, 3, 10), VN).name, "Kinh Trập");
    }
}
