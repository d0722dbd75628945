//! Heavenly stems (Can), earthly branches (Chi), and the sexagenary cycle.
//!
//! Every index entering this module is normalized with
//! [`cyclic_index_i64`] so negative and oversized inputs map onto a valid
//! stem or branch.
//!
//! Two month conventions are in use and both are exposed:
//!
//! * [`month_can_chi_calendar`] is the calendar-cell convention, keyed by
//!   the year stem and the civil month number.
//! * [`month_can_chi_lunar`] is the feng-shui convention, keyed by the lunar
//!   year and lunar month.

use amlich_core::{cyclic_index_i64, JulianDay, Year};
use amlich_time::{LunarDate, SolarDate};
use serde::{Deserialize, Serialize};

use crate::ngu_hanh::{Element, YinYang};

// ── Can ──────────────────────────────────────────────────────────────────────

/// One of the ten heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Can {
    #[serde(rename = "Giáp")]
    Giap,
    #[serde(rename = "Ất")]
    At,
    #[serde(rename = "Bính")]
    Binh,
    #[serde(rename = "Đinh")]
    Dinh,
    #[serde(rename = "Mậu")]
    Mau,
    #[serde(rename = "Kỷ")]
    Ky,
    #[serde(rename = "Canh")]
    Canh,
    #[serde(rename = "Tân")]
    Tan,
    #[serde(rename = "Nhâm")]
    Nham,
    #[serde(rename = "Quý")]
    Quy,
}

impl Can {
    /// All stems in cycle order.
    pub const ALL: [Can; 10] = [
        Can::Giap,
        Can::At,
        Can::Binh,
        Can::Dinh,
        Can::Mau,
        Can::Ky,
        Can::Canh,
        Can::Tan,
        Can::Nham,
        Can::Quy,
    ];

    const NAMES: [&'static str; 10] = [
        "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
    ];

    /// Stem at position `i` (normalized mod 10).
    pub fn from_index(i: i64) -> Self {
        Self::ALL[cyclic_index_i64(i, 10)]
    }

    /// Position in the cycle, `0..10`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Element: stems pair up as Mộc, Hỏa, Thổ, Kim, Thủy.
    pub fn element(&self) -> Element {
        crate::ngu_hanh::GENERATING_CYCLE[self.index() / 2]
    }

    /// Polarity; even positions are Dương.
    pub fn yin_yang(&self) -> YinYang {
        YinYang::of_index(self.index())
    }
}

impl std::fmt::Display for Can {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Chi ──────────────────────────────────────────────────────────────────────

/// One of the twelve earthly branches.
///
/// `Ty` is Tý (rat) and `Ti` is Tỵ (snake).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Chi {
    #[serde(rename = "Tý")]
    Ty,
    #[serde(rename = "Sửu")]
    Suu,
    #[serde(rename = "Dần")]
    Dan,
    #[serde(rename = "Mão")]
    Mao,
    #[serde(rename = "Thìn")]
    Thin,
    #[serde(rename = "Tỵ")]
    Ti,
    #[serde(rename = "Ngọ")]
    Ngo,
    #[serde(rename = "Mùi")]
    Mui,
    #[serde(rename = "Thân")]
    Than,
    #[serde(rename = "Dậu")]
    Dau,
    #[serde(rename = "Tuất")]
    Tuat,
    #[serde(rename = "Hợi")]
    Hoi,
}

impl Chi {
    /// All branches in cycle order.
    pub const ALL: [Chi; 12] = [
        Chi::Ty,
        Chi::Suu,
        Chi::Dan,
        Chi::Mao,
        Chi::Thin,
        Chi::Ti,
        Chi::Ngo,
        Chi::Mui,
        Chi::Than,
        Chi::Dau,
        Chi::Tuat,
        Chi::Hoi,
    ];

    const NAMES: [&'static str; 12] = [
        "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
    ];

    const ANIMALS: [&'static str; 12] = [
        "Chuột", "Trâu", "Hổ", "Mèo", "Rồng", "Rắn", "Ngựa", "Dê", "Khỉ", "Gà", "Chó", "Lợn",
    ];

    /// Branch at position `i` (normalized mod 12).
    pub fn from_index(i: i64) -> Self {
        Self::ALL[cyclic_index_i64(i, 12)]
    }

    /// Position in the cycle, `0..12`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Zodiac animal.
    pub fn animal(&self) -> &'static str {
        Self::ANIMALS[self.index()]
    }

    /// Element of the branch.
    pub fn element(&self) -> Element {
        match self {
            Chi::Ty | Chi::Hoi => Element::Thuy,
            Chi::Dan | Chi::Mao => Element::Moc,
            Chi::Ti | Chi::Ngo => Element::Hoa,
            Chi::Than | Chi::Dau => Element::Kim,
            Chi::Suu | Chi::Thin | Chi::Mui | Chi::Tuat => Element::Tho,
        }
    }

    /// Polarity; even positions are Dương.
    pub fn yin_yang(&self) -> YinYang {
        YinYang::of_index(self.index())
    }

    /// The branch `n` steps further along the cycle.
    pub fn offset(&self, n: i64) -> Chi {
        Chi::from_index(self.index() as i64 + n)
    }
}

impl std::fmt::Display for Chi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── CanChi ───────────────────────────────────────────────────────────────────

/// A stem/branch pair from the sixty-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanChi {
    /// Stem.
    pub can: Can,
    /// Branch.
    pub chi: Chi,
}

impl CanChi {
    /// Pair from raw (unnormalized) indices.
    pub fn from_indices(can: i64, chi: i64) -> Self {
        Self {
            can: Can::from_index(can),
            chi: Chi::from_index(chi),
        }
    }

    /// The `n`-th term of the sexagenary cycle, Giáp Tý being term 0.
    pub fn from_sexagenary(n: i64) -> Self {
        Self::from_indices(n, n)
    }

    /// Position in the sexagenary cycle, or `None` when the stem and branch
    /// polarities differ and the pair never occurs.
    pub fn sexagenary_index(&self) -> Option<usize> {
        let c = self.can.index();
        let z = self.chi.index();
        if c % 2 != z % 2 {
            return None;
        }
        (0..6).map(|k| c + 10 * k).find(|n| n % 12 == z)
    }

    /// Stem index, `0..10`.
    pub fn can_index(&self) -> usize {
        self.can.index()
    }

    /// Branch index, `0..12`.
    pub fn chi_index(&self) -> usize {
        self.chi.index()
    }

    /// `"Giáp Thìn"`-style label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for CanChi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.can, self.chi)
    }
}

/// Stem/branch of the day whose Julian Day Number is `jd`.
pub fn day_can_chi(jd: JulianDay) -> CanChi {
    CanChi::from_indices(jd + 9, jd + 1)
}

/// Stem/branch of a year.
///
/// ```
/// use amlich_fengshui::can_chi::year_can_chi;
/// assert_eq!(year_can_chi(2024).label(), "Giáp Thìn");
/// ```
pub fn year_can_chi(year: Year) -> CanChi {
    let y = year as i64;
    CanChi::from_indices(y + 6, y + 8)
}

/// Calendar-cell month stem/branch: stem `(year_can*2 + month) mod 10`,
/// branch `(month + 1) mod 12`.
pub fn month_can_chi_calendar(year_can: Can, month: u8) -> CanChi {
    let m = month as i64;
    CanChi::from_indices(year_can.index() as i64 * 2 + m, m + 1)
}

/// Feng-shui month stem/branch: stem `(year*12 + month + 3) mod 10`,
/// branch `(month + 1) mod 12`.
pub fn month_can_chi_lunar(lunar_year: Year, lunar_month: u8) -> CanChi {
    let m = lunar_month as i64;
    CanChi::from_indices(lunar_year as i64 * 12 + m + 3, m + 1)
}

/// Stem/branch of the Tý hour of a day with stem `day_can`.
pub fn hour_can_chi(day_can: Can) -> CanChi {
    CanChi::from_indices(day_can.index() as i64 * 2, 0)
}

// ── Detail snapshots ─────────────────────────────────────────────────────────

/// Day, month, year, and hour pairs for one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanChiDetail {
    /// Ngày.
    pub day: CanChi,
    /// Tháng.
    pub month: CanChi,
    /// Năm.
    pub year: CanChi,
    /// Giờ (the Tý hour).
    pub hour: CanChi,
}

/// Calendar-cell snapshot of a civil date: year by civil year, month by
/// [`month_can_chi_calendar`], hour at Tý.
pub fn can_chi_for_date(solar: SolarDate) -> CanChiDetail {
    let day = day_can_chi(solar.jd());
    let year = year_can_chi(solar.year());
    CanChiDetail {
        day,
        month: month_can_chi_calendar(year.can, solar.month()),
        year,
        hour: hour_can_chi(day.can),
    }
}

/// Labels for a resolved lunar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanChiLabels {
    /// Day label.
    pub day: String,
    /// Month label.
    pub month: String,
    /// Year label.
    pub year: String,
}

/// Labels for a lunar date, using the lunar year and the feng-shui month
/// convention. The day comes from `lunar.jd`, so the date must be resolved.
pub fn can_chi_for_lunar(lunar: &LunarDate) -> CanChiLabels {
    CanChiLabels {
        day: day_can_chi(lunar.jd).label(),
        month: month_can_chi_lunar(lunar.year, lunar.month).label(),
        year: year_can_chi(lunar.year).label(),
    }
}
