//! Consolidated feng-shui reports for a day and for a person.

use serde::Serialize;

use amlich_core::Year;
use amlich_time::solar_term::{current_solar_term, next_solar_term, SolarTerm};
use amlich_time::{solar_to_lunar, SolarDate, TimeZone};

use crate::can_chi::{can_chi_for_date, CanChiDetail, Chi};
use crate::compatibility::{age_compatible_with_day, chi_from_year};
use crate::han_tuoi::{kim_lau_year, tam_tai_info};
use crate::hoang_dao::{hoang_dao_hours, is_hoang_dao_day};
use crate::ngu_hanh::Element;
use crate::relations::{chi_xung_hop, XungHop};
use crate::rules::clamp_score;
use crate::stars::{stars_for_lunar, DayStars};

/// Years covered by [`personal_feng_shui`] after the target year.
pub const PERSONAL_HORIZON_YEARS: Year = 10;

// ── Day report ───────────────────────────────────────────────────────────────

/// [`CanChiDetail`] with stem elements and the day branch's partners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedCanChi {
    /// The underlying pairs.
    #[serde(flatten)]
    pub detail: CanChiDetail,
    /// Element of the day stem.
    pub day_element: Element,
    /// Element of the month stem.
    pub month_element: Element,
    /// Element of the year stem.
    pub year_element: Element,
    /// Partners of the day branch.
    pub day_xung_hop: XungHop,
}

/// Add elements and branch partners to a snapshot.
pub fn enrich_can_chi(detail: CanChiDetail) -> EnrichedCanChi {
    EnrichedCanChi {
        day_element: detail.day.can.element(),
        month_element: detail.month.can.element(),
        year_element: detail.year.can.element(),
        day_xung_hop: chi_xung_hop(detail.day.chi),
        detail,
    }
}

/// A term day and its date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpcomingSolarTerm {
    /// The term.
    pub term: &'static SolarTerm,
    /// Day it begins.
    pub date: SolarDate,
}

/// Everything known about one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FengShuiDayInfo {
    /// The day.
    pub date: SolarDate,
    /// Stem/branch pairs with elements.
    pub can_chi: EnrichedCanChi,
    /// Officer and lodge.
    pub stars: DayStars,
    /// Term in effect.
    pub current_term: &'static SolarTerm,
    /// Next term day.
    pub next_term: Option<UpcomingSolarTerm>,
    /// Hoàng Đạo day.
    pub hoang_dao_day: bool,
    /// Hoàng Đạo hours.
    pub hoang_dao_hours: [Chi; 6],
    /// Overall score in `0..=100`.
    pub score: i32,
    /// Short labels.
    pub tags: Vec<String>,
    /// Advice lines.
    pub recommendations: Vec<String>,
}

fn day_score(stars: &DayStars, hoang_dao: bool) -> i32 {
    let mut score = 50;
    if stars.kien_tru.nature.is_good() {
        score += 20;
    } else if stars.kien_tru.nature.is_bad() {
        score -= 15;
    }
    score += if stars.lodge.nature.is_good() { 15 } else { -10 };
    if hoang_dao {
        score += 15;
    }
    clamp_score(score)
}

fn day_tags(stars: &DayStars, hoang_dao: bool, day_element: Element) -> Vec<String> {
    let mut tags = Vec::new();
    if hoang_dao {
        tags.push("Hoàng Đạo".to_string());
    }
    tags.push(stars.kien_tru.name.to_string());
    tags.push(format!("Sao {}", stars.lodge.name));
    if stars.kien_tru.nature.is_good() {
        tags.push("Ngày Tốt".to_string());
    } else if stars.kien_tru.nature.is_bad() {
        tags.push("Ngày Xấu".to_string());
    }
    tags.push(format!("Hành {day_element}"));
    tags
}

fn recommendations(stars: &DayStars, hoang_dao: bool) -> Vec<String> {
    let mut out = Vec::new();
    let officer = stars.kien_tru;
    if !officer.good_for.is_empty() {
        out.push(format!("Nên: {}", officer.good_for.join(", ")));
    }
    if !officer.avoid_for.is_empty() {
        out.push(format!("Tránh: {}", officer.avoid_for.join(", ")));
    }
    let lodge = stars.lodge;
    if lodge.nature.is_good() {
        out.push(format!("Sao {} ({}) là sao tốt", lodge.name, lodge.animal));
    } else {
        out.push(format!("Sao {} ({}) xấu, nên tránh việc lớn", lodge.name, lodge.animal));
    }
    if hoang_dao {
        out.push("Ngày Hoàng Đạo thuận lợi cho khai trương, động thổ".to_string());
    }
    out
}

/// Full report for `solar`.
pub fn feng_shui_for_date(solar: SolarDate, tz: TimeZone) -> FengShuiDayInfo {
    let lunar = solar_to_lunar(solar, tz);
    let can_chi = enrich_can_chi(can_chi_for_date(solar));
    let stars = stars_for_lunar(&lunar);
    let day_chi = can_chi.detail.day.chi;
    let hoang_dao = is_hoang_dao_day(day_chi);

    FengShuiDayInfo {
        date: solar,
        stars,
        current_term: current_solar_term(solar, tz),
        next_term: next_solar_term(solar, tz).map(|(term, date)| UpcomingSolarTerm { term, date }),
        hoang_dao_day: hoang_dao,
        hoang_dao_hours: hoang_dao_hours(day_chi),
        score: day_score(&stars, hoang_dao),
        tags: day_tags(&stars, hoang_dao, can_chi.day_element),
        recommendations: recommendations(&stars, hoang_dao),
        can_chi,
    }
}

// ── Person report ────────────────────────────────────────────────────────────

/// One restricted year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanTuoiEntry {
    /// Civil year.
    pub year: Year,
    /// "Tam Tai" or a Kim Lâu label.
    pub kind: String,
    /// Description.
    pub description: String,
}

/// A person's branch, element, and restricted years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalFengShui {
    /// Birth year.
    pub birth_year: Year,
    /// Branch of the birth year.
    pub chi: Chi,
    /// Element of that branch.
    pub element: Element,
    /// Restricted years from the target year on.
    pub han_tuoi: Vec<HanTuoiEntry>,
}

/// Restrictions for `target_year..=target_year + 10`.
pub fn personal_feng_shui(birth_year: Year, target_year: Year) -> PersonalFengShui {
    let chi = chi_from_year(birth_year);
    let mut han_tuoi = Vec::new();
    for year in target_year..=target_year + PERSONAL_HORIZON_YEARS {
        if tam_tai_info(chi, chi_from_year(year)).is_tam_tai {
            han_tuoi.push(HanTuoiEntry {
                year,
                kind: "Tam Tai".into(),
                description: "Năm Tam Tai - tránh động thổ, xây nhà".into(),
            });
        }
        if let Some(kim_lau) = kim_lau_year(birth_year, year) {
            han_tuoi.push(HanTuoiEntry {
                year,
                kind: kim_lau.label.into(),
                description: kim_lau.description.into(),
            });
        }
    }
    PersonalFengShui {
        birth_year,
        chi,
        element: chi.element(),
        han_tuoi,
    }
}

/// Whether a day suits a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePersonCheck {
    /// `score >= 50`.
    pub compatible: bool,
    /// Relation score, raised on Hoàng Đạo days.
    pub score: i32,
    /// Findings.
    pub reasons: Vec<String>,
}

/// Check `solar` against someone born in `birth_year`.
pub fn check_date_for_person(solar: SolarDate, birth_year: Year) -> DatePersonCheck {
    let detail = can_chi_for_date(solar);
    let compat = age_compatible_with_day(birth_year, detail.day.chi);

    let mut reasons = vec![compat.description.to_string()];
    if compat.score < 50 {
        reasons.push(compat.advice.to_string());
    }
    if tam_tai_info(chi_from_year(birth_year), detail.year.chi).is_tam_tai {
        reasons.push("Năm Tam Tai - cần thận trọng khi làm việc lớn".into());
    }
    if let Some(kim_lau) = kim_lau_year(birth_year, solar.year()) {
        reasons.push(format!("{}: {}", kim_lau.label, kim_lau.description));
    }

    let mut score = compat.score;
    if is_hoang_dao_day(detail.day.chi) {
        score = (score + 10).min(100);
        reasons.push("Ngày Hoàng Đạo - thuận lợi cho các việc quan trọng".into());
    }
    DatePersonCheck {
        compatible: score >= 50,
        score,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn enrichment() {
        let e = enrich_can_chi(can_chi_for_date(date(2024, 2, 10)));
        assert_eq!(e.day_element, Element::Moc);
        assert_eq!(e.year_element, Element::Moc);
        assert_eq!(e.day_xung_hop.xung, Chi::Tuat);
        assert_eq!(e.day_xung_hop.luc_hop, Some(Chi::Dau));
    }

    #[test]
    fn day_report() {
        let info = feng_shui_for_date(date(2024, 2, 10), TimeZone::VIETNAM);
        assert!(info.hoang_dao_day);
        assert_eq!(info.tags[0], "Hoàng Đạo");
        assert!(info.tags.last().is_some_and(|t| t == "Hành Mộc"));
        assert!((0..=100).contains(&info.score));
        assert!(info.recommendations.iter().any(|r| r.starts_with("Nên: ")));
        assert_eq!(info.current_term.name, "Lập Xuân");
        let next = info.next_term.unwrap();
        assert_eq!(next.term.name, "Vũ Thủy");
    }

    #[test]
    fn personal_report() {
        // Born 1990 (Ngọ): Tam Tai in 2028, 2029, 2030.
        let p = personal_feng_shui(1990, 2024);
        assert_eq!(p.chi, Chi::Ngo);
        assert_eq!(p.element, Element::Hoa);
        let tam_tai: Vec<_> = p.han_tuoi.iter().filter(|e| e.kind == "Tam Tai").map(|e| e.year).collect();
        assert_eq!(tam_tai, vec![2028, 2029, 2030]);
        // age 35 in 2024 is Kim Lâu Thê
        assert!(p.han_tuoi.iter().any(|e| e.year == 2024 && e.kind == "Kim Lâu Thê"));
        assert!(p.han_tuoi.iter().all(|e| (2024..=2034).contains(&e.year)));
    }

    #[test]
    fn person_check() {
        // Thìn day vs. Tuất birth year: clash, Hoàng Đạo bonus still applies.
        let c = check_date_for_person(date(2024, 2, 10), 1994);
        assert!(!c.compatible);
        assert_eq!(c.reasons[0], "Tứ Hành Xung - Xung khắc mạnh, rất không hợp");
        assert_eq!(c.reasons[1], "Quan hệ rất khó khăn, cần có người trung gian hóa giải.");
        assert!(c.reasons.iter().any(|r| r.starts_with("Ngày Hoàng Đạo")));
        assert!(c.score <= -60);
    }
}
