//! Age restrictions (Hạn Tuổi): Tam Tai, Kim Lâu and Hoàng Ốc.
//!
//! Ages are lunar ages (tuổi mụ): `target_year - birth_year + 1`.

use serde::{Deserialize, Serialize};

use amlich_core::Year;

use crate::can_chi::Chi;
use crate::compatibility::chi_from_year;

/// Lunar age in `target_year` of someone born in `birth_year`.
pub fn lunar_age(birth_year: Year, target_year: Year) -> i32 {
    target_year - birth_year + 1
}

// ── Tam Tai ──────────────────────────────────────────────────────────────────

/// Birth branches that share the same three Tam Tai years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamTaiGroup {
    /// Birth branches of the group.
    pub members: [Chi; 3],
    /// Year branches of the three Tam Tai years, in order.
    pub years: [Chi; 3],
    /// Group name, e.g. "Thân-Tý-Thìn".
    pub name: &'static str,
}

/// The four Tam Tai groups.
pub static TAM_TAI_GROUPS: [TamTaiGroup; 4] = [
    TamTaiGroup {
        members: [Chi::Than, Chi::Ty, Chi::Thin],
        years: [Chi::Dan, Chi::Mao, Chi::Thin],
        name: "Thân-Tý-Thìn",
    },
    TamTaiGroup {
        members: [Chi::Dan, Chi::Ngo, Chi::Tuat],
        years: [Chi::Than, Chi::Dau, Chi::Tuat],
        name: "Dần-Ngọ-Tuất",
    },
    TamTaiGroup {
        members: [Chi::Ti, Chi::Dau, Chi::Suu],
        years: [Chi::Hoi, Chi::Ty, Chi::Suu],
        name: "Tỵ-Dậu-Sửu",
    },
    TamTaiGroup {
        members: [Chi::Hoi, Chi::Mao, Chi::Mui],
        years: [Chi::Ti, Chi::Ngo, Chi::Mui],
        name: "Hợi-Mão-Mùi",
    },
];

/// Tam Tai group of a birth branch.
pub fn tam_tai_group(birth_chi: Chi) -> &'static TamTaiGroup {
    // Each branch belongs to exactly one group; the groups are the triads.
    let i = TAM_TAI_GROUPS
        .iter()
        .position(|g| g.members.contains(&birth_chi))
        .unwrap_or(0);
    &TAM_TAI_GROUPS[i]
}

/// Tam Tai status of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TamTaiInfo {
    /// Whether the year is a Tam Tai year.
    pub is_tam_tai: bool,
    /// Group of the birth branch.
    pub group: &'static TamTaiGroup,
    /// 1, 2 or 3 within the Tam Tai run; 0 when not Tam Tai.
    pub year_in_cycle: u8,
}

/// Tam Tai status of a year with branch `year_chi` for a birth branch.
pub fn tam_tai_info(birth_chi: Chi, year_chi: Chi) -> TamTaiInfo {
    let group = tam_tai_group(birth_chi);
    let pos = group.years.iter().position(|c| *c == year_chi);
    TamTaiInfo {
        is_tam_tai: pos.is_some(),
        group,
        year_in_cycle: pos.map_or(0, |p| p as u8 + 1),
    }
}

/// Whether the civil year `year` is a Tam Tai year for someone born in
/// `birth_year`.
pub fn is_tam_tai_year(birth_year: Year, year: Year) -> bool {
    tam_tai_info(chi_from_year(birth_year), chi_from_year(year)).is_tam_tai
}

// ── Kim Lâu ──────────────────────────────────────────────────────────────────

/// Who a Kim Lâu age harms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KimLauKind {
    /// The person.
    Than,
    /// The spouse.
    The,
    /// The children.
    Tu,
    /// Livestock and property.
    LucSuc,
}

/// Severity of a restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[allow(missing_docs)]
    Low,
    #[allow(missing_docs)]
    Medium,
    #[allow(missing_docs)]
    High,
}

/// One Kim Lâu pattern: ages `base + 8n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KimLau {
    /// Kind.
    pub kind: KimLauKind,
    /// First affected age.
    pub base_age: i32,
    /// Severity.
    pub severity: Severity,
    /// Label, e.g. "Kim Lâu Thân".
    pub label: &'static str,
    /// Description.
    pub description: &'static str,
}

/// Kim Lâu patterns in match order.
pub static KIM_LAU_RULES: [KimLau; 4] = [
    KimLau {
        kind: KimLauKind::Than,
        base_age: 1,
        severity: Severity::High,
        label: "Kim Lâu Thân",
        description: "Hại đến bản thân gia chủ, không nên làm nhà, động thổ",
    },
    KimLau {
        kind: KimLauKind::The,
        base_age: 3,
        severity: Severity::High,
        label: "Kim Lâu Thê",
        description: "Hại đến vợ/chồng, không nên làm nhà, cưới hỏi",
    },
    KimLau {
        kind: KimLauKind::Tu,
        base_age: 6,
        severity: Severity::Medium,
        label: "Kim Lâu Tử",
        description: "Hại đến con cái, cân nhắc khi làm nhà",
    },
    KimLau {
        kind: KimLauKind::LucSuc,
        base_age: 8,
        severity: Severity::Low,
        label: "Kim Lâu Lục Súc",
        description: "Hại đến gia súc, tài sản, có thể làm nhà nhưng cần hóa giải",
    },
];

/// Kim Lâu pattern matching a lunar age, if any.
///
/// ```
/// use amlich_fengshui::han_tuoi::{kim_lau_for_age, KimLauKind};
/// assert_eq!(kim_lau_for_age(33).map(|k| k.kind), Some(KimLauKind::Than));
/// assert!(kim_lau_for_age(2).is_none());
/// ```
pub fn kim_lau_for_age(age: i32) -> Option<&'static KimLau> {
    if age <= 0 {
        return None;
    }
    KIM_LAU_RULES
        .iter()
        .find(|r| age >= r.base_age && (age - r.base_age) % 8 == 0)
}

/// Kim Lâu pattern hitting `target_year` for someone born in `birth_year`.
pub fn kim_lau_year(birth_year: Year, target_year: Year) -> Option<&'static KimLau> {
    kim_lau_for_age(lunar_age(birth_year, target_year))
}

/// Kim Lâu by the day-selection rule: lunar age mod 9 in {1, 3, 6, 8}.
pub fn is_kim_lau_age_mod9(birth_year: Year, year: Year) -> bool {
    matches!(lunar_age(birth_year, year) % 9, 1 | 3 | 6 | 8)
}

// ── Hoàng Ốc ─────────────────────────────────────────────────────────────────

/// Gender, for the Hoàng Ốc rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[allow(missing_docs)]
    Male,
    #[allow(missing_docs)]
    Female,
}

/// Whether a lunar age is a Hoàng Ốc age.
pub fn is_hoang_oc_age(age: i32, gender: Gender) -> bool {
    age > 0
        && match gender {
            Gender::Male => age % 3 == 0,
            Gender::Female => (age + 1) % 3 == 0,
        }
}

/// Description of the Hoàng Ốc restriction.
pub fn hoang_oc_description(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "Nam giới gặp Hoang Ốc, không nên làm nhà hoặc nhập trạch",
        Gender::Female => "Nữ giới gặp Hoang Ốc, không nên làm nhà hoặc nhập trạch",
    }
}

// ── Combined ─────────────────────────────────────────────────────────────────

/// Every restriction for one person in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HanTuoiReport {
    /// Lunar age.
    pub tuoi_am: i32,
    /// Tam Tai status.
    pub tam_tai: TamTaiInfo,
    /// Kim Lâu pattern, if any.
    pub kim_lau: Option<&'static KimLau>,
    /// Whether the age is a Hoàng Ốc age.
    pub hoang_oc: bool,
    /// Any of the above.
    pub has_any_restriction: bool,
}

/// All restrictions in `target_year`.
pub fn all_han_tuoi(birth_year: Year, target_year: Year, gender: Gender) -> HanTuoiReport {
    let age = lunar_age(birth_year, target_year);
    let tam_tai = tam_tai_info(chi_from_year(birth_year), chi_from_year(target_year));
    let kim_lau = kim_lau_for_age(age);
    let hoang_oc = is_hoang_oc_age(age, gender);
    HanTuoiReport {
        tuoi_am: age,
        tam_tai,
        kim_lau,
        hoang_oc,
        has_any_restriction: tam_tai.is_tam_tai || kim_lau.is_some() || hoang_oc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tam_tai_runs() {
        // Born Tý: Tam Tai in Dần, Mão, Thìn years.
        let info = tam_tai_info(Chi::Ty, Chi::Mao);
        assert!(info.is_tam_tai);
        assert_eq!(info.year_in_cycle, 2);
        assert_eq!(info.group.name, "Thân-Tý-Thìn");
        assert!(!tam_tai_info(Chi::Ty, Chi::Ti).is_tam_tai);
        // 1990 (Ngọ) hits Tam Tai in 2028-2030 (Thân, Dậu, Tuất).
        assert!(is_tam_tai_year(1990, 2028));
        assert!(is_tam_tai_year(1990, 2030));
        assert!(!is_tam_tai_year(1990, 2031));
    }

    #[test]
    fn groups_cover_every_branch() {
        for c in Chi::ALL {
            assert_eq!(TAM_TAI_GROUPS.iter().filter(|g| g.members.contains(&c)).count(), 1);
        }
    }

    #[test]
    fn kim_lau_patterns() {
        assert_eq!(kim_lau_for_age(1).map(|k| k.kind), Some(KimLauKind::Than));
        assert_eq!(kim_lau_for_age(11).map(|k| k.kind), Some(KimLauKind::The));
        assert_eq!(kim_lau_for_age(30).map(|k| k.kind), Some(KimLauKind::Tu));
        assert_eq!(kim_lau_for_age(40).map(|k| k.kind), Some(KimLauKind::LucSuc));
        assert!(kim_lau_for_age(0).is_none());
        assert!(kim_lau_for_age(-7).is_none());
        assert!(kim_lau_for_age(36).is_none());
        // born 1990, age 35 in 2024
        assert_eq!(kim_lau_year(1990, 2024).map(|k| k.severity), Some(Severity::High));
    }

    #[test]
    fn kim_lau_mod9() {
        assert!(is_kim_lau_age_mod9(1990, 2024)); // 35 % 9 == 8
        assert!(!is_kim_lau_age_mod9(1990, 2025)); // 36
        assert!(!is_kim_lau_age_mod9(2030, 2024));
    }

    #[test]
    fn hoang_oc() {
        assert!(is_hoang_oc_age(33, Gender::Male));
        assert!(!is_hoang_oc_age(33, Gender::Female));
        assert!(is_hoang_oc_age(32, Gender::Female));
        assert!(!is_hoang_oc_age(0, Gender::Male));
    }

    #[test]
    fn combined_report() {
        let r = all_han_tuoi(1990, 2024, Gender::Male);
        assert_eq!(r.tuoi_am, 35);
        assert!(r.kim_lau.is_some());
        assert!(!r.hoang_oc);
        assert!(r.has_any_restriction);
        let r = all_han_tuoi(1990, 2026, Gender::Female);
        // age 37: no Kim Lâu, (37+1) % 3 != 0, 2026 is Ngọ.
        assert!(!r.has_any_restriction);
    }
}
