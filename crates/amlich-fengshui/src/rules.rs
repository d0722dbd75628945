//! Activity rule tables and scoring weights.

use serde::{Deserialize, Serialize};

use crate::can_chi::{Can, CanChi, Chi};

/// Activity a day is chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Cưới hỏi.
    Wedding,
    /// Nhập trạch.
    MoveHouse,
    /// Khai trương.
    StartBusiness,
    /// Ký hợp đồng.
    SignContract,
    /// Xuất hành.
    Travel,
    /// Cắt tóc.
    Haircut,
    /// Tang lễ.
    Funeral,
    /// Động thổ.
    Construction,
    /// Việc chung.
    General,
}

impl ActivityType {
    /// All activities.
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Wedding,
        ActivityType::MoveHouse,
        ActivityType::StartBusiness,
        ActivityType::SignContract,
        ActivityType::Travel,
        ActivityType::Haircut,
        ActivityType::Funeral,
        ActivityType::Construction,
        ActivityType::General,
    ];

    /// Identifier, as serialized.
    pub fn id(&self) -> &'static str {
        match self {
            ActivityType::Wedding => "wedding",
            ActivityType::MoveHouse => "move_house",
            ActivityType::StartBusiness => "start_business",
            ActivityType::SignContract => "sign_contract",
            ActivityType::Travel => "travel",
            ActivityType::Haircut => "haircut",
            ActivityType::Funeral => "funeral",
            ActivityType::Construction => "construction",
            ActivityType::General => "general",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Wedding => "Cưới hỏi",
            ActivityType::MoveHouse => "Nhập trạch",
            ActivityType::StartBusiness => "Khai trương",
            ActivityType::SignContract => "Ký hợp đồng",
            ActivityType::Travel => "Xuất hành",
            ActivityType::Haircut => "Cắt tóc",
            ActivityType::Funeral => "Tang lễ",
            ActivityType::Construction => "Động thổ",
            ActivityType::General => "Chung",
        }
    }

    /// Lower-case phrase used inside reason strings.
    pub fn phrase(&self) -> &'static str {
        match self {
            ActivityType::Wedding => "cưới hỏi",
            ActivityType::MoveHouse => "nhập trạch",
            ActivityType::StartBusiness => "khai trương",
            ActivityType::SignContract => "ký kết",
            ActivityType::Travel => "xuất hành",
            ActivityType::Haircut => "cắt tóc",
            ActivityType::Funeral => "tang lễ",
            ActivityType::Construction => "động thổ",
            ActivityType::General => "việc chung",
        }
    }

    /// Major undertakings, subject to Tam Tai and Kim Lâu penalties.
    pub fn is_major(&self) -> bool {
        matches!(
            self,
            ActivityType::Wedding
                | ActivityType::Construction
                | ActivityType::MoveHouse
                | ActivityType::StartBusiness
        )
    }

    /// Rule for this activity.
    pub fn rule(&self) -> &'static AuspiciousRule {
        rule_for(*self)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Day-selection rule for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AuspiciousRule {
    /// Activity the rule applies to.
    pub activity: ActivityType,
    /// Whether Hoàng Đạo status counts.
    pub prefer_hoang_dao: bool,
    /// Favourable day branches.
    pub good_chi: &'static [Chi],
    /// Unfavourable day branches.
    pub bad_chi: &'static [Chi],
    /// Very favourable day pairs.
    pub good_can_chi: &'static [CanChi],
    /// Day pairs to avoid.
    pub bad_can_chi: &'static [CanChi],
    /// Note shown with every evaluation.
    pub note: &'static str,
}

const fn cc(can: Can, chi: Chi) -> CanChi {
    CanChi { can, chi }
}

use Can::{Binh, Canh, Giap, Ky, Mau, Tan};
use Chi::{Dan, Dau, Hoi, Mao, Mui, Ngo, Suu, Than, Thin, Ti, Tuat, Ty};

/// Rules in [`ActivityType::ALL`] order.
pub static AUSPICIOUS_RULES: [AuspiciousRule; 9] = [
    AuspiciousRule {
        activity: ActivityType::Wedding,
        prefer_hoang_dao: true,
        good_chi: &[Dan, Thin, Ngo, Than],
        bad_chi: &[Mao, Dau],
        good_can_chi: &[cc(Giap, Ty), cc(Binh, Dan), cc(Mau, Thin), cc(Canh, Ngo)],
        bad_can_chi: &[cc(Canh, Than), cc(Tan, Dau)],
        note: "Tránh tháng 7 âm lịch (tháng cô hồn)",
    },
    AuspiciousRule {
        activity: ActivityType::MoveHouse,
        prefer_hoang_dao: true,
        good_chi: &[Dan, Thin, Mui, Tuat],
        bad_chi: &[Ti, Hoi],
        good_can_chi: &[],
        bad_can_chi: &[],
        note: "Nên nhập trạch vào giờ hoàng đạo",
    },
    AuspiciousRule {
        activity: ActivityType::StartBusiness,
        prefer_hoang_dao: true,
        good_chi: &[Dan, Thin, Ngo, Than],
        bad_chi: &[Suu, Mui],
        good_can_chi: &[cc(Giap, Ty), cc(Giap, Ngo), cc(Binh, Dan), cc(Mau, Thin)],
        bad_can_chi: &[],
        note: "Chọn ngày Thành, Khai trong 12 Trực",
    },
    AuspiciousRule {
        activity: ActivityType::SignContract,
        prefer_hoang_dao: true,
        good_chi: &[Thin, Ngo, Than, Tuat],
        bad_chi: &[Mao, Dau],
        good_can_chi: &[],
        bad_can_chi: &[],
        note: "Tránh ngày Phá trong 12 Trực",
    },
    AuspiciousRule {
        activity: ActivityType::Travel,
        prefer_hoang_dao: true,
        good_chi: &[Dan, Thin, Ngo, Than, Tuat],
        bad_chi: &[Suu, Mui, Hoi],
        good_can_chi: &[],
        bad_can_chi: &[],
        note: "Xuất hành nên chọn giờ Dần, Mão, Thìn",
    },
    AuspiciousRule {
        activity: ActivityType::Haircut,
        prefer_hoang_dao: false,
        good_chi: &[Ty, Dan, Thin, Ngo, Than, Tuat],
        bad_chi: &[Suu, Ti],
        good_can_chi: &[],
        bad_can_chi: &[],
        note: "Tránh ngày mùng 1 và rằm",
    },
    AuspiciousRule {
        activity: ActivityType::Funeral,
        prefer_hoang_dao: false,
        good_chi: &[Suu, Mao, Ti, Mui, Dau, Hoi],
        bad_chi: &[Ty, Ngo],
        good_can_chi: &[],
        bad_can_chi: &[cc(Canh, Dan), cc(Tan, Mao), cc(Mau, Than), cc(Ky, Dau)],
        note: "Tránh ngày trùng với tuổi người mất",
    },
    AuspiciousRule {
        activity: ActivityType::Construction,
        prefer_hoang_dao: true,
        good_chi: &[Dan, Thin, Ngo, Than],
        bad_chi: &[Suu, Mao, Mui, Dau],
        good_can_chi: &[cc(Giap, Ty), cc(Giap, Ngo), cc(Binh, Dan), cc(Mau, Thin), cc(Canh, Ngo)],
        bad_can_chi: &[],
        note: "Chọn ngày Định hoặc Thành trong 12 Trực",
    },
    AuspiciousRule {
        activity: ActivityType::General,
        prefer_hoang_dao: true,
        good_chi: &[Dan, Thin, Ti, Mui, Tuat, Hoi],
        bad_chi: &[Ty, Suu, Mao, Ngo, Than, Dau],
        good_can_chi: &[],
        bad_can_chi: &[],
        note: "Ngày hoàng đạo tốt cho mọi việc",
    },
];

/// Rule for `activity`.
pub fn rule_for(activity: ActivityType) -> &'static AuspiciousRule {
    &AUSPICIOUS_RULES[activity as usize]
}

/// Score contributions of the rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Starting score.
    pub base: i32,
    /// Hoàng Đạo day.
    pub hoang_dao: i32,
    /// Day branch in the good set.
    pub good_chi: i32,
    /// Day branch in the bad set.
    pub bad_chi: i32,
    /// Exact good stem/branch.
    pub good_can_chi: i32,
    /// Exact bad stem/branch.
    pub bad_can_chi: i32,
}

impl ScoreWeights {
    /// Standard weights.
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        base: 50,
        hoang_dao: 30,
        good_chi: 25,
        bad_chi: -35,
        good_can_chi: 20,
        bad_can_chi: -25,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Score at or above which a day counts as good.
pub const GOOD_DAY_THRESHOLD: i32 = 60;

/// Clamp a raw score into `0..=100`.
pub fn clamp_score(score: i32) -> i32 {
    score.clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_indexed_by_activity() {
        for a in ActivityType::ALL {
            assert_eq!(rule_for(a).activity, a);
        }
    }

    #[test]
    fn good_and_bad_sets_are_disjoint() {
        for r in AUSPICIOUS_RULES.iter() {
            assert!(r.good_chi.iter().all(|c| !r.bad_chi.contains(c)));
            assert!(r.good_can_chi.iter().all(|c| c.sexagenary_index().is_some()));
            assert!(r.bad_can_chi.iter().all(|c| c.sexagenary_index().is_some()));
        }
    }

    #[test]
    fn activity_serde() {
        let s = serde_json::to_string(&ActivityType::MoveHouse).unwrap();
        assert_eq!(s, "\"move_house\"");
        let a: ActivityType = serde_json::from_str("\"start_business\"").unwrap();
        assert_eq!(a, ActivityType::StartBusiness);
        for a in ActivityType::ALL {
            assert_eq!(serde_json::to_string(&a).unwrap(), format!("\"{}\"", a.id()));
        }
    }

    #[test]
    fn major_activities() {
        let majors: Vec<_> = ActivityType::ALL.into_iter().filter(|a| a.is_major()).collect();
        assert_eq!(majors.len(), 4);
        assert!(!ActivityType::Travel.is_major());
    }

    #[test]
    fn clamp() {
        assert_eq!(clamp_score(-40), 0);
        assert_eq!(clamp_score(140), 100);
        assert_eq!(ScoreWeights::default(), ScoreWeights::DEFAULT);
    }
}
