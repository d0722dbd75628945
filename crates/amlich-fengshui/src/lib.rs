//! # amlich-fengshui
//!
//! The sexagenary cycle, day stars, age compatibility, and day selection
//! for the Vietnamese calendar.
//!
//! ```
//! use amlich_fengshui::{evaluate_day_for_activity, ActivityType};
//! use amlich_time::SolarDate;
//!
//! let day = SolarDate::from_ymd(2024, 2, 10).unwrap();
//! let result = evaluate_day_for_activity(day, ActivityType::Wedding, Some(1990), &[]);
//! assert!((0..=100).contains(&result.score));
//! assert_eq!(result.is_good_day, result.score >= 60);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Rule-table-only auspiciousness.
pub mod auspicious;

/// Stems, branches, and their pairings.
pub mod can_chi;

/// Person-to-person and person-to-day compatibility.
pub mod compatibility;

/// Scoring days for activities and searching ranges.
pub mod evaluator;

/// Tam Tai, Kim Lâu, and Hoàng Ốc.
pub mod han_tuoi;

/// Hoàng Đạo days and hours.
pub mod hoang_dao;

/// The five elements.
pub mod ngu_hanh;

/// Branch relation tables.
pub mod relations;

/// Day and person reports.
pub mod report;

/// Activity rules and weights.
pub mod rules;

/// Day officers and lunar lodges.
pub mod stars;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use auspicious::{auspiciousness_for_date, find_auspicious_days, DayAuspiciousness};
pub use can_chi::{can_chi_for_date, can_chi_for_lunar, Can, CanChi, CanChiDetail, Chi};
pub use compatibility::{age_compatibility, age_compatible_with_day, CompatibilityResult};
pub use evaluator::{
    evaluate_day_for_activity, find_good_days, suggest_next_good_day, DayEvaluationResult,
    DayEvaluator, DaySearchBuilder, DaySearchOptions, Owner,
};
pub use han_tuoi::{all_han_tuoi, Gender};
pub use ngu_hanh::{ngu_hanh_relation, Element, ElementRelation};
pub use relations::{chi_xung_hop, BranchRelation};
pub use report::{check_date_for_person, feng_shui_for_date, personal_feng_shui};
pub use rules::{ActivityType, ScoreWeights};
pub use stars::{day_stars, DayStars};
