//! A lighter auspiciousness score using only the activity rule tables.
//!
//! Unlike [`evaluator`](crate::evaluator), stars and ages are ignored; the
//! lunar day adds one rule of its own (mùng 1 and rằm).

use serde::{Deserialize, Serialize};

use amlich_core::{Result, Year};
use amlich_time::{date::days_in_month, solar_to_lunar, SolarDate, TimeZone};

use crate::can_chi::day_can_chi;
use crate::hoang_dao::is_hoang_dao_day;
use crate::rules::{clamp_score, rule_for, ActivityType, ScoreWeights, GOOD_DAY_THRESHOLD};

/// Which check fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum AuspiciousTag {
    HoangDao,
    GoodChi,
    BadChi,
    GoodCanChi,
    BadCanChi,
    LunarDayBad,
    LunarDayGood,
}

/// Score of one day for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAuspiciousness {
    /// The day.
    pub date: SolarDate,
    /// Score in `0..=100`.
    pub score: i32,
    /// `score >= 60`.
    pub is_good_day: bool,
    /// Checks that fired.
    pub tags: Vec<AuspiciousTag>,
    /// One line per check.
    pub reasons: Vec<String>,
}

/// Score `solar` for `activity`.
pub fn auspiciousness_for_date(solar: SolarDate, activity: ActivityType) -> DayAuspiciousness {
    let w = ScoreWeights::DEFAULT;
    let rule = rule_for(activity);
    let lunar = solar_to_lunar(solar, TimeZone::default());
    let day = day_can_chi(lunar.jd);
    let label = day.label();

    let mut score = w.base;
    let mut tags = Vec::new();
    let mut reasons = Vec::new();

    if rule.prefer_hoang_dao {
        if is_hoang_dao_day(day.chi) {
            score += w.hoang_dao;
            tags.push(AuspiciousTag::HoangDao);
            reasons.push(format!("Ngày Hoàng Đạo ({})", day.chi));
        } else {
            reasons.push(format!("Ngày Hắc Đạo ({})", day.chi));
        }
    }
    if rule.good_chi.contains(&day.chi) {
        score += w.good_chi;
        tags.push(AuspiciousTag::GoodChi);
        reasons.push(format!("Chi {} tốt cho {}", day.chi, activity.id()));
    }
    if rule.bad_chi.contains(&day.chi) {
        score += w.bad_chi;
        tags.push(AuspiciousTag::BadChi);
        reasons.push(format!("Chi {} không tốt cho {}", day.chi, activity.id()));
    }
    if rule.good_can_chi.contains(&day) {
        score += w.good_can_chi;
        tags.push(AuspiciousTag::GoodCanChi);
        reasons.push(format!("{label} là ngày đại cát"));
    }
    if rule.bad_can_chi.contains(&day) {
        score += w.bad_can_chi;
        tags.push(AuspiciousTag::BadCanChi);
        reasons.push(format!("{label} nên tránh"));
    }

    if lunar.day == 1 || lunar.day == 15 {
        match activity {
            ActivityType::Haircut => {
                score -= 15;
                tags.push(AuspiciousTag::LunarDayBad);
                reasons.push("Tránh cắt tóc ngày mùng 1 và rằm".into());
            }
            ActivityType::Wedding | ActivityType::StartBusiness => {
                score += 10;
                tags.push(AuspiciousTag::LunarDayGood);
                reasons.push("Ngày đầu tháng/rằm tốt cho việc lớn".into());
            }
            _ => {}
        }
    }

    let score = clamp_score(score);
    DayAuspiciousness {
        date: solar,
        score,
        is_good_day: score >= GOOD_DAY_THRESHOLD,
        tags,
        reasons,
    }
}

/// Good days in `from..=to`, best first.
pub fn find_auspicious_days(
    from: SolarDate,
    to: SolarDate,
    activity: ActivityType,
) -> Vec<DayAuspiciousness> {
    let mut days: Vec<_> = from
        .iter_to(to)
        .map(|d| auspiciousness_for_date(d, activity))
        .filter(|a| a.is_good_day)
        .collect();
    days.sort_by(|a, b| b.score.cmp(&a.score));
    days
}

/// Best `limit` good days of a civil month.
pub fn best_days_in_month(
    year: Year,
    month: u8,
    activity: ActivityType,
    limit: usize,
) -> Result<Vec<DayAuspiciousness>> {
    let first = SolarDate::from_ymd(year, month, 1)?;
    let last = SolarDate::from_ymd(year, month, days_in_month(year, month))?;
    let mut days = find_auspicious_days(first, last, activity);
    days.truncate(limit);
    Ok(days)
}

/// Whether `solar` is a good day for `activity`.
pub fn is_good_day_for(solar: SolarDate, activity: ActivityType) -> bool {
    auspiciousness_for_date(solar, activity).is_good_day
}
