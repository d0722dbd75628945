//! Day evaluation, range search, and suggestion.

use amlich_fengshui::evaluator::{
    evaluate_day_for_activity, find_good_days, suggest_next_good_day, DayEvaluator,
    DaySearchBuilder, Owner,
};
use amlich_fengshui::rules::{ActivityType, ScoreWeights};
use amlich_time::SolarDate;
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> SolarDate {
    SolarDate::from_ymd(y, m, d).unwrap()
}

fn activity() -> impl Strategy<Value = ActivityType> {
    (0usize..9).prop_map(|i| ActivityType::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn score_is_clamped(
        offset in 0i64..73_000,
        act in activity(),
        birth in proptest::option::of(1920i32..2020),
    ) {
        let d = date(1900, 1, 1).add_days(offset);
        let r = evaluate_day_for_activity(d, act, birth, &[]);
        prop_assert!((0..=100).contains(&r.score));
        prop_assert_eq!(r.is_good_day, r.score >= 60);
        prop_assert_eq!(r.date, d);
    }

    #[test]
    fn score_is_clamped_with_owners(
        offset in 0i64..3_650,
        y1 in 1950i32..2010,
        y2 in 1950i32..2010,
    ) {
        let d = date(2020, 1, 1).add_days(offset);
        let owners = [Owner::new("A", y1), Owner::new("B", y2)];
        let r = evaluate_day_for_activity(d, ActivityType::Wedding, None, &owners);
        prop_assert!((0..=100).contains(&r.score));
    }
}

#[test]
fn major_activity_restrictions() {
    // Born 1990 (Ngọ): 2028 is Tam Tai; age 39 in 2028 is 39 % 9 == 3, Kim Lâu.
    let r = evaluate_day_for_activity(date(2028, 6, 1), ActivityType::Construction, Some(1990), &[]);
    assert!(r.tags.iter().any(|t| t == "Năm Tam Tai"));
    assert!(r.tags.iter().any(|t| t == "Tuổi Kim Lâu"));
    // Travel is not a major activity.
    let r = evaluate_day_for_activity(date(2028, 6, 1), ActivityType::Travel, Some(1990), &[]);
    assert!(!r.tags.iter().any(|t| t == "Năm Tam Tai"));
}

#[test]
fn clashing_owners_are_flagged() {
    // 1984 (Tý) and 1990 (Ngọ) clash.
    let owners = [Owner::new("Lan", 1984), Owner::new("Minh", 1990)];
    let r = evaluate_day_for_activity(date(2024, 6, 1), ActivityType::Wedding, None, &owners);
    assert!(r.tags.iter().any(|t| t == "Đôi Xung"));
    assert!(r.warnings.iter().any(|w| w == "Lan & Minh: Tứ Hành Xung - Cần hóa giải"));
}

#[test]
fn custom_weights_change_scores() {
    let d = date(2024, 2, 10);
    let flat = ScoreWeights {
        base: 0,
        hoang_dao: 0,
        good_chi: 0,
        bad_chi: 0,
        good_can_chi: 0,
        bad_can_chi: 0,
    };
    let standard = DayEvaluator::new().evaluate(d, ActivityType::General, None, &[]);
    let zeroed = DayEvaluator::new()
        .with_weights(flat)
        .evaluate(d, ActivityType::General, None, &[]);
    assert!(zeroed.score < standard.score);
}

#[test]
fn search_over_a_month() {
    let opts = DaySearchBuilder::new(ActivityType::Wedding, date(2024, 10, 1), date(2024, 10, 31))
        .with_birth_year(1992)
        .build()
        .unwrap();
    let days = find_good_days(&opts);
    assert!(days.len() <= 30);
    assert!(days.iter().all(|d| d.score >= 60));
    assert!(days.iter().all(|d| d.date >= opts.from && d.date <= opts.to));
    assert!(days.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn search_min_score_filters() {
    let strict = DaySearchBuilder::new(ActivityType::General, date(2024, 1, 1), date(2024, 1, 31))
        .with_min_score(90)
        .build()
        .unwrap();
    assert!(find_good_days(&strict).iter().all(|d| d.score >= 90));
}

#[test]
fn builder_rejects_null_dates() {
    let r = DaySearchBuilder::new(ActivityType::General, SolarDate::NULL, date(2024, 1, 1)).build();
    assert!(r.is_err());
}

#[test]
fn suggestion_never_exceeds_window() {
    let from = date(2024, 7, 1);
    for act in ActivityType::ALL {
        if let Some(r) = suggest_next_good_day(act, from, Some(1988), 10) {
            assert!(r.is_good_day);
            assert!(from.days_until(r.date) < 10);
        }
    }
}

#[test]
fn results_serialize() {
    let r = evaluate_day_for_activity(date(2024, 2, 10), ActivityType::MoveHouse, None, &[]);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["activity"], "move_house");
    assert_eq!(json["score"], r.score);
}
