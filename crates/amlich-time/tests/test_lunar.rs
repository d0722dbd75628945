//! Solar ↔ lunar conversion against known Vietnamese calendar dates.

use amlich_time::{
    date_from_jd, is_leap_year, jd_from_date, leap_month, lunar_to_solar, solar_to_lunar,
    try_lunar_to_solar, LunarDate, SolarDate, TimeZone,
};
use proptest::prelude::*;

const VN: TimeZone = TimeZone::VIETNAM;

fn date(y: i32, m: u8, d: u8) -> SolarDate {
    SolarDate::from_ymd(y, m, d).unwrap()
}

fn lunar_of(y: i32, m: u8, d: u8) -> LunarDate {
    solar_to_lunar(date(y, m, d), VN)
}

#[test]
fn julian_day_of_tet_2024() {
    assert_eq!(jd_from_date(10, 2, 2024), 2_460_351);
    assert_eq!(date_from_jd(2_460_351), date(2024, 2, 10));
}

#[test]
fn tet_dates() {
    for (y, m, d) in [(2023, 1, 22), (2024, 2, 10), (2025, 1, 29), (2000, 2, 5), (1990, 1, 27)] {
        let l = lunar_of(y, m, d);
        assert_eq!((l.year, l.month, l.day, l.is_leap_month), (y, 1, 1, false), "{y}");
    }
}

#[test]
fn leap_second_month_2023() {
    let regular = lunar_of(2023, 2, 20);
    let leap = lunar_of(2023, 3, 22);
    assert_eq!((regular.month, regular.is_leap_month), (2, false));
    assert_eq!((leap.month, leap.is_leap_month), (2, true));
    assert_eq!(regular.year, leap.year);
    assert_eq!(regular.day, leap.day);
    assert_eq!(leap_month(2023, VN), 2);
    assert!(is_leap_year(2023, VN));
    assert!(!is_leap_year(2024, VN));
}

#[test]
fn year_rollover_at_tet() {
    let last = lunar_of(2024, 2, 9);
    assert_eq!((last.year, last.month, last.day), (2023, 12, 30));
    let first = lunar_of(2024, 2, 10);
    assert_eq!((first.year, first.month, first.day), (2024, 1, 1));
}

#[test]
fn months_eleven_and_twelve_before_new_year() {
    // 2024-01-01 is 20/11 Quý Mão.
    let l = lunar_of(2024, 1, 1);
    assert_eq!((l.year, l.month, l.day), (2023, 11, 20));
}

#[test]
fn known_round_trips() {
    for d in [
        date(2024, 2, 10),
        date(2023, 1, 22),
        date(2025, 1, 29),
        date(2024, 6, 15),
        date(2023, 12, 31),
        date(2023, 4, 19),
        date(2033, 12, 23),
    ] {
        let l = solar_to_lunar(d, VN);
        assert_eq!(lunar_to_solar(&l, VN), d, "{d} -> {l}");
        assert_eq!(try_lunar_to_solar(&l, VN).unwrap(), d);
    }
}

#[test]
fn every_day_of_2020s_round_trips() {
    let first = date(2020, 1, 1);
    for d in first.iter_to(date(2029, 12, 31)) {
        let l = solar_to_lunar(d, VN);
        assert!((1..=30).contains(&l.day));
        assert_eq!(lunar_to_solar(&l, VN), d, "{d} -> {l}");
    }
}

#[test]
fn leap_months_match_month_count() {
    for year in 1990..2040 {
        let leap = leap_month(year, VN);
        let count = (1..=12)
            .filter(|&m| {
                let l = LunarDate::new(year, m, 1, true).unwrap();
                !lunar_to_solar(&l, VN).is_null()
            })
            .count();
        assert_eq!(count, usize::from(leap != 0), "year {year}, leap month {leap}");
    }
}

#[test]
fn lunar_date_serializes_with_jd() {
    let l = lunar_of(2024, 2, 10);
    let json = serde_json::to_value(l).unwrap();
    assert_eq!(json["month"], 1);
    assert_eq!(json["is_leap_month"], false);
    assert_eq!(json["jd"], 2_460_351);
    let back: LunarDate = serde_json::from_value(json).unwrap();
    assert_eq!(back, l);
}

proptest! {
    #[test]
    fn solar_lunar_round_trip(jd in jd_from_date(1, 1, 1900)..=jd_from_date(31, 12, 2100)) {
        let d = SolarDate::from_jd(jd);
        let l = solar_to_lunar(d, VN);
        prop_assert_eq!(l.jd, jd);
        prop_assert_eq!(lunar_to_solar(&l, VN), d);
    }

    #[test]
    fn julian_day_round_trip(jd in jd_from_date(1, 1, 1900)..=jd_from_date(31, 12, 2100)) {
        let d = date_from_jd(jd);
        prop_assert_eq!(jd_from_date(d.day() as i32, d.month() as i32, d.year()), jd);
    }

    #[test]
    fn consecutive_days_advance_lunar_day(jd in jd_from_date(1, 1, 1900)..jd_from_date(31, 12, 2100)) {
        let a = solar_to_lunar(SolarDate::from_jd(jd), VN);
        let b = solar_to_lunar(SolarDate::from_jd(jd + 1), VN);
        prop_assert!(b.day == a.day + 1 || (b.day == 1 && (a.day == 29 || a.day == 30)));
    }
}
