//! Solar terms and holiday placement across many years.

use amlich_time::solar_term::{current_solar_term, solar_terms_for_year};
use amlich_time::{next_solar_term, solar_to_lunar, solar_term_for_date, year_festivals, SolarDate, TimeZone};
use proptest::prelude::*;

const VN: TimeZone = TimeZone::VIETNAM;

#[test]
fn every_year_has_24_term_days() {
    for year in [1900, 1950, 1999, 2000, 2024, 2050, 2099] {
        let terms = solar_terms_for_year(year, VN);
        assert_eq!(terms.len(), 24, "{year}");
        for (term, day) in terms {
            assert_eq!(current_solar_term(day, VN).name, term.name, "{day}");
        }
    }
}

#[test]
fn tet_festival_lands_on_lunar_new_year() {
    for year in 1950..=2050 {
        let tet: Vec<_> = year_festivals(year, VN)
            .into_iter()
            .filter(|f| f.holiday.name == "Tết Nguyên Đán")
            .collect();
        assert_eq!(tet.len(), 1, "{year}");
        let l = solar_to_lunar(tet[0].date, VN);
        assert_eq!((l.year, l.month, l.day, l.is_leap_month), (year, 1, 1, false));
    }
}

proptest! {
    #[test]
    fn next_term_is_close_and_is_a_term_day(jd in 2_415_021i64..2_488_069) {
        let day = SolarDate::from_jd(jd);
        let (term, on) = next_solar_term(day, VN).unwrap();
        prop_assert!(on > day);
        prop_assert!(day.days_until(on) <= 20);
        prop_assert_eq!(solar_term_for_date(on, VN).map(|t| t.name), Some(term.name));
    }
}
