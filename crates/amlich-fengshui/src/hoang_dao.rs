//! Hoàng Đạo (auspicious) days and hours.

use crate::can_chi::Chi;

/// Day branches that fall on a Hoàng Đạo day.
pub const HOANG_DAO_DAY_CHI: [Chi; 6] = [Chi::Dan, Chi::Thin, Chi::Ti, Chi::Mui, Chi::Tuat, Chi::Hoi];

const HOURS_EVEN_DAY: [Chi; 6] = [Chi::Ty, Chi::Suu, Chi::Thin, Chi::Ti, Chi::Ngo, Chi::Mui];
const HOURS_ODD_DAY: [Chi; 6] = [Chi::Dan, Chi::Mao, Chi::Thin, Chi::Ti, Chi::Than, Chi::Dau];

/// Whether a day with branch `day_chi` is Hoàng Đạo (otherwise Hắc Đạo).
pub fn is_hoang_dao_day(day_chi: Chi) -> bool {
    HOANG_DAO_DAY_CHI.contains(&day_chi)
}

/// The six Hoàng Đạo hour branches of a day.
pub fn hoang_dao_hours(day_chi: Chi) -> [Chi; 6] {
    if day_chi.index() % 2 == 0 {
        HOURS_EVEN_DAY
    } else {
        HOURS_ODD_DAY
    }
}

/// Clock range of a two-hour branch, e.g. `"23:00-01:00"` for Tý.
pub fn hour_range(hour: Chi) -> String {
    let start = (hour.index() * 2 + 23) % 24;
    let end = (start + 2) % 24;
    format!("{:02}:00-{:02}:00", start, end)
}
