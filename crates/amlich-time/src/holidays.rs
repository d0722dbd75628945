//! Vietnamese holidays and observances.
//!
//! Two fixed tables: observances keyed by civil month/day, and observances
//! keyed by lunar month/day.  Lunar entries never match a leap month.

use serde::Serialize;

use amlich_core::Year;

use crate::date::SolarDate;
use crate::julian::jd_from_date;
use crate::lunar::{solar_to_lunar, try_lunar_to_solar, LunarDate};
use crate::timezone::TimeZone;

/// Category of an observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// Official day off.
    Public,
    /// Traditional festival.
    Traditional,
    /// National commemoration.
    Commemorative,
    /// International day.
    International,
    /// Religious observance.
    Religious,
}

/// Which calendar a holiday's month/day refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayCalendar {
    /// Dương lịch.
    Solar,
    /// Âm lịch.
    Lunar,
}

/// A recurring observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// Calendar of `month`/`day`.
    pub calendar: HolidayCalendar,
    /// Month, 1–12.
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Vietnamese name.
    pub name: &'static str,
    /// Category.
    pub kind: HolidayKind,
    /// Number of days observed.
    pub duration: u8,
}

/// A holiday placed on a concrete civil date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Festival {
    /// Civil date.
    pub date: SolarDate,
    /// The observance.
    pub holiday: &'static Holiday,
}

use HolidayCalendar::{Lunar, Solar};
use HolidayKind::*;

const fn solar(month: u8, day: u8, name: &'static str, kind: HolidayKind) -> Holiday {
    Holiday {
        calendar: Solar,
        month,
        day,
        name,
        kind,
        duration: 1,
    }
}

const fn lunar(month: u8, day: u8, name: &'static str, kind: HolidayKind) -> Holiday {
    Holiday {
        calendar: Lunar,
        month,
        day,
        name,
        kind,
        duration: 1,
    }
}

/// Observances on fixed civil dates.
pub static SOLAR_HOLIDAYS: [Holiday; 33] = [
    solar(1, 1, "Tết Dương lịch", Public),
    solar(4, 30, "Ngày Giải phóng miền Nam", Public),
    solar(5, 1, "Quốc tế Lao động", Public),
    solar(9, 2, "Quốc khánh", Public),
    solar(2, 3, "Ngày thành lập Đảng", Commemorative),
    solar(2, 14, "Lễ Tình nhân", International),
    solar(2, 27, "Ngày Thầy thuốc VN", Commemorative),
    solar(3, 8, "Quốc tế Phụ nữ", International),
    solar(3, 26, "Ngày thành lập Đoàn TNCS", Commemorative),
    solar(4, 21, "Ngày Sách VN", Commemorative),
    solar(5, 7, "Chiến thắng Điện Biên Phủ", Commemorative),
    solar(5, 13, "Ngày của Mẹ", International),
    solar(5, 15, "Ngày thành lập Công an", Commemorative),
    solar(5, 19, "Ngày sinh Chủ tịch HCM", Commemorative),
    solar(6, 1, "Quốc tế Thiếu nhi", International),
    solar(6, 17, "Ngày của Cha", International),
    solar(6, 21, "Ngày Báo chí VN", Commemorative),
    solar(6, 28, "Ngày Gia đình VN", Commemorative),
    solar(7, 27, "Ngày Thương binh Liệt sĩ", Commemorative),
    solar(7, 28, "Ngày thành lập Công đoàn VN", Commemorative),
    solar(8, 19, "Cách mạng Tháng Tám", Commemorative),
    solar(10, 1, "Ngày Quốc tế Người cao tuổi", International),
    solar(10, 10, "Ngày Giải phóng Thủ đô", Commemorative),
    solar(10, 13, "Ngày Doanh nhân VN", Commemorative),
    solar(10, 20, "Ngày Phụ nữ VN", Commemorative),
    solar(10, 31, "Halloween", International),
    solar(11, 9, "Ngày Pháp luật VN", Commemorative),
    solar(11, 20, "Ngày Nhà giáo VN", Commemorative),
    solar(11, 23, "Ngày thành lập MTDTGPMNVN", Commemorative),
    solar(12, 1, "Ngày thế giới phòng chống AIDS", International),
    solar(12, 22, "Ngày thành lập QĐNDVN", Commemorative),
    solar(12, 24, "Đêm Giáng sinh", International),
    solar(12, 25, "Giáng sinh", International),
];

/// Observances on fixed lunar dates.
pub static LUNAR_HOLIDAYS: [Holiday; 34] = [
    Holiday {
        duration: 5,
        ..lunar(1, 1, "Tết Nguyên Đán", Public)
    },
    lunar(1, 2, "Mùng 2 Tết", Public),
    lunar(1, 3, "Mùng 3 Tết", Public),
    lunar(1, 4, "Mùng 4 Tết", Traditional),
    lunar(1, 5, "Mùng 5 Tết", Traditional),
    lunar(1, 7, "Khai hạ", Traditional),
    lunar(1, 9, "Vía Ngọc Hoàng", Religious),
    lunar(1, 10, "Vía Thần Tài", Traditional),
    lunar(1, 15, "Rằm tháng Giêng", Traditional),
    lunar(2, 2, "Vía Thổ Địa", Religious),
    lunar(2, 15, "Rằm tháng Hai", Traditional),
    lunar(3, 3, "Tết Hàn Thực", Traditional),
    lunar(3, 10, "Giỗ Tổ Hùng Vương", Public),
    lunar(3, 15, "Rằm tháng Ba", Traditional),
    lunar(4, 8, "Phật Đản", Religious),
    lunar(4, 15, "Rằm tháng Tư", Religious),
    lunar(5, 5, "Tết Đoan Ngọ", Traditional),
    lunar(5, 15, "Rằm tháng Năm", Traditional),
    lunar(6, 15, "Rằm tháng Sáu", Traditional),
    lunar(6, 24, "Vía Quan Thánh", Religious),
    lunar(7, 1, "Mở cửa Âm phủ", Religious),
    lunar(7, 15, "Lễ Vu Lan", Traditional),
    lunar(7, 30, "Đóng cửa Âm phủ", Religious),
    lunar(8, 15, "Tết Trung Thu", Traditional),
    lunar(9, 9, "Tết Trùng Dương", Traditional),
    lunar(9, 15, "Rằm tháng Chín", Traditional),
    lunar(10, 1, "Tết Hạ Nguyên", Traditional),
    lunar(10, 15, "Rằm tháng Mười", Traditional),
    lunar(11, 15, "Rằm tháng Một", Traditional),
    lunar(12, 8, "Lễ Phật Thích Ca thành đạo", Religious),
    lunar(12, 15, "Rằm tháng Chạp", Traditional),
    lunar(12, 23, "Ông Táo chầu trời", Traditional),
    lunar(12, 25, "Đưa ông Táo", Traditional),
    lunar(12, 30, "Tất Niên", Traditional),
];

impl Holiday {
    /// Whether this is an official day off.
    pub fn is_public(&self) -> bool {
        self.kind == Public
    }
}

/// All holidays falling on a civil date whose lunar date is `lunar`.
pub fn holidays_for_date(solar: SolarDate, lunar: &LunarDate) -> Vec<&'static Holiday> {
    let by_solar = SOLAR_HOLIDAYS
        .iter()
        .filter(|h| h.month == solar.month() && h.day == solar.day());
    let by_lunar = LUNAR_HOLIDAYS
        .iter()
        .filter(|h| !lunar.is_leap_month && h.month == lunar.month && h.day == lunar.day);
    by_solar.chain(by_lunar).collect()
}

/// Holidays on a civil date, converting it to the lunar calendar in `tz`.
pub fn holidays_on(solar: SolarDate, tz: TimeZone) -> Vec<&'static Holiday> {
    holidays_for_date(solar, &solar_to_lunar(solar, tz))
}

/// Every holiday of civil year `year` placed on its date, sorted by date.
///
/// Lunar holidays are taken from the two lunar years overlapping `year`.
/// A day-30 holiday falls on day 29 when its month is short.
pub fn year_festivals(year: Year, tz: TimeZone) -> Vec<Festival> {
    let mut out: Vec<Festival> = SOLAR_HOLIDAYS
        .iter()
        .filter_map(|h| {
            SolarDate::from_ymd(year, h.month, h.day)
                .ok()
                .map(|date| Festival { date, holiday: h })
        })
        .collect();

    let first = jd_from_date(1, 1, year);
    let last = jd_from_date(31, 12, year);
    for lunar_year in [year - 1, year] {
        for h in LUNAR_HOLIDAYS.iter() {
            let Some(date) = place_lunar(lunar_year, h, tz) else {
                continue;
            };
            if (first..=last).contains(&date.jd()) {
                out.push(Festival { date, holiday: h });
            }
        }
    }
    out.sort_by_key(|f| f.date);
    log::debug!("{} festivals in {year}", out.len());
    out
}

fn place_lunar(lunar_year: Year, h: &Holiday, tz: TimeZone) -> Option<SolarDate> {
    let ld = LunarDate::new(lunar_year, h.month, h.day, false).ok()?;
    match try_lunar_to_solar(&ld, tz) {
        Ok(date) => Some(date),
        Err(_) if h.day == 30 => {
            let short = LunarDate { day: 29, ..ld };
            try_lunar_to_solar(&short, tz).ok()
        }
        Err(_) => None,
    }
}
