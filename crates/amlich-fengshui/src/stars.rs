//! Day stars: the twelve day officers (Kiến Trừ Thập Nhị Khách) and the
//! twenty-eight lunar lodges (Nhị Thập Bát Tú).
//!
//! The officer of a day is the distance from the month branch to the day
//! branch, so Kiến falls on the day sharing the month's branch.  Lodges
//! cycle every 28 days from a fixed reference day.

use serde::{Deserialize, Serialize};

use amlich_core::{cyclic_index_i64, JulianDay};
use amlich_time::LunarDate;

use crate::can_chi::Chi;

/// Julian Day on which the Giác lodge (index 0) falls.
pub const LODGE_REFERENCE_JD: JulianDay = 2_451_911;

/// Five-level quality shared by officers and lodges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    /// Rất tốt.
    VeryGood,
    /// Tốt.
    Good,
    /// Bình thường.
    Neutral,
    /// Xấu.
    Bad,
    /// Rất xấu.
    VeryBad,
}

impl Nature {
    /// Good or very good.
    pub fn is_good(&self) -> bool {
        matches!(self, Nature::VeryGood | Nature::Good)
    }

    /// Bad or very bad.
    pub fn is_bad(&self) -> bool {
        matches!(self, Nature::Bad | Nature::VeryBad)
    }
}

/// Compass quarter of a lodge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Direction {
    #[serde(rename = "Đông")]
    Dong,
    #[serde(rename = "Bắc")]
    Bac,
    #[serde(rename = "Tây")]
    Tay,
    #[serde(rename = "Nam")]
    Nam,
}

impl Direction {
    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Dong => "Đông",
            Direction::Bac => "Bắc",
            Direction::Tay => "Tây",
            Direction::Nam => "Nam",
        }
    }
}

// ── Day officers ─────────────────────────────────────────────────────────────

/// One of the twelve day officers (Trực).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KienTruDay {
    /// Position 0–11, Kiến first.
    pub index: u8,
    /// Name.
    pub name: &'static str,
    /// Quality.
    pub nature: Nature,
    /// Short gloss.
    pub keywords: &'static str,
    /// Activities favoured on this day.
    pub good_for: &'static [&'static str],
    /// Activities to avoid.
    pub avoid_for: &'static [&'static str],
}

const fn officer(
    index: u8,
    name: &'static str,
    nature: Nature,
    keywords: &'static str,
    good_for: &'static [&'static str],
    avoid_for: &'static [&'static str],
) -> KienTruDay {
    KienTruDay {
        index,
        name,
        nature,
        keywords,
        good_for,
        avoid_for,
    }
}

use Nature::{Bad, Good, Neutral, VeryBad, VeryGood};

/// The twelve officers, Kiến to Bế.
#[rustfmt::skip]
pub static KIEN_TRU_DAYS: [KienTruDay; 12] = [
    officer(0, "Kiến", VeryGood, "Xây dựng, khởi đầu",
        &["Khởi công", "Động thổ", "Khai trương", "Xuất hành", "Cầu tài"],
        &["An táng", "Phá thổ"]),
    officer(1, "Trừ", Good, "Loại bỏ, trừ khử",
        &["Trị bệnh", "Tảo mộ", "Dọn dẹp", "Giải trừ xui xẻo", "Cắt may"],
        &["Cưới hỏi", "Khai trương", "Ký kết"]),
    officer(2, "Mãn", VeryGood, "Đầy đủ, viên mãn",
        &["Cưới hỏi", "Khai trương", "Nhập trạch", "Cầu tài", "Thu hoạch"],
        &["An táng", "Động thổ"]),
    officer(3, "Bình", Neutral, "Bình thường, ổn định",
        &["Tu sửa", "Đường sá", "Sửa chữa nhà", "Gieo trồng"],
        &["Cưới hỏi", "Khai trương", "Xuất hành xa"]),
    officer(4, "Định", Neutral, "Ổn định, yên ổn",
        &["Ký kết", "Giao dịch", "Nhập học", "Cầu y", "Hội họp"],
        &["Xuất hành", "Kiện tụng", "Động thổ"]),
    officer(5, "Chấp", Neutral, "Nắm giữ, bảo vệ",
        &["Xây dựng", "Sửa chữa", "Bắt tội phạm", "Đóng cửa"],
        &["Xuất hành", "Cưới hỏi", "Khai trương"]),
    officer(6, "Phá", VeryBad, "Phá hoại, hủy diệt",
        &["Phá dỡ", "Trị bệnh", "Phẫu thuật", "Bắt trộm"],
        &["Cưới hỏi", "Khai trương", "Ký kết", "Xuất hành", "Nhập trạch"]),
    officer(7, "Nguy", Bad, "Nguy hiểm, bất an",
        &["Cúng tế", "Cầu phúc", "An sàng"],
        &["Xuất hành", "Leo cao", "Xây dựng", "Động thổ", "Mọi việc lớn"]),
    officer(8, "Thành", VeryGood, "Thành công, hoàn thành",
        &["Cưới hỏi", "Khai trương", "Nhập trạch", "Xuất hành", "Ký kết", "Cầu tài"],
        &["Kiện tụng", "Tranh chấp"]),
    officer(9, "Thu", Neutral, "Thu hoạch, cất giữ",
        &["Thu hoạch", "Cất giữ", "Mua sắm", "Nhập kho", "Mai táng"],
        &["Khai trương", "Xuất hành", "Cưới hỏi"]),
    officer(10, "Khai", VeryGood, "Mở ra, khởi đầu",
        &["Khai trương", "Xuất hành", "Động thổ", "Cưới hỏi", "Nhập trạch", "Cầu tài"],
        &["An táng", "Phá thổ"]),
    officer(11, "Bế", Bad, "Đóng cửa, bế tắc",
        &["An táng", "Chôn cất", "Đóng cửa", "Tu sửa mồ mả"],
        &["Khai trương", "Xuất hành", "Cưới hỏi", "Động thổ", "Mọi việc mới"]),
];

/// Officer at position `index`, normalized modulo 12.
pub fn kien_tru_by_index(index: i64) -> &'static KienTruDay {
    &KIEN_TRU_DAYS[cyclic_index_i64(index, 12)]
}

/// Branch of a lunar month: Giêng is Dần, month 11 is Tý.
pub fn month_chi_index(lunar_month: u8) -> usize {
    (lunar_month as usize + 1) % 12
}

/// Officer index of a resolved lunar date in a month with branch
/// `month_chi`.
pub fn kien_tru_index(lunar: &LunarDate, month_chi: usize) -> usize {
    let day_chi = cyclic_index_i64(lunar.jd + 1, 12) as i64;
    cyclic_index_i64(day_chi - month_chi as i64, 12)
}

/// Officer of a resolved lunar date.
pub fn kien_tru_for_date(lunar: &LunarDate, month_chi: usize) -> &'static KienTruDay {
    &KIEN_TRU_DAYS[kien_tru_index(lunar, month_chi)]
}

// ── Lunar lodges ─────────────────────────────────────────────────────────────

/// One of the twenty-eight lunar lodges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lodge {
    /// Position 0–27, Giác first.
    pub index: u8,
    /// Name.
    pub name: &'static str,
    /// Name in Chinese characters.
    pub han: &'static str,
    /// Associated animal.
    pub animal: &'static str,
    /// Quality.
    pub nature: Nature,
    /// Quarter of the sky.
    pub direction: Direction,
}

const fn lodge(
    index: u8,
    name: &'static str,
    han: &'static str,
    animal: &'static str,
    nature: Nature,
    direction: Direction,
) -> Lodge {
    Lodge {
        index,
        name,
        han,
        animal,
        nature,
        direction,
    }
}

use Direction::{Bac, Dong, Nam, Tay};

/// The twenty-eight lodges.
pub static NHI_THAP_BAT_TU: [Lodge; 28] = [
    lodge(0, "Giác", "角", "Giao (Thuồng luồng)", VeryGood, Dong),
    lodge(1, "Cang", "亢", "Long (Rồng)", Bad, Dong),
    lodge(2, "Đê", "氐", "Hạc (Chồn)", Bad, Dong),
    lodge(3, "Phòng", "房", "Thố (Thỏ)", VeryGood, Dong),
    lodge(4, "Tâm", "心", "Hồ (Cáo)", Bad, Dong),
    lodge(5, "Vĩ", "尾", "Hổ (Cọp)", VeryGood, Dong),
    lodge(6, "Cơ", "箕", "Báo (Beo)", VeryGood, Dong),
    lodge(7, "Đẩu", "斗", "Giải (Cua)", VeryGood, Bac),
    lodge(8, "Ngưu", "牛", "Ngưu (Trâu)", Bad, Bac),
    lodge(9, "Nữ", "女", "Bức (Dơi)", Bad, Bac),
    lodge(10, "Hư", "虛", "Thử (Chuột)", Bad, Bac),
    lodge(11, "Nguy", "危", "Yến (Én)", Bad, Bac),
    lodge(12, "Thất", "室", "Trư (Heo)", VeryGood, Bac),
    lodge(13, "Bích", "壁", "Du (Nhím)", VeryGood, Bac),
    lodge(14, "Khuê", "奎", "Lang (Sói)", Bad, Tay),
    lodge(15, "Lâu", "婁", "Cẩu (Chó)", Good, Tay),
    lodge(16, "Vị", "胃", "Trĩ (Gà lôi)", VeryGood, Tay),
    lodge(17, "Mão", "昴", "Kê (Gà)", Bad, Tay),
    lodge(18, "Tất", "畢", "Ô (Quạ)", VeryGood, Tay),
    lodge(19, "Chủy", "觜", "Hầu (Khỉ)", Bad, Tay),
    lodge(20, "Sâm", "參", "Viên (Vượn)", Bad, Tay),
    lodge(21, "Tỉnh", "井", "Ngạn (Chó sói)", VeryGood, Nam),
    lodge(22, "Quỷ", "鬼", "Dương (Dê)", Bad, Nam),
    lodge(23, "Liễu", "柳", "Chương (Hoẵng)", Bad, Nam),
    lodge(24, "Tinh", "星", "Mã (Ngựa)", Bad, Nam),
    lodge(25, "Trương", "張", "Lộc (Nai)", VeryGood, Nam),
    lodge(26, "Dực", "翼", "Xà (Rắn)", Bad, Nam),
    lodge(27, "Chẩn", "軫", "Dẫn (Giun)", VeryGood, Nam),
];

/// Lodge at position `index`, normalized modulo 28.
pub fn lodge_by_index(index: i64) -> &'static Lodge {
    &NHI_THAP_BAT_TU[cyclic_index_i64(index, 28)]
}

/// Lodge index of the day `jd`.
pub fn nhi_thap_bat_tu_index(jd: JulianDay) -> usize {
    cyclic_index_i64(jd - LODGE_REFERENCE_JD, 28)
}

/// Lodge of the day `jd`.
pub fn lodge_for_date(jd: JulianDay) -> &'static Lodge {
    &NHI_THAP_BAT_TU[nhi_thap_bat_tu_index(jd)]
}

// ── Combined ─────────────────────────────────────────────────────────────────

/// Officer and lodge of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayStars {
    /// Day officer.
    pub kien_tru: &'static KienTruDay,
    /// Lunar lodge.
    pub lodge: &'static Lodge,
}

/// Stars of a resolved lunar date in a month with branch `month_chi`.
pub fn day_stars(lunar: &LunarDate, month_chi: usize) -> DayStars {
    DayStars {
        kien_tru: kien_tru_for_date(lunar, month_chi),
        lodge: lodge_for_date(lunar.jd),
    }
}

/// Stars of a resolved lunar date, using the branch of its own month.
pub fn stars_for_lunar(lunar: &LunarDate) -> DayStars {
    day_stars(lunar, month_chi_index(lunar.month))
}

/// Month branch as a [`Chi`].
pub fn month_chi(lunar_month: u8) -> Chi {
    Chi::ALL[month_chi_index(lunar_month)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar_with_jd(month: u8, jd: JulianDay) -> LunarDate {
        let mut l = LunarDate::new(2024, month, 1, false).unwrap();
        l.jd = jd;
        l
    }

    #[test]
    fn month_branches() {
        assert_eq!(month_chi(1), Chi::Dan);
        assert_eq!(month_chi(11), Chi::Ty);
        assert_eq!(month_chi(12), Chi::Suu);
    }

    #[test]
    fn kien_falls_on_month_branch() {
        // 2024-02-10 (JDN 2460351) is a Thìn day.
        let l = lunar_with_jd(3, 2_460_351);
        assert_eq!(kien_tru_index(&l, month_chi_index(3)), 0);
        assert_eq!(kien_tru_for_date(&l, month_chi_index(1)).name, "Mãn");
        // one day earlier wraps to Bế
        let prev = lunar_with_jd(3, 2_460_350);
        assert_eq!(kien_tru_for_date(&prev, month_chi_index(3)).name, "Bế");
    }

    #[test]
    fn lodge_cycle() {
        assert_eq!(lodge_for_date(LODGE_REFERENCE_JD).name, "Giác");
        assert_eq!(lodge_for_date(LODGE_REFERENCE_JD - 1).name, "Chẩn");
        assert_eq!(lodge_for_date(LODGE_REFERENCE_JD + 28 * 100 + 15).name, "Lâu");
    }

    #[test]
    fn index_normalization() {
        assert_eq!(kien_tru_by_index(-1).name, "Bế");
        assert_eq!(lodge_by_index(-28).index, 0);
        assert_eq!(lodge_by_index(55).index, 27);
    }

    #[test]
    fn tables_are_ordered() {
        for (i, o) in KIEN_TRU_DAYS.iter().enumerate() {
            assert_eq!(o.index as usize, i);
        }
        for (i, l) in NHI_THAP_BAT_TU.iter().enumerate() {
            assert_eq!(l.index as usize, i);
        }
    }
}
