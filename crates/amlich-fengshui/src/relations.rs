//! Branch relationship tables and the pairwise relation classifier.

use serde::{Deserialize, Serialize};

use crate::can_chi::Chi;

// ── Static tables ────────────────────────────────────────────────────────────

/// The four Tam Hợp triads; together they partition the twelve branches.
pub const TAM_HOP: [[usize; 3]; 4] = [[0, 4, 8], [1, 5, 9], [2, 6, 10], [3, 7, 11]];

/// The six Tứ Hành Xung opposing pairs.
pub const TU_HANH_XUNG: [[usize; 2]; 6] = [[0, 6], [1, 7], [2, 8], [3, 9], [4, 10], [5, 11]];

/// The six Lục Hợp pairs.
pub const LUC_HOP: [[usize; 2]; 6] = [[0, 1], [2, 11], [3, 10], [4, 9], [5, 8], [6, 7]];

/// The six Tương Hại pairs.
pub const TUONG_HAI: [[usize; 2]; 6] = [[0, 7], [1, 6], [2, 5], [3, 4], [8, 11], [9, 10]];

/// Triad punishments (Tam Hình).
pub const TAM_HINH: [[usize; 3]; 2] = [[2, 5, 8], [1, 10, 7]];

/// Self-punishing branches (Tự Hình).
pub const TU_HINH: [usize; 4] = [4, 6, 9, 11];

/// The "ungrateful" punishment pair (Vô Ân).
pub const VO_AN: [usize; 2] = [0, 3];

fn pair_in(table: &[[usize; 2]], a: usize, b: usize) -> bool {
    table
        .iter()
        .any(|p| (p[0] == a && p[1] == b) || (p[0] == b && p[1] == a))
}

/// Tam Hợp triad containing `chi`.
pub fn tam_hop_group(chi: Chi) -> [Chi; 3] {
    let i = chi.index();
    // The triads are the residue classes mod 4.
    let g = TAM_HOP[i % 4];
    [Chi::ALL[g[0]], Chi::ALL[g[1]], Chi::ALL[g[2]]]
}

/// Both branches belong to the same triad (includes `a == b`).
pub fn is_tam_hop(a: Chi, b: Chi) -> bool {
    TAM_HOP
        .iter()
        .any(|g| g.contains(&a.index()) && g.contains(&b.index()))
}

/// Opposing pair.
pub fn is_xung(a: Chi, b: Chi) -> bool {
    pair_in(&TU_HANH_XUNG, a.index(), b.index())
}

/// Six-harmony pair.
pub fn is_luc_hop(a: Chi, b: Chi) -> bool {
    pair_in(&LUC_HOP, a.index(), b.index())
}

/// Harm pair.
pub fn is_tuong_hai(a: Chi, b: Chi) -> bool {
    pair_in(&TUONG_HAI, a.index(), b.index())
}

/// Any of the punishment patterns.
pub fn is_tuong_hinh(a: Chi, b: Chi) -> bool {
    let (i, j) = (a.index(), b.index());
    if i == j {
        return TU_HINH.contains(&i);
    }
    TAM_HINH.iter().any(|g| g.contains(&i) && g.contains(&j)) || pair_in(&[VO_AN], i, j)
}

/// Six-harmony partner of `chi`, if any.
pub fn luc_hop_partner(chi: Chi) -> Option<Chi> {
    let i = chi.index();
    LUC_HOP.iter().find_map(|p| match (p[0] == i, p[1] == i) {
        (true, _) => Some(Chi::ALL[p[1]]),
        (_, true) => Some(Chi::ALL[p[0]]),
        _ => None,
    })
}

/// Clash, triad, and harmony partners of a branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XungHop {
    /// The opposing branch, six steps away.
    pub xung: Chi,
    /// The other two members of the triad.
    pub tam_hop: [Chi; 2],
    /// The six-harmony partner.
    pub luc_hop: Option<Chi>,
}

/// Partners of `chi`.
///
/// ```
/// use amlich_fengshui::can_chi::Chi;
/// use amlich_fengshui::relations::chi_xung_hop;
/// let r = chi_xung_hop(Chi::Ty);
/// assert_eq!(r.xung, Chi::Ngo);
/// assert_eq!(r.tam_hop, [Chi::Thin, Chi::Than]);
/// assert_eq!(r.luc_hop, Some(Chi::Suu));
/// ```
pub fn chi_xung_hop(chi: Chi) -> XungHop {
    let mut others = tam_hop_group(chi).into_iter().filter(|c| *c != chi);
    let first = others.next().unwrap_or(chi);
    let second = others.next().unwrap_or(chi);
    XungHop {
        xung: chi.offset(6),
        tam_hop: [first, second],
        luc_hop: luc_hop_partner(chi),
    }
}

// ── Classification ───────────────────────────────────────────────────────────

/// Relation between two branches, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchRelation {
    /// Tứ Hành Xung.
    TuHanhXung,
    /// Tương Hình.
    TuongHinh,
    /// Tương Hại.
    TuongHai,
    /// Tam Hợp.
    TamHop,
    /// Lục Hợp.
    LucHop,
    /// Bình Hòa.
    BinhHoa,
}

impl BranchRelation {
    /// Base compatibility score.
    pub fn base_score(&self) -> i32 {
        match self {
            BranchRelation::TamHop => 90,
            BranchRelation::LucHop => 70,
            BranchRelation::BinhHoa => 50,
            BranchRelation::TuongHai => -30,
            BranchRelation::TuongHinh => -50,
            BranchRelation::TuHanhXung => -80,
        }
    }

    /// Short description.
    pub fn description(&self) -> &'static str {
        match self {
            BranchRelation::TamHop => "Tam Hợp - Rất hợp nhau, tương sinh tương trợ",
            BranchRelation::LucHop => "Lục Hợp - Hợp nhau, quan hệ tốt đẹp",
            BranchRelation::BinhHoa => "Bình Hòa - Quan hệ bình thường, không xung không hợp",
            BranchRelation::TuongHai => "Tương Hại - Có thể gây tổn hại cho nhau",
            BranchRelation::TuongHinh => "Tương Hình - Có xung đột, cần cẩn thận",
            BranchRelation::TuHanhXung => "Tứ Hành Xung - Xung khắc mạnh, rất không hợp",
        }
    }

    /// Advice for the relation.
    pub fn advice(&self) -> &'static str {
        match self {
            BranchRelation::TamHop => {
                "Đây là mối quan hệ rất tốt, nên tận dụng để hợp tác và phát triển."
            }
            BranchRelation::LucHop => "Quan hệ thuận lợi, có thể tin tưởng và hỗ trợ lẫn nhau.",
            BranchRelation::BinhHoa => "Quan hệ trung tính, cần nỗ lực để xây dựng sự gắn kết.",
            BranchRelation::TuongHai => {
                "Cần thận trọng trong giao tiếp, tránh xung đột không cần thiết."
            }
            BranchRelation::TuongHinh => "Nên giữ khoảng cách phù hợp, tránh tranh cãi và đối đầu.",
            BranchRelation::TuHanhXung => "Quan hệ rất khó khăn, cần có người trung gian hóa giải.",
        }
    }

    /// Tam Hợp or Lục Hợp.
    pub fn is_harmonious(&self) -> bool {
        matches!(self, BranchRelation::TamHop | BranchRelation::LucHop)
    }

    /// Tương Hình or Tương Hại.
    pub fn is_harmful(&self) -> bool {
        matches!(self, BranchRelation::TuongHinh | BranchRelation::TuongHai)
    }
}

/// Classify two branches; the first matching relation in priority order wins.
pub fn classify(a: Chi, b: Chi) -> BranchRelation {
    if is_xung(a, b) {
        BranchRelation::TuHanhXung
    } else if is_tuong_hinh(a, b) {
        BranchRelation::TuongHinh
    } else if is_tuong_hai(a, b) {
        BranchRelation::TuongHai
    } else if is_tam_hop(a, b) {
        BranchRelation::TamHop
    } else if is_luc_hop(a, b) {
        BranchRelation::LucHop
    } else {
        BranchRelation::BinhHoa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triads_and_clashes_partition_branches() {
        for i in 0..12 {
            assert_eq!(TAM_HOP.iter().filter(|g| g.contains(&i)).count(), 1);
            assert_eq!(TU_HANH_XUNG.iter().filter(|p| p.contains(&i)).count(), 1);
            assert_eq!(chi_xung_hop(Chi::ALL[i]).xung.index(), (i + 6) % 12);
        }
    }

    #[test]
    fn priority_order() {
        // Tý-Mão is the Vô Ân punishment.
        assert_eq!(classify(Chi::Ty, Chi::Mao), BranchRelation::TuongHinh);
        assert_eq!(classify(Chi::Ty, Chi::Ngo), BranchRelation::TuHanhXung);
        assert_eq!(classify(Chi::Ty, Chi::Mui), BranchRelation::TuongHai);
        assert_eq!(classify(Chi::Ty, Chi::Thin), BranchRelation::TamHop);
        assert_eq!(classify(Chi::Ty, Chi::Suu), BranchRelation::LucHop);
        assert_eq!(classify(Chi::Ty, Chi::Dan), BranchRelation::BinhHoa);
        // Dần-Thân clash outranks their shared punishment triad.
        assert_eq!(classify(Chi::Dan, Chi::Than), BranchRelation::TuHanhXung);
    }

    #[test]
    fn same_branch() {
        assert_eq!(classify(Chi::Ngo, Chi::Ngo), BranchRelation::TuongHinh);
        assert_eq!(classify(Chi::Ty, Chi::Ty), BranchRelation::TamHop);
    }

    #[test]
    fn partners() {
        assert_eq!(luc_hop_partner(Chi::Dan), Some(Chi::Hoi));
        assert_eq!(luc_hop_partner(Chi::Mui), Some(Chi::Ngo));
        let r = chi_xung_hop(Chi::Hoi);
        assert_eq!(r.tam_hop, [Chi::Mao, Chi::Mui]);
    }
}
