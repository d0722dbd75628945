//! Ngũ Hành (five elements) and Âm Dương.

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Wood.
    #[serde(rename = "Mộc")]
    Moc,
    /// Fire.
    #[serde(rename = "Hỏa")]
    Hoa,
    /// Earth.
    #[serde(rename = "Thổ")]
    Tho,
    /// Metal.
    #[serde(rename = "Kim")]
    Kim,
    /// Water.
    #[serde(rename = "Thủy")]
    Thuy,
}

/// The generating cycle: each element produces the next.
pub const GENERATING_CYCLE: [Element; 5] = [
    Element::Moc,
    Element::Hoa,
    Element::Tho,
    Element::Kim,
    Element::Thuy,
];

impl Element {
    /// Position in [`GENERATING_CYCLE`].
    pub fn cycle_position(&self) -> usize {
        match self {
            Element::Moc => 0,
            Element::Hoa => 1,
            Element::Tho => 2,
            Element::Kim => 3,
            Element::Thuy => 4,
        }
    }

    /// Vietnamese name.
    pub fn name(&self) -> &'static str {
        match self {
            Element::Moc => "Mộc",
            Element::Hoa => "Hỏa",
            Element::Tho => "Thổ",
            Element::Kim => "Kim",
            Element::Thuy => "Thủy",
        }
    }

    /// How `self` acts on `other`.
    ///
    /// ```
    /// use amlich_fengshui::ngu_hanh::{Element, ElementRelation};
    /// assert_eq!(Element::Moc.relation_to(Element::Hoa), ElementRelation::Sinh);
    /// assert_eq!(Element::Moc.relation_to(Element::Tho), ElementRelation::Khac);
    /// assert_eq!(Element::Hoa.relation_to(Element::Moc), ElementRelation::Binh);
    /// ```
    pub fn relation_to(&self, other: Element) -> ElementRelation {
        let a = self.cycle_position();
        let b = other.cycle_position();
        if (a + 1) % 5 == b {
            ElementRelation::Sinh
        } else if (a + 2) % 5 == b {
            ElementRelation::Khac
        } else {
            ElementRelation::Binh
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Relation of one element to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// The first generates the second.
    Sinh,
    /// The first overcomes the second.
    Khac,
    /// Neither (including identical elements).
    Binh,
}

/// Yin or yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YinYang {
    /// Dương (yang).
    #[serde(rename = "Dương")]
    Duong,
    /// Âm (yin).
    #[serde(rename = "Âm")]
    Am,
}

impl YinYang {
    /// Polarity of the `i`-th stem or branch: even indices are yang.
    pub fn of_index(i: usize) -> Self {
        if i % 2 == 0 {
            YinYang::Duong
        } else {
            YinYang::Am
        }
    }
}

/// Relation between two elements.
pub fn ngu_hanh_relation(e1: Element, e2: Element) -> ElementRelation {
    e1.relation_to(e2)
}
