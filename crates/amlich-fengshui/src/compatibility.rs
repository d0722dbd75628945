//! Age compatibility between two people, or between a person and a day.
//!
//! The relation between the two branches is classified by
//! [`classify`](crate::relations::classify); its base score is then nudged
//! by the element relation of the first branch to the second.

use serde::Serialize;

use amlich_core::{cyclic_index, Year};

use crate::can_chi::Chi;
use crate::ngu_hanh::{Element, ElementRelation};
use crate::relations::{classify, BranchRelation};

/// Branch index of a birth year.
pub fn chi_index_from_year(year: Year) -> usize {
    cyclic_index(year.wrapping_add(8), 12)
}

/// Branch of a birth year.
pub fn chi_from_year(year: Year) -> Chi {
    Chi::ALL[chi_index_from_year(year)]
}

/// Branch and element of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonInfo {
    /// Birth year.
    pub birth_year: Year,
    /// Branch of the birth year.
    pub chi: Chi,
    /// Element of that branch.
    pub element: Element,
}

impl PersonInfo {
    /// Info for someone born in `birth_year`.
    pub fn new(birth_year: Year) -> Self {
        let chi = chi_from_year(birth_year);
        Self {
            birth_year,
            chi,
            element: chi.element(),
        }
    }
}

/// Outcome of a compatibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    /// Relation between the two branches.
    pub relation: BranchRelation,
    /// Score in `-100..=100`.
    pub score: i32,
    /// Description of the relation.
    pub description: &'static str,
    /// Advice for the relation.
    pub advice: &'static str,
}

/// Compatibility of branch `a` towards branch `b`.
pub fn compatibility(a: Chi, b: Chi) -> CompatibilityResult {
    let relation = classify(a, b);
    let mut score = relation.base_score();
    match a.element().relation_to(b.element()) {
        ElementRelation::Sinh => score = (score + 10).min(100),
        ElementRelation::Khac => score = (score - 10).max(-100),
        ElementRelation::Binh => {}
    }
    CompatibilityResult {
        relation,
        score,
        description: relation.description(),
        advice: relation.advice(),
    }
}

/// Compatibility of two people by birth year.
///
/// ```
/// use amlich_fengshui::compatibility::age_compatibility;
/// use amlich_fengshui::relations::BranchRelation;
/// // Tý and Thìn share a triad.
/// assert_eq!(age_compatibility(1984, 1988).relation, BranchRelation::TamHop);
/// ```
pub fn age_compatibility(year1: Year, year2: Year) -> CompatibilityResult {
    compatibility(chi_from_year(year1), chi_from_year(year2))
}

/// Compatibility of a person with a day whose branch is `day_chi`.
pub fn age_compatible_with_day(birth_year: Year, day_chi: Chi) -> CompatibilityResult {
    compatibility(chi_from_year(birth_year), day_chi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_year_branch() {
        assert_eq!(chi_from_year(2024), Chi::Thin);
        assert_eq!(chi_from_year(1990), Chi::Ngo);
        assert_eq!(chi_from_year(-4), Chi::Thin);
        let p = PersonInfo::new(1995);
        assert_eq!(p.chi, Chi::Hoi);
        assert_eq!(p.element, Element::Thuy);
    }

    #[test]
    fn element_adjustment() {
        // Tý (Thủy) - Thìn (Thổ): Thổ is two steps from Thủy, neither sinh nor khắc.
        let r = compatibility(Chi::Ty, Chi::Thin);
        assert_eq!(r.score, 90);
        // Thân (Kim) - Tý (Thủy): Kim generates Thủy.
        let r = compatibility(Chi::Than, Chi::Ty);
        assert_eq!((r.relation, r.score), (BranchRelation::TamHop, 100));
        // Ngọ (Hỏa) - Tý (Thủy): clash, Hỏa does not overcome Thủy.
        let r = compatibility(Chi::Ngo, Chi::Ty);
        assert_eq!((r.relation, r.score), (BranchRelation::TuHanhXung, -80));
        // Tý (Thủy) - Ngọ (Hỏa): Thủy overcomes Hỏa.
        assert_eq!(compatibility(Chi::Ty, Chi::Ngo).score, -90);
    }

    #[test]
    fn scores_stay_in_range() {
        for a in Chi::ALL {
            for b in Chi::ALL {
                let s = compatibility(a, b).score;
                assert!((-100..=100).contains(&s));
            }
        }
    }

    #[test]
    fn person_and_day() {
        let r = age_compatible_with_day(1990, Chi::Ty);
        assert_eq!(r.relation, BranchRelation::TuHanhXung);
        assert_eq!(r.description, "Tứ Hành Xung - Xung khắc mạnh, rất không hợp");
    }
}
