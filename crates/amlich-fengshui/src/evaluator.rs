//! Day evaluation for a chosen activity.
//!
//! A single scoring pass per day: start from the base score, then add or
//! subtract for the day officer, the lunar lodge, Hoàng Đạo status, the
//! activity's branch and stem/branch lists, and, when birth years are
//! given, the age relations and restrictions of the people involved.
//! Every contribution leaves a reason or a warning behind.

use log::debug;
use serde::Serialize;

use amlich_core::{errors::Error, Result, Year};
use amlich_time::{solar_to_lunar, SolarDate, TimeZone};

use crate::can_chi::{day_can_chi, Chi};
use crate::compatibility::{age_compatibility, age_compatible_with_day, chi_from_year};
use crate::han_tuoi::{is_kim_lau_age_mod9, is_tam_tai_year};
use crate::hoang_dao::is_hoang_dao_day;
use crate::relations::BranchRelation;
use crate::rules::{clamp_score, rule_for, ActivityType, ScoreWeights, GOOD_DAY_THRESHOLD};
use crate::stars::{stars_for_lunar, Nature};

/// Score at which [`suggest_next_good_day`] stops looking.
pub const EXCELLENT_SCORE: i32 = 80;

/// Default window of [`suggest_next_good_day`].
pub const DEFAULT_SUGGEST_DAYS: u32 = 60;

/// Days to keep scanning after a good day turns up.
const SUGGEST_GRACE_DAYS: u32 = 7;

/// Contribution of the day officer.
pub fn officer_score(nature: Nature) -> i32 {
    match nature {
        Nature::VeryGood => 25,
        Nature::Good => 15,
        Nature::Neutral => 0,
        Nature::Bad => -15,
        Nature::VeryBad => -25,
    }
}

/// Contribution of the lunar lodge.
pub fn lodge_score(nature: Nature) -> i32 {
    match nature {
        Nature::VeryGood => 15,
        Nature::Good => 10,
        Nature::Neutral => 0,
        Nature::Bad => -10,
        Nature::VeryBad => -15,
    }
}

// ── Inputs and results ───────────────────────────────────────────────────────

/// A person on whose behalf a day is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    /// Display name.
    pub name: String,
    /// Birth year.
    pub birth_year: Year,
}

impl Owner {
    /// New owner.
    pub fn new(name: impl Into<String>, birth_year: Year) -> Self {
        Self {
            name: name.into(),
            birth_year,
        }
    }
}

/// Evaluation of one day for one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvaluationResult {
    /// The evaluated day.
    pub date: SolarDate,
    /// Activity evaluated for.
    pub activity: ActivityType,
    /// Score in `0..=100`.
    pub score: i32,
    /// `score >= 60`.
    pub is_good_day: bool,
    /// Short labels.
    pub tags: Vec<String>,
    /// Favourable findings.
    pub reasons: Vec<String>,
    /// Unfavourable findings and notes.
    pub warnings: Vec<String>,
}

#[derive(Default)]
struct Tally {
    score: i32,
    tags: Vec<String>,
    reasons: Vec<String>,
    warnings: Vec<String>,
}

impl Tally {
    fn plus(&mut self, delta: i32, reason: String) {
        self.score += delta;
        self.reasons.push(reason);
    }

    fn minus(&mut self, delta: i32, warning: String) {
        self.score -= delta;
        self.warnings.push(warning);
    }

    fn tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}

// ── Evaluator ────────────────────────────────────────────────────────────────

/// Scores days for activities.
///
/// Holds only configuration; evaluation itself is pure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayEvaluator {
    weights: ScoreWeights,
    tz: TimeZone,
}

impl Default for DayEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl DayEvaluator {
    /// Evaluator with the standard weights in Vietnam time.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::DEFAULT,
            tz: TimeZone::default(),
        }
    }

    /// Use different rule weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Resolve lunar dates in another time zone.
    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.tz = tz;
        self
    }

    /// Weights in use.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Evaluate `date` for `activity`.
    ///
    /// `owners` only counts when it holds exactly two people.
    pub fn evaluate(
        &self,
        date: SolarDate,
        activity: ActivityType,
        birth_year: Option<Year>,
        owners: &[Owner],
    ) -> DayEvaluationResult {
        let w = &self.weights;
        let lunar = solar_to_lunar(date, self.tz);
        let rule = rule_for(activity);
        let stars = stars_for_lunar(&lunar);
        let day = day_can_chi(lunar.jd);
        let day_label = day.label();

        let mut t = Tally {
            score: w.base,
            ..Tally::default()
        };

        let officer = stars.kien_tru;
        t.score += officer_score(officer.nature);
        if officer.nature.is_good() {
            t.tag(officer.name);
            t.reasons.push(format!("Trực {}: {}", officer.name, officer.keywords));
        } else if officer.nature.is_bad() {
            t.warnings.push(format!("Trực {}: Không thuận lợi", officer.name));
        }

        let lodge = stars.lodge;
        t.score += lodge_score(lodge.nature);
        if lodge.nature == Nature::VeryGood {
            t.tag(format!("Sao {}", lodge.name));
            t.reasons.push(format!("Sao {}: Cát tinh", lodge.name));
        } else if lodge.nature.is_bad() {
            t.warnings.push(format!("Sao {}: Hung tinh", lodge.name));
        }

        if rule.prefer_hoang_dao {
            if is_hoang_dao_day(day.chi) {
                t.tag("Hoàng Đạo");
                t.plus(w.hoang_dao, "Ngày Hoàng Đạo: Tốt cho mọi việc".into());
            } else {
                t.warnings.push("Ngày Hắc Đạo: Cần cẩn thận".into());
            }
        }

        if rule.good_chi.contains(&day.chi) {
            t.plus(
                w.good_chi,
                format!("Ngày {}: Phù hợp cho {}", day.chi, activity.phrase()),
            );
        }
        if rule.bad_chi.contains(&day.chi) {
            t.minus(
                -w.bad_chi,
                format!("Ngày {}: Không phù hợp cho {}", day.chi, activity.phrase()),
            );
        }

        if rule.good_can_chi.contains(&day) {
            t.tag(day_label.clone());
            t.plus(w.good_can_chi, format!("{day_label}: Ngày đại cát"));
        }
        if rule.bad_can_chi.contains(&day) {
            t.minus(-w.bad_can_chi, format!("{day_label}: Ngày cần tránh"));
        }

        if let Some(birth) = birth_year {
            self.apply_birth_year(&mut t, date, activity, birth, day.chi);
        }

        t.warnings.push(rule.note.into());

        if let [first, second] = owners {
            self.apply_owners(&mut t, date, activity, first, second, day.chi);
        }

        let score = clamp_score(t.score);
        debug!("{date} {activity:?}: raw {} -> {score}", t.score);
        DayEvaluationResult {
            date,
            activity,
            score,
            is_good_day: score >= GOOD_DAY_THRESHOLD,
            tags: t.tags,
            reasons: t.reasons,
            warnings: t.warnings,
        }
    }

    fn apply_birth_year(
        &self,
        t: &mut Tally,
        date: SolarDate,
        activity: ActivityType,
        birth: Year,
        day_chi: Chi,
    ) {
        let compat = age_compatible_with_day(birth, day_chi);
        match compat.relation {
            BranchRelation::TuHanhXung => {
                t.minus(30, format!("Ngày xung với tuổi {}", chi_from_year(birth)));
            }
            r if r.is_harmful() => {
                t.minus(15, format!("Ngày không hợp tuổi: {}", compat.description));
            }
            r if r.is_harmonious() => {
                t.plus(10, format!("Ngày hợp tuổi: {}", compat.description));
            }
            _ => {}
        }

        if activity.is_major() {
            if is_tam_tai_year(birth, date.year()) {
                t.tag("Năm Tam Tai");
                t.minus(
                    25,
                    "Năm Tam Tai: Không nên làm việc lớn như cưới hỏi, xây nhà".into(),
                );
            }
            if is_kim_lau_age_mod9(birth, date.year()) {
                t.tag("Tuổi Kim Lâu");
                t.minus(
                    20,
                    "Tuổi Kim Lâu: Cần cân nhắc kỹ trước khi làm việc lớn".into(),
                );
            }
        }
    }

    fn apply_owners(
        &self,
        t: &mut Tally,
        date: SolarDate,
        activity: ActivityType,
        first: &Owner,
        second: &Owner,
        day_chi: Chi,
    ) {
        for owner in [first, second] {
            match age_compatible_with_day(owner.birth_year, day_chi).relation {
                BranchRelation::TuHanhXung => {
                    t.minus(20, format!("Ngày xung với tuổi {}", owner.name));
                }
                r if r.is_harmful() => {
                    t.minus(10, format!("Ngày không hợp tuổi {}", owner.name));
                }
                r if r.is_harmonious() => {
                    t.plus(5, format!("Ngày hợp tuổi {}", owner.name));
                }
                _ => {}
            }
            if activity.is_major() {
                if is_tam_tai_year(owner.birth_year, date.year()) {
                    t.minus(15, format!("{}: Năm Tam Tai", owner.name));
                }
                if is_kim_lau_age_mod9(owner.birth_year, date.year()) {
                    t.minus(10, format!("{}: Tuổi Kim Lâu", owner.name));
                }
            }
        }

        let pair = age_compatibility(first.birth_year, second.birth_year);
        let names = format!("{} & {}", first.name, second.name);
        match pair.relation {
            BranchRelation::TamHop => {
                t.tag("Đôi Tam Hợp");
                t.plus(15, format!("{names}: Tam Hợp - Rất hợp nhau"));
            }
            BranchRelation::LucHop => {
                t.tag("Đôi Lục Hợp");
                t.plus(10, format!("{names}: Lục Hợp - Hợp nhau"));
            }
            BranchRelation::TuHanhXung => {
                t.tag("Đôi Xung");
                t.minus(20, format!("{names}: Tứ Hành Xung - Cần hóa giải"));
            }
            BranchRelation::TuongHinh | BranchRelation::TuongHai => {
                t.minus(10, format!("{names}: {}", pair.description));
            }
            BranchRelation::BinhHoa => {}
        }
    }

    /// Good days in a range, best first.
    ///
    /// Days are scanned in order and collection stops once `limit` days
    /// qualify, so later days in the range are never seen in that case.
    pub fn find_good_days(&self, options: &DaySearchOptions) -> Vec<DayEvaluationResult> {
        let mut results = Vec::new();
        for date in options.from.iter_to(options.to) {
            if results.len() >= options.limit {
                break;
            }
            let eval = self.evaluate(date, options.activity, options.birth_year, &options.owners);
            if eval.score >= options.min_score {
                results.push(eval);
            }
        }
        // stable: equal scores keep date order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(options.limit);
        debug!(
            "find_good_days {:?} {}..{}: {} found",
            options.activity,
            options.from,
            options.to,
            results.len()
        );
        results
    }

    /// Nearest good day from `from`, looking at most `max_days` ahead.
    ///
    /// Returns at once on a day scoring at least [`EXCELLENT_SCORE`];
    /// otherwise returns the best good day once one has been found and a
    /// week has been checked.
    pub fn suggest_next_good_day(
        &self,
        activity: ActivityType,
        from: SolarDate,
        birth_year: Option<Year>,
        max_days: u32,
    ) -> Option<DayEvaluationResult> {
        let mut best: Option<DayEvaluationResult> = None;
        for checked in 0..max_days {
            let eval = self.evaluate(from.add_days(checked as i64), activity, birth_year, &[]);
            if !eval.is_good_day {
                continue;
            }
            if best.as_ref().map_or(true, |b| eval.score > b.score) {
                if eval.score >= EXCELLENT_SCORE {
                    return Some(eval);
                }
                best = Some(eval);
            }
            if checked >= SUGGEST_GRACE_DAYS {
                return best;
            }
        }
        best
    }
}

// ── Search options ───────────────────────────────────────────────────────────

/// Parameters of a good-day search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySearchOptions {
    /// Activity.
    pub activity: ActivityType,
    /// First day, inclusive.
    pub from: SolarDate,
    /// Last day, inclusive.
    pub to: SolarDate,
    /// Birth year of the person the day is for.
    pub birth_year: Option<Year>,
    /// Two owners whose ages are checked against each day and each other.
    pub owners: Vec<Owner>,
    /// Minimum score to keep a day.
    pub min_score: i32,
    /// Maximum number of days returned.
    pub limit: usize,
}

/// Builder for [`DaySearchOptions`].
#[derive(Debug, Clone)]
pub struct DaySearchBuilder {
    activity: ActivityType,
    from: SolarDate,
    to: SolarDate,
    birth_year: Option<Year>,
    owners: Vec<Owner>,
    min_score: i32,
    limit: usize,
}

impl DaySearchBuilder {
    /// Begin a search over `from..=to`.
    pub fn new(activity: ActivityType, from: SolarDate, to: SolarDate) -> Self {
        Self {
            activity,
            from,
            to,
            birth_year: None,
            owners: Vec::new(),
            min_score: GOOD_DAY_THRESHOLD,
            limit: 30,
        }
    }

    /// Check days against this birth year.
    pub fn with_birth_year(mut self, year: Year) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Check days against two owners.
    pub fn with_owners(mut self, owners: Vec<Owner>) -> Self {
        self.owners = owners;
        self
    }

    /// Keep days scoring at least `score`.
    pub fn with_min_score(mut self, score: i32) -> Self {
        self.min_score = score;
        self
    }

    /// Return at most `limit` days.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Validate and build the options.
    pub fn build(self) -> Result<DaySearchOptions> {
        if self.from.is_null() || self.to.is_null() {
            return Err(Error::InvalidArgument("search range uses a null date".into()));
        }
        if self.from > self.to {
            return Err(Error::InvalidArgument(format!(
                "search start {} is after end {}",
                self.from, self.to
            )));
        }
        if self.limit == 0 {
            return Err(Error::InvalidArgument("limit must be positive".into()));
        }
        Ok(DaySearchOptions {
            activity: self.activity,
            from: self.from,
            to: self.to,
            birth_year: self.birth_year,
            owners: self.owners,
            min_score: self.min_score,
            limit: self.limit,
        })
    }
}

// ── Free functions ───────────────────────────────────────────────────────────

/// Evaluate `date` for `activity` with the standard evaluator.
pub fn evaluate_day_for_activity(
    date: SolarDate,
    activity: ActivityType,
    birth_year: Option<Year>,
    owners: &[Owner],
) -> DayEvaluationResult {
    DayEvaluator::new().evaluate(date, activity, birth_year, owners)
}

/// Good days matching `options`, best first.
pub fn find_good_days(options: &DaySearchOptions) -> Vec<DayEvaluationResult> {
    DayEvaluator::new().find_good_days(options)
}

/// Nearest good day for `activity` starting at `from`.
pub fn suggest_next_good_day(
    activity: ActivityType,
    from: SolarDate,
    birth_year: Option<Year>,
    max_days: u32,
) -> Option<DayEvaluationResult> {
    DayEvaluator::new().suggest_next_good_day(activity, from, birth_year, max_days)
}
