//! Multi-factor suggestion scoring.
//!
//! Each suggestion gets eight sub-scores on a 0–100 scale; the composite
//! is their weighted sum under the active strategy's [`RankingWeights`],
//! rounded to two decimals.  Scoring stays data-driven: a new strategy
//! only contributes a weight row, never new scoring code.

use chrono::{Datelike, NaiveDate, Weekday};
use lp_core::Score;
use lp_holidays::HolidayKind;

use crate::suggestion::Suggestion;

/// Named weights for the eight scoring factors.
///
/// Weights are relative importances, not required to sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    /// Calendar days gained per leave day spent.
    pub efficiency: f64,
    /// Preference for comfortably long spans.
    pub duration: f64,
    /// Per-month desirability of the touched months.
    pub seasonality: f64,
    /// Contiguity of the claimed days.
    pub clustering: f64,
    /// Weekday of the period's first and last occupied days.
    pub week_position: f64,
    /// Preference for low-competition months.
    pub month_balance: f64,
    /// How little leave the span needs, and anchor placement.
    pub holiday_proximity: f64,
    /// Formality of the anchor holiday's classification.
    pub kind: f64,
}

/// Desirability of each month for actually being away (January, June,
/// July, and December are the favorites).
const SEASONALITY: [f64; 12] = [
    80.0, // Jan
    40.0, // Feb
    45.0, // Mar
    55.0, // Apr
    65.0, // May
    90.0, // Jun
    95.0, // Jul
    75.0, // Aug
    55.0, // Sep
    45.0, // Oct
    35.0, // Nov
    85.0, // Dec
];

/// Demand-side desirability: months where few people compete for leave
/// score high.  Deliberately independent of [`SEASONALITY`].
const MONTH_DEMAND: [f64; 12] = [
    40.0, // Jan
    85.0, // Feb
    80.0, // Mar
    60.0, // Apr
    55.0, // May
    35.0, // Jun
    30.0, // Jul
    40.0, // Aug
    70.0, // Sep
    80.0, // Oct
    90.0, // Nov
    35.0, // Dec
];

/// Scores suggestions under a fixed set of weights.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    weights: RankingWeights,
}

impl Ranker {
    /// Create a ranker with the given weights.
    pub fn new(weights: RankingWeights) -> Self {
        Ranker { weights }
    }

    /// Score every suggestion in place.
    pub fn rank_all(&self, suggestions: &mut [Suggestion]) {
        for suggestion in suggestions.iter_mut() {
            suggestion.score = self.score(suggestion);
        }
    }

    /// Composite score of one suggestion: the weighted sum of the eight
    /// sub-scores, rounded to two decimals.
    pub fn score(&self, s: &Suggestion) -> Score {
        let w = &self.weights;
        let total = w.efficiency * efficiency_score(s)
            + w.duration * duration_score(s)
            + w.seasonality * seasonality_score(s)
            + w.clustering * clustering_score(s)
            + w.week_position * week_position_score(s)
            + w.month_balance * month_balance_score(s)
            + w.holiday_proximity * holiday_proximity_score(s)
            + w.kind * kind_score(s);
        (total * 100.0).round() / 100.0
    }
}

// ── Sub-scores ────────────────────────────────────────────────────────────────

/// Calendar days spanned per leave day claimed; a ratio of 3 or more caps
/// at 100.  A zero-cost placeholder is maximally efficient.
fn efficiency_score(s: &Suggestion) -> f64 {
    if s.leave_count() == 0 {
        return 100.0;
    }
    let ratio = s.span_days() as f64 / s.leave_count() as f64;
    (ratio / 3.0 * 100.0).min(100.0)
}

/// Banded on the displayed span length; the sweet spot is one to two
/// weeks.
fn duration_score(s: &Suggestion) -> f64 {
    match s.span_days() {
        7..=14 => 100.0,
        5..=16 => 80.0,
        3..=18 => 60.0,
        n if n >= 2 => 40.0,
        _ => 20.0,
    }
}

/// Average seasonal desirability over every month the span touches.
fn seasonality_score(s: &Suggestion) -> f64 {
    let months = months_touched(s.start, s.end);
    let sum: f64 = months
        .iter()
        .map(|&m| SEASONALITY[(m - 1) as usize])
        .sum();
    sum / months.len() as f64
}

/// Based on the largest gap (in skipped days) between consecutive claimed
/// dates; a fragmented claim pattern decays with the average gap.
fn clustering_score(s: &Suggestion) -> f64 {
    if s.leave_count() < 2 {
        return 100.0;
    }
    let gaps: Vec<i64> = s
        .leave_days
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days() - 1)
        .collect();
    let max_gap = gaps.iter().copied().max().unwrap_or(0);
    match max_gap {
        0 => 100.0,
        1..=2 => 80.0,
        3..=7 => 60.0,
        _ => {
            let avg_gap = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;
            (60.0 - avg_gap * 2.0).max(20.0)
        }
    }
}

/// Bonuses and penalties for where the occupied period starts and ends
/// within the week.  Uses the core bounds so the free display widening
/// does not mask a Monday start or Friday end.
fn week_position_score(s: &Suggestion) -> f64 {
    let mut score: f64 = 50.0;
    match s.core_start().weekday() {
        Weekday::Mon => score += 25.0,
        Weekday::Fri => score += 20.0,
        Weekday::Tue | Weekday::Wed | Weekday::Thu => score -= 10.0,
        _ => {}
    }
    match s.core_end().weekday() {
        Weekday::Fri => score += 15.0,
        Weekday::Sun => score += 10.0,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => score -= 5.0,
        _ => {}
    }
    score.clamp(0.0, 100.0)
}

/// Demand-table desirability of the month the period starts in.
fn month_balance_score(s: &Suggestion) -> f64 {
    MONTH_DEMAND[(s.start.month() - 1) as usize]
}

/// How little leave the span needs relative to its length, plus a bonus
/// when the anchor sits strictly inside the span rather than at an edge.
fn holiday_proximity_score(s: &Suggestion) -> f64 {
    let mut score: f64 = 50.0;
    let used_fraction = if s.span_days() > 0 {
        s.leave_count() as f64 / s.span_days() as f64
    } else {
        1.0
    };
    score += match used_fraction {
        f if f <= 0.2 => 40.0,
        f if f <= 0.4 => 30.0,
        f if f <= 0.6 => 20.0,
        f if f <= 0.8 => 10.0,
        _ => 0.0,
    };
    if s.anchor_is_interior() {
        score += 10.0;
    }
    score.min(100.0)
}

/// Formal holidays are worth planning around; informal ones are not.
/// The best classification wins when a holiday carries several.
fn kind_score(s: &Suggestion) -> f64 {
    s.kinds
        .iter()
        .map(|k| match k {
            HolidayKind::Public | HolidayKind::Bank | HolidayKind::School => 100.0,
            HolidayKind::Authorities => 50.0,
            HolidayKind::Optional | HolidayKind::Observance => 0.0,
        })
        .fold(0.0, f64::max)
}

/// Distinct months (1–12) touched by `[start, end]`, in order.
fn months_touched(start: NaiveDate, end: NaiveDate) -> Vec<u32> {
    let mut months = Vec::new();
    let (mut y, mut m) = (start.year(), start.month());
    loop {
        months.push(m);
        if (y, m) == (end.year(), end.month()) {
            break;
        }
        m += 1;
        if m > 12 {
            m = 1;
            y += 1;
        }
    }
    months
}
