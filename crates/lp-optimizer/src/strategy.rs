//! The strategy catalog and budget-fitting selection.
//!
//! A strategy bundles a weight row for the ranker with a selection policy
//! for trimming the candidate set to the leave budget.  The catalog is a
//! fixed mapping from a closed key enumeration to `const` data records —
//! pure functions behind an enum, no dispatch hierarchy.

use std::collections::BTreeSet;
use std::collections::VecDeque;

use chrono::{Datelike, NaiveDate};
use lp_core::errors::{Error, Result};
use lp_core::DayCount;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rank::RankingWeights;
use crate::suggestion::Suggestion;

/// The closed set of strategy keys exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Highest score-to-days ratio overall.
    Optimal,
    /// Summer and holiday periods first.
    Seasonal,
    /// Maximum total days off.
    Aggressive,
    /// Rank only; never trims to fit the budget.
    Straight,
    /// Spread leave evenly across the year.
    Balanced,
    /// Blend of efficiency, duration, and season.
    Smart,
    /// Fewer but longer periods.
    LongVacations,
}

/// How the selector sheds candidates when over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Drop the lowest composite score first.
    Score,
    /// Drop by ascending efficiency-weighted score.
    Efficiency,
    /// Drop by ascending length-weighted score; long spans survive.
    Duration,
    /// Drop by an ascending blend of score, efficiency, and length.
    Smart,
    /// Round-robin the worst candidate out of each calendar quarter.
    Balanced,
    /// Never drop; an over-budget deficit passes through unresolved.
    Straight,
}

/// A catalog entry: metadata plus the data driving ranking and selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strategy {
    /// Catalog key.
    pub kind: StrategyKind,
    /// Human-readable label.
    pub label: &'static str,
    /// One-line description for strategy pickers.
    pub description: &'static str,
    /// Weight row applied by the ranker.
    pub weights: RankingWeights,
    /// Trimming behavior applied by the selector.
    pub policy: SelectionPolicy,
}

const CATALOG: [Strategy; 7] = [
    Strategy {
        kind: StrategyKind::Optimal,
        label: "Optimal",
        description: "Maximizes efficiency by selecting vacations with the highest score-to-days ratio",
        weights: RankingWeights {
            efficiency: 0.45,
            duration: 0.15,
            seasonality: 0.15,
            clustering: 0.15,
            week_position: 0.1,
            month_balance: 0.1,
            holiday_proximity: 0.1,
            kind: 0.1,
        },
        policy: SelectionPolicy::Score,
    },
    Strategy {
        kind: StrategyKind::Seasonal,
        label: "Seasonal",
        description: "Focuses on summer and holiday periods for maximum enjoyment",
        weights: RankingWeights {
            efficiency: 0.15,
            duration: 0.1,
            seasonality: 0.4,
            clustering: 0.1,
            week_position: 0.05,
            month_balance: 0.1,
            holiday_proximity: 0.1,
            kind: 0.1,
        },
        policy: SelectionPolicy::Score,
    },
    Strategy {
        kind: StrategyKind::Aggressive,
        label: "Aggressive",
        description: "Prioritizes maximum rest days by selecting the longest possible vacations",
        weights: RankingWeights {
            efficiency: 0.4,
            duration: 0.1,
            seasonality: 0.05,
            clustering: 0.15,
            week_position: 0.1,
            month_balance: 0.05,
            holiday_proximity: 0.15,
            kind: 0.1,
        },
        policy: SelectionPolicy::Efficiency,
    },
    Strategy {
        kind: StrategyKind::Straight,
        label: "Straight",
        description: "Simple approach that keeps every suggestion and reports any deficit as-is",
        weights: RankingWeights {
            efficiency: 0.25,
            duration: 0.15,
            seasonality: 0.15,
            clustering: 0.15,
            week_position: 0.1,
            month_balance: 0.1,
            holiday_proximity: 0.1,
            kind: 0.1,
        },
        policy: SelectionPolicy::Straight,
    },
    Strategy {
        kind: StrategyKind::Balanced,
        label: "Balance",
        description: "Distributes vacations evenly throughout the year for consistent rest",
        weights: RankingWeights {
            efficiency: 0.15,
            duration: 0.1,
            seasonality: 0.3,
            clustering: 0.1,
            week_position: 0.05,
            month_balance: 0.2,
            holiday_proximity: 0.1,
            kind: 0.3,
        },
        policy: SelectionPolicy::Balanced,
    },
    Strategy {
        kind: StrategyKind::Smart,
        label: "Smart",
        description: "Intelligently combines efficiency, duration, and seasonal preferences",
        weights: RankingWeights {
            efficiency: 0.2,
            duration: 0.2,
            seasonality: 0.15,
            clustering: 0.15,
            week_position: 0.1,
            month_balance: 0.1,
            holiday_proximity: 0.1,
            kind: 0.1,
        },
        policy: SelectionPolicy::Smart,
    },
    Strategy {
        kind: StrategyKind::LongVacations,
        label: "Long Vacations",
        description: "Prefers fewer but longer vacation periods for extended relaxation",
        weights: RankingWeights {
            efficiency: 0.15,
            duration: 0.35,
            seasonality: 0.2,
            clustering: 0.2,
            week_position: 0.05,
            month_balance: 0.05,
            holiday_proximity: 0.0,
            kind: 0.1,
        },
        policy: SelectionPolicy::Duration,
    },
];

impl StrategyKind {
    /// Every catalog key, in catalog order.
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Optimal,
        StrategyKind::Seasonal,
        StrategyKind::Aggressive,
        StrategyKind::Straight,
        StrategyKind::Balanced,
        StrategyKind::Smart,
        StrategyKind::LongVacations,
    ];

    /// The stable string key used in request parameters.
    pub fn key(&self) -> &'static str {
        match self {
            StrategyKind::Optimal => "optimal",
            StrategyKind::Seasonal => "seasonal",
            StrategyKind::Aggressive => "aggressive",
            StrategyKind::Straight => "straight",
            StrategyKind::Balanced => "balanced",
            StrategyKind::Smart => "smart",
            StrategyKind::LongVacations => "long_vacations",
        }
    }

    /// Parse a request parameter into a catalog key (case-insensitive).
    ///
    /// This is the gate that keeps unknown strategy keys out of the
    /// pipeline.
    pub fn from_key(key: &str) -> Result<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.key() == normalized)
            .ok_or_else(|| Error::UnknownStrategy(key.to_string()))
    }

    /// Resolve the key to its catalog entry.
    pub fn strategy(&self) -> &'static Strategy {
        match self {
            StrategyKind::Optimal => &CATALOG[0],
            StrategyKind::Seasonal => &CATALOG[1],
            StrategyKind::Aggressive => &CATALOG[2],
            StrategyKind::Straight => &CATALOG[3],
            StrategyKind::Balanced => &CATALOG[4],
            StrategyKind::Smart => &CATALOG[5],
            StrategyKind::LongVacations => &CATALOG[6],
        }
    }
}

impl Strategy {
    /// The full read-only catalog, for enumeration by callers.
    pub fn catalog() -> &'static [Strategy] {
        &CATALOG
    }
}

// ── Selection ────────────────────────────────────────────────────────────────

/// Count the distinct leave days claimed across `suggestions`.
pub fn distinct_leave_days(suggestions: &[Suggestion]) -> DayCount {
    let days: BTreeSet<NaiveDate> = suggestions
        .iter()
        .flat_map(|s| s.leave_days.iter().copied())
        .collect();
    days.len() as DayCount
}

/// Trim `suggestions` until `remaining` (budget minus distinct claimed
/// days) is no longer negative, per `policy`.
///
/// Every removal credits the removed suggestion's claimed-day count back
/// to the running deficit.  Returns the surviving suggestions in their
/// original order and the final remaining count — negative when nothing
/// removable was left, which is an explicit unresolved-deficit signal
/// rather than a fault.
pub fn select(
    policy: SelectionPolicy,
    suggestions: Vec<Suggestion>,
    remaining: DayCount,
) -> (Vec<Suggestion>, DayCount) {
    if remaining >= 0 || policy == SelectionPolicy::Straight {
        return (suggestions, remaining);
    }
    match policy {
        SelectionPolicy::Balanced => select_balanced(suggestions, remaining),
        _ => select_by_metric(policy, suggestions, remaining),
    }
}

/// Raw span-per-leave-day ratio used by the removal metrics; zero for a
/// placeholder that claims nothing.
fn raw_efficiency(s: &Suggestion) -> f64 {
    if s.leave_count() == 0 {
        return 0.0;
    }
    s.span_days() as f64 / s.leave_count() as f64
}

fn removal_metric(policy: SelectionPolicy, s: &Suggestion) -> f64 {
    let duration = s.leave_count() as f64;
    match policy {
        SelectionPolicy::Efficiency => raw_efficiency(s) * s.score / 100.0,
        SelectionPolicy::Duration => duration * s.score / 100.0,
        SelectionPolicy::Smart => 0.4 * s.score + 20.0 * raw_efficiency(s) + 5.0 * duration,
        _ => s.score,
    }
}

fn select_by_metric(
    policy: SelectionPolicy,
    suggestions: Vec<Suggestion>,
    remaining: DayCount,
) -> (Vec<Suggestion>, DayCount) {
    let mut order: Vec<(Uuid, f64)> = suggestions
        .iter()
        .map(|s| (s.id, removal_metric(policy, s)))
        .collect();
    order.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut result = suggestions;
    let mut deficit = -remaining;
    for (id, _) in order {
        if deficit <= 0 {
            break;
        }
        remove_by_id(&mut result, id, &mut deficit);
    }
    (result, -deficit)
}

/// Balanced trimming: group by calendar quarter of the start date, sort
/// each quarter worst-first, and remove round-robin so no quarter absorbs
/// all the cuts.
fn select_balanced(
    suggestions: Vec<Suggestion>,
    remaining: DayCount,
) -> (Vec<Suggestion>, DayCount) {
    let mut quarters: [Vec<(Uuid, f64)>; 4] = Default::default();
    for s in &suggestions {
        let quarter = ((s.start.month() - 1) / 3) as usize;
        quarters[quarter].push((s.id, s.score));
    }
    let mut queues: [VecDeque<Uuid>; 4] = Default::default();
    for (quarter, queue) in quarters.iter_mut().zip(queues.iter_mut()) {
        quarter.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        queue.extend(quarter.iter().map(|(id, _)| *id));
    }

    let mut result = suggestions;
    let mut deficit = -remaining;
    while deficit > 0 {
        let mut removed = false;
        for queue in queues.iter_mut() {
            if deficit <= 0 {
                break;
            }
            if let Some(id) = queue.pop_front() {
                remove_by_id(&mut result, id, &mut deficit);
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
    (result, -deficit)
}

fn remove_by_id(result: &mut Vec<Suggestion>, id: Uuid, deficit: &mut DayCount) {
    if let Some(pos) = result.iter().position(|s| s.id == id) {
        *deficit -= result[pos].leave_count() as DayCount;
        result.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_holidays::Holiday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn suggestion(anchor: NaiveDate, leave: Vec<NaiveDate>, score: f64) -> Suggestion {
        let mut s = Suggestion::for_anchor(&Holiday::new(anchor, "test"), leave);
        s.score = score;
        s
    }

    fn days(anchor: NaiveDate, count: i64) -> Vec<NaiveDate> {
        (1..=count)
            .map(|i| anchor + chrono::Duration::days(i))
            .collect()
    }

    #[test]
    fn catalog_keys_roundtrip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_key(kind.key()).unwrap(), kind);
            assert_eq!(kind.strategy().kind, kind);
        }
        assert!(StrategyKind::from_key("frugal").is_err());
        assert_eq!(
            StrategyKind::from_key("  OPTIMAL ").unwrap(),
            StrategyKind::Optimal
        );
    }

    #[test]
    fn non_negative_remaining_passes_through() {
        let input = vec![suggestion(date(2025, 6, 3), days(date(2025, 6, 3), 2), 50.0)];
        let (kept, remaining) = select(SelectionPolicy::Score, input.clone(), 0);
        assert_eq!(kept, input);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn straight_never_removes() {
        let input = vec![
            suggestion(date(2025, 6, 3), days(date(2025, 6, 3), 2), 10.0),
            suggestion(date(2025, 9, 2), days(date(2025, 9, 2), 3), 90.0),
        ];
        let (kept, remaining) = select(SelectionPolicy::Straight, input.clone(), -4);
        assert_eq!(kept.len(), 2);
        assert_eq!(remaining, -4);
    }

    #[test]
    fn score_policy_sheds_lowest_score_first() {
        let weak = suggestion(date(2025, 2, 4), days(date(2025, 2, 4), 1), 20.0);
        let strong = suggestion(date(2025, 7, 8), days(date(2025, 7, 8), 3), 90.0);
        let (kept, remaining) = select(SelectionPolicy::Score, vec![weak, strong.clone()], -1);
        assert_eq!(kept, vec![strong]);
        assert_eq!(remaining, 0);
    }

    #[test]
    fn removal_can_overshoot_into_surplus() {
        let only = suggestion(date(2025, 7, 8), days(date(2025, 7, 8), 3), 50.0);
        let (kept, remaining) = select(SelectionPolicy::Score, vec![only], -1);
        assert!(kept.is_empty());
        // removed 3 days against a deficit of 1 → 2 days come back
        assert_eq!(remaining, 2);
    }

    #[test]
    fn unresolvable_deficit_stays_negative() {
        let only = suggestion(date(2025, 7, 8), days(date(2025, 7, 8), 1), 50.0);
        let (kept, remaining) = select(SelectionPolicy::Score, vec![only], -5);
        assert!(kept.is_empty());
        assert_eq!(remaining, -4);
    }

    #[test]
    fn duration_policy_preserves_long_spans() {
        // Same score; the short one has the lower duration metric
        let short = suggestion(date(2025, 2, 4), days(date(2025, 2, 4), 1), 60.0);
        let long = suggestion(date(2025, 7, 8), days(date(2025, 7, 8), 4), 60.0);
        let (kept, _) = select(
            SelectionPolicy::Duration,
            vec![short, long.clone()],
            -1,
        );
        assert_eq!(kept, vec![long]);
    }

    #[test]
    fn balanced_policy_spreads_cuts_across_quarters() {
        // Two weak Q1 suggestions and one weak Q3 suggestion; a deficit of
        // 2 must not fall entirely on Q1.
        let q1_a = suggestion(date(2025, 1, 7), days(date(2025, 1, 7), 1), 10.0);
        let q1_b = suggestion(date(2025, 2, 4), days(date(2025, 2, 4), 1), 15.0);
        let q3 = suggestion(date(2025, 7, 8), days(date(2025, 7, 8), 1), 12.0);
        let (kept, remaining) = select(
            SelectionPolicy::Balanced,
            vec![q1_a, q1_b.clone(), q3],
            -2,
        );
        assert_eq!(remaining, 0);
        assert_eq!(kept, vec![q1_b]);
    }

    #[test]
    fn balanced_policy_pops_worst_of_each_quarter_first() {
        let worst = suggestion(date(2025, 1, 7), days(date(2025, 1, 7), 1), 5.0);
        let better = suggestion(date(2025, 2, 4), days(date(2025, 2, 4), 1), 50.0);
        let (kept, _) = select(
            SelectionPolicy::Balanced,
            vec![better.clone(), worst],
            -1,
        );
        assert_eq!(kept, vec![better]);
    }

    #[test]
    fn distinct_leave_days_ignores_duplicates() {
        let a = suggestion(date(2025, 6, 3), vec![date(2025, 6, 4)], 0.0);
        let b = suggestion(date(2025, 6, 10), vec![date(2025, 6, 4)], 0.0);
        assert_eq!(distinct_leave_days(&[a, b]), 1);
    }
}
