//! `Suggestion` — a candidate leave period built around one anchor
//! holiday.
//!
//! A suggestion owns the ordered list of leave days it would claim from
//! the budget, plus a displayed `[start, end]` range.  The two can differ:
//! the generator widens the displayed range into an adjacent weekend for
//! free (see [`Suggestion::for_anchor`]), while the *core bounds* — the
//! extremes of the anchor date and the claimed days — stay untouched and
//! drive the weekday-sensitive logic in ranking and bridging.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use lp_core::Score;
use lp_holidays::{Holiday, HolidayKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A candidate leave period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Unique identifier, assigned at generation time.
    pub id: Uuid,
    /// English name of the anchor holiday.
    pub name: String,
    /// Classifications of the anchor holiday.
    pub kinds: Vec<HolidayKind>,
    /// Date of the anchor holiday.
    pub anchor: NaiveDate,
    /// Displayed period start (inclusive).
    pub start: NaiveDate,
    /// Displayed period end (inclusive).
    pub end: NaiveDate,
    /// The specific dates claimed from the leave budget, in chronological
    /// order.  Weekend dates only ever appear here when the bridger adds
    /// them (free extensions and paid gap fills).
    pub leave_days: Vec<NaiveDate>,
    /// Composite 0–100 score; zero until the ranker runs.
    pub score: Score,
}

impl Suggestion {
    /// Build a suggestion for `holiday` claiming exactly `leave_days`
    /// (which may be empty for a zero-cost placeholder).
    ///
    /// The displayed range is the min/max of the anchor date and the leave
    /// days, then widened for free at weekend boundaries: a Monday start is
    /// pulled back to the preceding Saturday and a Friday end pushed out to
    /// the following Sunday.  The widening never touches `leave_days`.
    pub fn for_anchor(holiday: &Holiday, leave_days: Vec<NaiveDate>) -> Self {
        let core_start = leave_days
            .iter()
            .copied()
            .chain(std::iter::once(holiday.date))
            .min()
            .unwrap_or(holiday.date);
        let core_end = leave_days
            .iter()
            .copied()
            .chain(std::iter::once(holiday.date))
            .max()
            .unwrap_or(holiday.date);

        let start = if core_start.weekday() == Weekday::Mon {
            core_start - Duration::days(2)
        } else {
            core_start
        };
        let end = if core_end.weekday() == Weekday::Fri {
            end_of_week_sunday(core_end)
        } else {
            core_end
        };

        Suggestion {
            id: Uuid::new_v4(),
            name: holiday.name.clone(),
            kinds: holiday.kinds.clone(),
            anchor: holiday.date,
            start,
            end,
            leave_days,
            score: 0.0,
        }
    }

    /// Number of calendar days the displayed range spans.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Number of leave days the suggestion claims from the budget.
    pub fn leave_count(&self) -> usize {
        self.leave_days.len()
    }

    /// Earliest occupied day: the minimum of the anchor date and the
    /// claimed days, ignoring the free display widening.
    pub fn core_start(&self) -> NaiveDate {
        self.leave_days
            .iter()
            .copied()
            .chain(std::iter::once(self.anchor))
            .min()
            .unwrap_or(self.anchor)
    }

    /// Latest occupied day, ignoring the free display widening.
    pub fn core_end(&self) -> NaiveDate {
        self.leave_days
            .iter()
            .copied()
            .chain(std::iter::once(self.anchor))
            .max()
            .unwrap_or(self.anchor)
    }

    /// Return `true` if the anchor lies strictly inside the occupied
    /// range, rather than at one of its edges.
    pub fn anchor_is_interior(&self) -> bool {
        self.core_start() < self.anchor && self.anchor < self.core_end()
    }
}

fn end_of_week_sunday(friday: NaiveDate) -> NaiveDate {
    debug_assert_eq!(friday.weekday(), Weekday::Fri);
    friday + Duration::days(2)
}
