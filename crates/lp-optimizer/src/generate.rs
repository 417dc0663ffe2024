//! Suggestion generation — bridging each anchor holiday to the nearest
//! weekend.
//!
//! Anchors are processed in chronological order.  A claimed-date
//! accumulator is threaded through the walk so that a date claimed by an
//! earlier anchor is unavailable to every later one
//! (earliest-anchor-wins).  Generation for a single anchor is a pure
//! function of the anchor, the holiday-date set, and the accumulator,
//! which keeps it independently testable.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use lp_holidays::Holiday;

use crate::suggestion::Suggestion;

/// Dates already claimed by previously processed anchors.
pub type ClaimedDays = BTreeSet<NaiveDate>;

/// Generate all candidate leave periods for `anchors`, which must be
/// sorted chronologically (the collector guarantees this).
pub fn generate(anchors: &[Holiday]) -> Vec<Suggestion> {
    let holiday_dates: BTreeSet<NaiveDate> = anchors.iter().map(|h| h.date).collect();
    let mut claimed = ClaimedDays::new();
    let mut suggestions = Vec::new();

    for holiday in anchors {
        let fresh = suggestions_for_anchor(holiday, &holiday_dates, &claimed);
        for suggestion in &fresh {
            claimed.extend(suggestion.leave_days.iter().copied());
        }
        suggestions.extend(fresh);
    }

    suggestions
}

/// Generate the candidates of a single anchor: at most one bridging left
/// toward the previous weekend and one bridging right toward the next.
///
/// If neither side has an eligible weekday, a single zero-leave-day
/// placeholder is emitted so the holiday stays visible to bridging and
/// reporting without costing budget.
pub fn suggestions_for_anchor(
    holiday: &Holiday,
    holiday_dates: &BTreeSet<NaiveDate>,
    claimed: &ClaimedDays,
) -> Vec<Suggestion> {
    let left = eligible_days(left_window(holiday.date), holiday, holiday_dates, claimed);
    let right = eligible_days(right_window(holiday.date), holiday, holiday_dates, claimed);

    let mut suggestions = Vec::new();
    if !left.is_empty() {
        suggestions.push(Suggestion::for_anchor(holiday, left));
    }
    if !right.is_empty() {
        suggestions.push(Suggestion::for_anchor(holiday, right));
    }
    if suggestions.is_empty() {
        suggestions.push(Suggestion::for_anchor(holiday, Vec::new()));
    }
    suggestions
}

/// Weekdays strictly between the Monday of `anchor`'s week and `anchor`:
/// `[Monday ..= anchor - 1]`.  Empty when the anchor is a Monday; at most
/// four dates (Friday anchor).
fn left_window(anchor: NaiveDate) -> Vec<NaiveDate> {
    let offset = anchor.weekday().num_days_from_monday() as i64;
    let monday = anchor - Duration::days(offset);
    (0..offset).map(|i| monday + Duration::days(i)).collect()
}

/// Weekdays strictly between `anchor` and the weekend:
/// `[anchor + 1 ..= Friday]`.  Empty when the anchor is a Friday; at most
/// four dates (Monday anchor).
fn right_window(anchor: NaiveDate) -> Vec<NaiveDate> {
    let offset = anchor.weekday().num_days_from_monday() as i64;
    let friday_offset = Weekday::Fri.num_days_from_monday() as i64;
    (1..=friday_offset - offset)
        .map(|i| anchor + Duration::days(i))
        .collect()
}

/// Keep only dates that can actually be claimed: inside the anchor's
/// calendar year, not claimed by an earlier anchor, and not themselves a
/// holiday.
fn eligible_days(
    window: Vec<NaiveDate>,
    holiday: &Holiday,
    holiday_dates: &BTreeSet<NaiveDate>,
    claimed: &ClaimedDays,
) -> Vec<NaiveDate> {
    window
        .into_iter()
        .filter(|d| d.year() == holiday.date.year())
        .filter(|d| !claimed.contains(d))
        .filter(|d| !holiday_dates.contains(d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holiday(y: i32, m: u32, d: u32) -> Holiday {
        Holiday::new(date(y, m, d), "test")
    }

    #[test]
    fn windows_for_a_wednesday() {
        // 2025-06-04 is a Wednesday
        let anchor = date(2025, 6, 4);
        assert_eq!(left_window(anchor), vec![date(2025, 6, 2), date(2025, 6, 3)]);
        assert_eq!(
            right_window(anchor),
            vec![date(2025, 6, 5), date(2025, 6, 6)]
        );
    }

    #[test]
    fn monday_has_no_left_window_friday_no_right() {
        let monday = date(2025, 6, 2);
        assert!(left_window(monday).is_empty());
        assert_eq!(right_window(monday).len(), 4);

        let friday = date(2025, 6, 6);
        assert_eq!(left_window(friday).len(), 4);
        assert!(right_window(friday).is_empty());
    }

    #[test]
    fn midweek_anchor_yields_two_suggestions() {
        let anchors = vec![holiday(2025, 6, 4)];
        let suggestions = generate(&anchors);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(
            suggestions[0].leave_days,
            vec![date(2025, 6, 2), date(2025, 6, 3)]
        );
        assert_eq!(
            suggestions[1].leave_days,
            vec![date(2025, 6, 5), date(2025, 6, 6)]
        );
    }

    #[test]
    fn year_boundary_truncates_windows() {
        // 2025-01-01 is a Wednesday; Mon/Tue of that week are in 2024
        let suggestions = generate(&[holiday(2025, 1, 1)]);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].leave_days,
            vec![date(2025, 1, 2), date(2025, 1, 3)]
        );
    }

    #[test]
    fn december_anchor_never_spills_into_next_year() {
        // 2025-12-30 is a Tuesday
        let suggestions = generate(&[holiday(2025, 12, 30)]);
        for s in &suggestions {
            for d in &s.leave_days {
                assert_eq!(d.year(), 2025, "{d} spills outside 2025");
            }
        }
    }

    #[test]
    fn earlier_anchor_wins_shared_dates() {
        // Wed Jan 1 claims Thu Jan 2 + Fri Jan 3... except Jan 2 is itself
        // a holiday, so Jan 1 claims only Jan 3, and Jan 2's windows come
        // up empty (Jan 1 is a holiday, Jan 3 already claimed).
        let anchors = vec![holiday(2025, 1, 1), holiday(2025, 1, 2)];
        let suggestions = generate(&anchors);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].leave_days, vec![date(2025, 1, 3)]);
        assert!(suggestions[1].leave_days.is_empty());
        assert_eq!(suggestions[1].anchor, date(2025, 1, 2));
    }

    #[test]
    fn holiday_dates_are_never_claimed() {
        // Two holidays in the same week: Tue Jun 3 and Thu Jun 5
        let anchors = vec![holiday(2025, 6, 3), holiday(2025, 6, 5)];
        let suggestions = generate(&anchors);
        let all_claimed: Vec<NaiveDate> = suggestions
            .iter()
            .flat_map(|s| s.leave_days.iter().copied())
            .collect();
        assert!(!all_claimed.contains(&date(2025, 6, 3)));
        assert!(!all_claimed.contains(&date(2025, 6, 5)));
    }

    #[test]
    fn claimed_days_are_unique_across_suggestions() {
        let anchors = vec![
            holiday(2025, 5, 1), // Thursday
            holiday(2025, 5, 29), // Thursday (Ascension)
            holiday(2025, 6, 6), // Friday
        ];
        let suggestions = generate(&anchors);
        let mut seen = BTreeSet::new();
        for s in &suggestions {
            for d in &s.leave_days {
                assert!(seen.insert(*d), "{d} claimed twice");
            }
        }
    }
}
