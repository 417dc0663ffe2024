//! Final bridging pass: weekend extensions, same-anchor merges, and
//! paid gap fills.
//!
//! Runs once over the selected suggestions in anchor order, building a new
//! sequence rather than splicing in place.  Weekend extensions are free;
//! gap fills consume leftover budget, first come first filled in scan
//! order.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use lp_core::DayCount;

use crate::suggestion::Suggestion;

/// Extend and merge `suggestions` (ordered by anchor date) using free
/// weekend days and up to `remaining` budget days for gap fills.
///
/// Returns the merged list and the updated remaining budget, which stays
/// negative when the selector could not resolve the original deficit.
pub fn bridge(suggestions: Vec<Suggestion>, remaining: DayCount) -> (Vec<Suggestion>, DayCount) {
    let mut remaining = remaining;
    let mut out: Vec<Suggestion> = Vec::with_capacity(suggestions.len());

    for mut current in suggestions {
        extend_monday_start(&mut current, out.last());
        extend_friday_end(&mut current);

        if let Some(previous) = out.last_mut() {
            // A left and right candidate of the same holiday meet again
            // here; fold the later one into the earlier.
            if previous.anchor == current.anchor {
                previous.end = current.end;
                previous.leave_days.extend(current.leave_days);
                continue;
            }

            let gap = (current.start - previous.end).num_days() - 1;
            if gap > 0 && gap as DayCount <= remaining {
                let fill: Vec<NaiveDate> = (1..=gap)
                    .map(|i| previous.end + Duration::days(i))
                    .collect();
                current.start = fill[0];
                let mut merged_days = fill;
                merged_days.extend(current.leave_days);
                current.leave_days = merged_days;
                remaining -= gap as DayCount;
            }
        }

        out.push(current);
    }

    (out, remaining)
}

/// A period whose first occupied day is a Monday also owns the weekend
/// before it — unless the previous period already claims that Sunday.
fn extend_monday_start(current: &mut Suggestion, previous: Option<&Suggestion>) {
    let core_start = current.core_start();
    if core_start.weekday() != Weekday::Mon {
        return;
    }
    let saturday = core_start - Duration::days(2);
    let sunday = core_start - Duration::days(1);
    let overlaps = previous.is_some_and(|p| p.leave_days.contains(&sunday));
    if overlaps {
        // The generator widens a Monday start into the weekend for
        // display; undo that here, the weekend belongs to the previous
        // period.
        current.start = core_start;
    } else {
        current.leave_days.insert(0, sunday);
        current.leave_days.insert(0, saturday);
        current.start = saturday;
    }
}

/// A period whose last occupied day is a Friday runs through the weekend
/// after it.
fn extend_friday_end(current: &mut Suggestion) {
    let core_end = current.core_end();
    if core_end.weekday() != Weekday::Fri {
        return;
    }
    current.leave_days.push(core_end + Duration::days(1));
    current.leave_days.push(core_end + Duration::days(2));
    current.end = core_end + Duration::days(2);
}
