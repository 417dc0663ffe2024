//! Anchor collection — the first stage of the pipeline.
//!
//! Filters a raw holiday list down to the dates that can anchor a leave
//! period: weekend holidays buy nothing and are dropped, informal
//! (`Optional` / `Observance`) holidays are dropped unless the caller opts
//! in, and past dates can be skipped so the planner never proposes leave
//! that has already elapsed.

use chrono::NaiveDate;

use crate::holiday::Holiday;

/// Caller configuration for [`collect_anchors`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectorOptions {
    /// Keep holidays whose classifications are all informal
    /// (`Optional` / `Observance`).  Off by default.
    pub include_informal: bool,
    /// When set, drop holidays strictly before this date.
    pub skip_before: Option<NaiveDate>,
}

impl CollectorOptions {
    /// Options that keep every weekday holiday regardless of kind or date.
    pub fn keep_all() -> Self {
        CollectorOptions {
            include_informal: true,
            skip_before: None,
        }
    }
}

/// Reduce `holidays` to the subset usable as anchors, sorted
/// chronologically.
///
/// The sort matters: suggestion generation walks anchors in date order and
/// resolves window conflicts earliest-anchor-wins.
pub fn collect_anchors(holidays: Vec<Holiday>, options: &CollectorOptions) -> Vec<Holiday> {
    let mut anchors: Vec<Holiday> = holidays
        .into_iter()
        .filter(|h| !h.falls_on_weekend())
        .filter(|h| options.include_informal || !h.is_informal())
        .filter(|h| match options.skip_before {
            Some(today) => h.date >= today,
            None => true,
        })
        .collect();
    anchors.sort_by_key(|h| h.date);
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn drops_weekend_holidays() {
        // 2025-01-05 is a Sunday
        let holidays = vec![
            Holiday::new(date(2025, 1, 1), "New Year's Day"),
            Holiday::new(date(2025, 1, 5), "Twelfth Night"),
        ];
        let anchors = collect_anchors(holidays, &CollectorOptions::default());
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].date, date(2025, 1, 1));
    }

    #[test]
    fn informal_holidays_need_opt_in() {
        let holidays = vec![
            Holiday::new(date(2025, 4, 30), "Walpurgis Night")
                .with_kinds(vec![HolidayKind::Observance]),
            Holiday::new(date(2025, 5, 1), "May Day"),
        ];

        let strict = collect_anchors(holidays.clone(), &CollectorOptions::default());
        assert_eq!(strict.len(), 1);

        let lenient = collect_anchors(holidays, &CollectorOptions::keep_all());
        assert_eq!(lenient.len(), 2);
    }

    #[test]
    fn skip_before_drops_past_dates_only() {
        let holidays = vec![
            Holiday::new(date(2025, 1, 1), "New Year's Day"),
            Holiday::new(date(2025, 6, 6), "National Day"),
        ];
        let options = CollectorOptions {
            skip_before: Some(date(2025, 3, 1)),
            ..CollectorOptions::default()
        };
        let anchors = collect_anchors(holidays, &options);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].name, "National Day");
    }

    #[test]
    fn anchors_come_out_sorted() {
        let holidays = vec![
            Holiday::new(date(2025, 12, 25), "Christmas Day"),
            Holiday::new(date(2025, 1, 6), "Epiphany"),
            Holiday::new(date(2025, 6, 6), "National Day"),
        ];
        let anchors = collect_anchors(holidays, &CollectorOptions::default());
        let dates: Vec<_> = anchors.iter().map(|h| h.date).collect();
        assert_eq!(
            dates,
            vec![date(2025, 1, 6), date(2025, 6, 6), date(2025, 12, 25)]
        );
    }
}
