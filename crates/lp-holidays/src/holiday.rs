//! `Holiday` and `HolidayKind` — the immutable input records of the
//! optimizer.
//!
//! A holiday carries a calendar date, its display name(s), and one or more
//! classifications.  Classification follows the convention of public
//! holiday APIs: `Public`, `Bank`, and `School` are formal days off,
//! `Authorities` closes government offices only, and `Optional` /
//! `Observance` are informal festivities without a guaranteed paid day
//! off.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Classification of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HolidayKind {
    /// Nationwide public holiday.
    Public,
    /// Banks and offices are closed.
    Bank,
    /// Schools are closed.
    School,
    /// Government authorities are closed.
    Authorities,
    /// The majority of people take a day off, but it is not mandated.
    Optional,
    /// Optional festivity, no paid day off.
    Observance,
}

impl HolidayKind {
    /// Return `true` for the informal kinds (`Optional`, `Observance`)
    /// that do not guarantee a paid day off.
    pub fn is_informal(&self) -> bool {
        matches!(self, HolidayKind::Optional | HolidayKind::Observance)
    }
}

impl std::fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HolidayKind::Public => "Public",
            HolidayKind::Bank => "Bank",
            HolidayKind::School => "School",
            HolidayKind::Authorities => "Authorities",
            HolidayKind::Optional => "Optional",
            HolidayKind::Observance => "Observance",
        };
        write!(f, "{name}")
    }
}

/// A single holiday entry for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// English display name.
    pub name: String,
    /// Localized display name, when the data source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    /// Classifications; most holidays carry exactly one.
    pub kinds: Vec<HolidayKind>,
}

impl Holiday {
    /// Create a public holiday with the given date and name.
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Holiday {
            date,
            name: name.into(),
            local_name: None,
            kinds: vec![HolidayKind::Public],
        }
    }

    /// Replace the classification list.
    pub fn with_kinds(mut self, kinds: Vec<HolidayKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Attach a localized display name.
    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }

    /// Return `true` if the holiday falls on a Saturday or Sunday.
    pub fn falls_on_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return `true` if every classification is informal
    /// (`Optional` / `Observance`).
    pub fn is_informal(&self) -> bool {
        !self.kinds.is_empty() && self.kinds.iter().all(HolidayKind::is_informal)
    }

    /// The calendar year the holiday belongs to.
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekend_detection() {
        // 2025-01-04 is a Saturday, 2025-01-05 a Sunday
        assert!(Holiday::new(date(2025, 1, 4), "x").falls_on_weekend());
        assert!(Holiday::new(date(2025, 1, 5), "x").falls_on_weekend());
        assert!(!Holiday::new(date(2025, 1, 6), "x").falls_on_weekend());
    }

    #[test]
    fn informal_requires_all_kinds_informal() {
        let h = Holiday::new(date(2025, 6, 6), "National Day")
            .with_kinds(vec![HolidayKind::Observance, HolidayKind::Public]);
        assert!(!h.is_informal());

        let h = h.with_kinds(vec![HolidayKind::Observance, HolidayKind::Optional]);
        assert!(h.is_informal());
    }

    #[test]
    fn serializes_camel_case() {
        let h = Holiday::new(date(2025, 12, 25), "Christmas Day").with_local_name("Juldagen");
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("\"localName\":\"Juldagen\""));
        assert!(json.contains("\"2025-12-25\""));
    }
}
