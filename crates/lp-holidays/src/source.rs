//! `HolidaySource` — the seam to the external holiday-data collaborator.
//!
//! The optimizer itself never performs I/O; callers hand it a source that
//! resolves (year, country[, language]) to a holiday list.  Real
//! deployments back this with an HTTP client or a database; the bundled
//! [`StaticHolidaySource`] serves tests and demos from an in-memory map.

use std::collections::HashMap;

use lp_core::errors::Result;
use lp_core::fail;

use crate::holiday::Holiday;

/// Provider of holiday data for a given year and country.
///
/// Implementations must convert their own failure modes (lookup
/// unavailable, malformed payloads) into [`lp_core::Error::Source`] before
/// the data reaches the optimization pipeline.
pub trait HolidaySource: std::fmt::Debug + Send + Sync {
    /// Return all holidays of `country` in `year`.
    ///
    /// `language` selects localized display names where the backing data
    /// supports them; sources without localization are free to ignore it.
    fn holidays_for_year(
        &self,
        year: i32,
        country: &str,
        language: Option<&str>,
    ) -> Result<Vec<Holiday>>;
}

/// An in-memory holiday source keyed by (country code, year).
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    data: HashMap<(String, i32), Vec<Holiday>>,
}

impl StaticHolidaySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the holiday list of `country` for `year`, replacing any
    /// previous registration.
    pub fn insert(&mut self, country: &str, year: i32, holidays: Vec<Holiday>) {
        self.data.insert((country.to_uppercase(), year), holidays);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, country: &str, year: i32, holidays: Vec<Holiday>) -> Self {
        self.insert(country, year, holidays);
        self
    }
}

impl HolidaySource for StaticHolidaySource {
    fn holidays_for_year(
        &self,
        year: i32,
        country: &str,
        _language: Option<&str>,
    ) -> Result<Vec<Holiday>> {
        match self.data.get(&(country.to_uppercase(), year)) {
            Some(holidays) => Ok(holidays.clone()),
            None => fail!("no holiday data for {country} in {year}"),
        }
    }
}
