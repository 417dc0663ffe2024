//! The optimization pipeline: collect → generate → rank → select →
//! bridge.
//!
//! [`optimize_holidays`] is the pure core — a synchronous, allocation-only
//! transformation with no I/O and no shared state, safe to call
//! concurrently for independent requests.  [`Optimizer`] wraps it together
//! with a [`HolidaySource`] for callers that want the data fetch handled.

use chrono::{Local, NaiveDate};
use lp_core::errors::Result;
use lp_core::{ensure, DayCount};
use lp_holidays::{collect_anchors, CollectorOptions, Holiday, HolidaySource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bridge::bridge;
use crate::generate::generate;
use crate::rank::Ranker;
use crate::strategy::{distinct_leave_days, select, StrategyKind};
use crate::suggestion::Suggestion;

/// Parameters of one optimization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// Calendar year to plan.
    pub year: i32,
    /// ISO country code for the holiday lookup.
    pub country: String,
    /// Paid-leave days available to spend.
    pub budget: DayCount,
    /// Strategy key from the fixed catalog.
    pub strategy: StrategyKind,
    /// Drop holidays that are already in the past.
    pub skip_past: bool,
    /// Let `Optional` / `Observance` holidays act as anchors.
    pub include_informal: bool,
    /// Language for localized holiday names, when the source supports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl OptimizeRequest {
    /// A request with the common defaults: skip past dates, formal
    /// holidays only, no localization.
    pub fn new(year: i32, country: impl Into<String>, budget: DayCount, strategy: StrategyKind) -> Self {
        OptimizeRequest {
            year,
            country: country.into(),
            budget,
            strategy,
            skip_past: true,
            include_informal: false,
            language: None,
        }
    }
}

/// The outcome of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Final suggestions, bridged and ordered by anchor date.
    pub suggestions: Vec<Suggestion>,
    /// The anchors the plan was built from (post-collection).
    pub holidays: Vec<Holiday>,
    /// Budget left over, or the unresolved deficit when negative.
    pub remaining_days: DayCount,
}

/// Run the full pipeline over an already-fetched holiday list.
///
/// `today` only matters when `request.skip_past` is set.  This function
/// never fails: edge conditions (empty input, non-positive budget,
/// year-boundary anchors) degrade gracefully into an empty or
/// deficit-carrying [`Plan`].
pub fn optimize_holidays(
    holidays: Vec<Holiday>,
    today: NaiveDate,
    request: &OptimizeRequest,
) -> Plan {
    let options = CollectorOptions {
        include_informal: request.include_informal,
        skip_before: request.skip_past.then_some(today),
    };
    let anchors = collect_anchors(holidays, &options);
    debug!(year = request.year, anchors = anchors.len(), "collected anchors");

    let mut suggestions = generate(&anchors);
    debug!(candidates = suggestions.len(), "generated candidates");

    let strategy = request.strategy.strategy();
    Ranker::new(strategy.weights).rank_all(&mut suggestions);

    let deficit = request.budget - distinct_leave_days(&suggestions);
    let (selected, remaining) = select(strategy.policy, suggestions, deficit);
    debug!(
        strategy = strategy.label,
        deficit, remaining, kept = selected.len(), "selection done"
    );

    let (bridged, remaining) = bridge(selected, remaining);
    debug!(remaining, periods = bridged.len(), "bridging done");

    Plan {
        suggestions: bridged,
        holidays: anchors,
        remaining_days: remaining,
    }
}

/// Pipeline façade bound to a holiday-data source.
#[derive(Debug)]
pub struct Optimizer<S: HolidaySource> {
    source: S,
}

impl<S: HolidaySource> Optimizer<S> {
    /// Create an optimizer over `source`.
    pub fn new(source: S) -> Self {
        Optimizer { source }
    }

    /// Fetch holidays for the requested year and run the pipeline.
    ///
    /// Fails only at the boundary: an unreasonable year, or a source
    /// failure (surfaced as [`lp_core::Error::Source`]).
    pub fn optimize(&self, request: &OptimizeRequest) -> Result<Plan> {
        ensure!(
            (1900..=2200).contains(&request.year),
            "year {} out of supported range [1900, 2200]",
            request.year
        );
        let holidays = self.source.holidays_for_year(
            request.year,
            &request.country,
            request.language.as_deref(),
        )?;
        let today = Local::now().date_naive();
        Ok(optimize_holidays(holidays, today, request))
    }
}
