//! # leaveplan
//!
//! Recommends how to spend a limited budget of paid-leave days to
//! maximize contiguous time off, given a country's public holidays for a
//! year.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `lp-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use leaveplan::holidays::Holiday;
//! use leaveplan::optimizer::{optimize_holidays, OptimizeRequest, StrategyKind};
//!
//! let holidays = vec![
//!     Holiday::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), "New Year's Day"),
//!     Holiday::new(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(), "National Day"),
//! ];
//!
//! let mut request = OptimizeRequest::new(2025, "SE", 25, StrategyKind::Optimal);
//! request.skip_past = false;
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! let plan = optimize_holidays(holidays, today, &request);
//! assert!(!plan.suggestions.is_empty());
//! assert!(plan.remaining_days >= 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lp_core as core;

/// Holiday domain types, data-source seam, and anchor collection.
pub use lp_holidays as holidays;

/// The optimization pipeline: generation, ranking, selection, bridging.
pub use lp_optimizer as optimizer;
