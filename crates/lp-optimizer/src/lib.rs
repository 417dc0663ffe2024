//! # lp-optimizer
//!
//! The leaveplan optimization pipeline: suggestion generation, ranking,
//! strategy-driven selection, and bridging.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekend extensions, same-anchor merges, and paid gap fills.
pub mod bridge;

/// Candidate generation around anchor holidays.
pub mod generate;

/// Pipeline entry points.
pub mod optimizer;

/// Multi-factor scoring.
pub mod rank;

/// Strategy catalog and budget-fitting selection.
pub mod strategy;

/// The `Suggestion` candidate type.
pub mod suggestion;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bridge::bridge;
pub use generate::{generate, suggestions_for_anchor, ClaimedDays};
pub use optimizer::{optimize_holidays, OptimizeRequest, Optimizer, Plan};
pub use rank::{Ranker, RankingWeights};
pub use strategy::{distinct_leave_days, select, SelectionPolicy, Strategy, StrategyKind};
pub use suggestion::Suggestion;
