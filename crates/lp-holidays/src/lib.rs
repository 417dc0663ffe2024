//! # lp-holidays
//!
//! Holiday domain types, the holiday-data source seam, and anchor
//! collection for leaveplan.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Anchor collection (weekend / informal / past-date filtering).
pub mod collector;

/// `Holiday` and `HolidayKind` types.
pub mod holiday;

/// `HolidaySource` trait and the in-memory implementation.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use collector::{collect_anchors, CollectorOptions};
pub use holiday::{Holiday, HolidayKind};
pub use source::{HolidaySource, StaticHolidaySource};
