//! # lp-core
//!
//! Core types, aliases, and error definitions for leaveplan.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace — primitive type aliases and the error
//! type with its `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ────────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A composite 0–100 score produced by the ranker.
pub type Score = f64;

/// A signed count of leave days.  Negative values represent an unresolved
/// deficit against the requested budget.
pub type DayCount = i32;

/// A calendar year.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
