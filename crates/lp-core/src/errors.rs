//! Error types for leaveplan.
//!
//! The optimization pipeline itself is total over well-formed input and
//! never returns an error; the variants here cover the boundaries around
//! it — request validation, strategy-key parsing, and the external
//! holiday-data collaborator.

use thiserror::Error;

/// The top-level error type used throughout leaveplan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range year, malformed date input).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument supplied by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A strategy key that is not part of the fixed catalog.
    #[error("unknown strategy: {0:?}")]
    UnknownStrategy(String),

    /// The external holiday-data source failed or returned unusable data.
    #[error("holiday source error: {0}")]
    Source(String),
}

/// Shorthand `Result` type used throughout leaveplan.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use lp_core::ensure;
/// fn budget(days: i32) -> lp_core::errors::Result<i32> {
///     ensure!(days < 366, "budget {days} exceeds a calendar year");
///     Ok(days)
/// }
/// assert!(budget(25).is_ok());
/// assert!(budget(400).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Source(...))` immediately.
///
/// # Example
/// ```
/// use lp_core::fail;
/// fn no_data() -> lp_core::errors::Result<()> {
///     fail!("no holiday data loaded");
/// }
/// assert!(no_data().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Source(format!($($msg)*)))
    };
}
