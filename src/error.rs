use thiserror::Error;

/// Convenience result type for the fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the algorithms in this crate.
///
/// Every fallible operation validates its arguments up front and reports a
/// violation through this type before touching the input. Internal invariant
/// violations are defects, checked with debug assertions rather than surfaced
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument violated the operation's contract: an empty input where a
    /// non-empty one is required, a rank outside `1..=len`, a malformed grid.
    /// The message names the constraint that failed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
