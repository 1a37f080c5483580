//! Error types shared by every operation of the crate.
//!
//! All operations are pure: an error means the call produced no usable
//! result, and nothing is retried or partially applied.

/// Errors raised by collection operations and chain dispatch.
///
/// # Examples
///
/// ```rust
/// use lowbar::Error;
///
/// let error = Error::UnknownOperation("explode".to_string());
/// assert_eq!(format!("{error}"), "unknown operation `explode`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument had the wrong shape, e.g. a leaf where a collection is required.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The chain wrapper was asked to dispatch a name missing from the operation table.
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    /// A dispatched operation received fewer arguments than it requires.
    #[error("{operation}: expected at least {expected} argument(s), found {found}")]
    Arity {
        /// The dispatched operation.
        operation: &'static str,
        /// The minimum number of arguments, including the chained value.
        expected: usize,
        /// The number of arguments supplied, including the chained value.
        found: usize,
    },
}

impl Error {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
