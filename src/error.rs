//! Error type shared by every module of the crate.
//!
//! Four kinds of failure exist:
//!
//! - [`Error::InvalidArgument`]: a precondition on a supplied argument failed
//!   (shape, arity, a zero where a non-zero count is required, ...).
//! - [`Error::TypeMismatch`]: a value of the wrong kind or family was produced,
//!   most notably a `flat_map` callback that did not return a context of the
//!   expected family.
//! - [`Error::Raised`]: a failure raised by user code inside a callback.
//!   `Either` and `EitherWriter` capture it into their `Left` state; every other
//!   context lets it propagate.
//! - [`Error::TransformUnsupported`]: a conversion between two context families
//!   that has no declared mapping.
//!
//! # Examples
//!
//! ```rust
//! use bindery::Error;
//!
//! let raised = Error::raised("missing @");
//! assert_eq!(raised.to_string(), "missing @");
//!
//! let invalid = Error::invalid_argument("ary", "arity must be non-zero");
//! assert_eq!(invalid.to_string(), "ary: invalid argument: arity must be non-zero");
//! ```

use crate::context::Family;

/// Errors produced by contexts and by the binding engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A precondition on an argument failed at the call boundary.
    #[error("{operation}: invalid argument: {message}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// What was wrong with it.
        message: String,
    },
    /// A value had the wrong kind or belonged to the wrong context family.
    #[error("{operation}: expected {expected}, found {found}")]
    TypeMismatch {
        /// The operation that performed the check.
        operation: &'static str,
        /// What the operation accepts.
        expected: String,
        /// What it received instead.
        found: String,
    },
    /// A failure raised by user code inside a callback.
    #[error("{0}")]
    Raised(String),
    /// No conversion is declared between the two families.
    #[error("cannot transform {origin} into {target}: no mapping exists")]
    TransformUnsupported {
        /// The family being converted.
        origin: Family,
        /// The requested family.
        target: Family,
    },
}

impl Error {
    /// Creates an [`Error::Raised`] carrying the given message.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }

    /// Creates an [`Error::InvalidArgument`] for `operation`.
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    /// Creates an [`Error::TypeMismatch`] for `operation`.
    pub fn type_mismatch(
        operation: &'static str,
        expected: impl std::fmt::Display,
        found: impl std::fmt::Display,
    ) -> Self {
        Self::TypeMismatch {
            operation,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an [`Error::TransformUnsupported`].
    pub const fn transform_unsupported(origin: Family, target: Family) -> Self {
        Self::TransformUnsupported { origin, target }
    }

    /// Returns `true` for failures raised inside a callback.
    pub const fn is_raised(&self) -> bool {
        matches!(self, Self::Raised(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
