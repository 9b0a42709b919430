//! Error types for the sift pipeline.

use crate::scalar::ScalarKind;

/// Errors produced while parsing or compiling filter and ordering inputs.
///
/// All failures are deterministic and raised at parse/compile time, before
/// any record is evaluated. Each variant carries the offending fragment with
/// the caller's original spelling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A path segment did not match any field of the shape being walked.
    #[error("property '{segment}' not found on {shape}")]
    PropertyNotFound {
        /// The segment as the caller wrote it.
        segment: String,
        /// Name of the shape that was searched.
        shape: &'static str,
    },

    /// An ordering clause carried an unrecognized direction word.
    #[error("invalid ordering direction '{0}' (expected asc, ascending, desc, or descending)")]
    InvalidDirection(String),

    /// The filter input violated the grammar.
    #[error("invalid filter syntax at token {at}: expected {expected}, found {found}")]
    InvalidSyntax {
        /// What the parser was looking for.
        expected: String,
        /// The offending lexeme as written.
        found: String,
        /// Token position at which the problem was discovered.
        at: usize,
    },

    /// A `null` literal was compared against a field that cannot hold null.
    #[error("null is not assignable to non-nullable {target}")]
    NullNotAssignable {
        /// The target scalar kind.
        target: ScalarKind,
    },

    /// A literal could not be converted to the field's declared kind.
    #[error("cannot convert '{value}' to {target}")]
    CoerceFailed {
        /// The literal as written.
        value: String,
        /// The target scalar kind.
        target: ScalarKind,
    },

    /// An operation was applied to a field of an incompatible type.
    #[error("type mismatch: {message}")]
    TypeMismatch {
        /// Explanation naming the path and types involved.
        message: String,
    },
}

/// Convenience result type for sift operations.
pub type Result<T> = std::result::Result<T, Error>;
