//! Filtering and ordering applied directly to record sequences.

use sift_core::{Record, Result};

use crate::filter::{compile_filter, parse_filter};
use crate::ordering::{compile_ordering, parse_ordering};

/// Filter and ordering operations over a record sequence.
///
/// Blank input (empty or whitespace-only) is the no-op form of both
/// operations and returns the sequence unchanged, so optional request
/// parameters can be passed straight through without conditional logic.
/// The canonical composition is [`filter`](Self::filter) followed by
/// [`order_by`](Self::order_by).
pub trait SiftExt<R: Record>: Sized {
    /// Keep the records matching `filter`, preserving their relative
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`sift_core::Error`] variants raised while parsing or
    /// compiling the filter; the sequence is never partially filtered.
    fn filter(self, filter: &str) -> Result<Self>;

    /// Stable-sort the records by `ordering`, first clause primary.
    ///
    /// # Errors
    ///
    /// Returns [`sift_core::Error`] variants raised while parsing or
    /// compiling the ordering; the sequence is never partially sorted.
    fn order_by(self, ordering: &str) -> Result<Self>;
}

impl<R: Record> SiftExt<R> for Vec<R> {
    fn filter(mut self, filter: &str) -> Result<Self> {
        if filter.trim().is_empty() {
            return Ok(self);
        }
        let expr = parse_filter(filter)?;
        let predicate = compile_filter::<R>(&expr)?;
        self.retain(|record| predicate.test(record));
        Ok(self)
    }

    fn order_by(mut self, ordering: &str) -> Result<Self> {
        if ordering.trim().is_empty() {
            return Ok(self);
        }
        let clauses = parse_ordering(ordering)?;
        if clauses.is_empty() {
            return Ok(self);
        }
        let compiled = compile_ordering::<R>(&clauses)?;
        compiled.sort(&mut self);
        Ok(self)
    }
}
