//! Composed key ordering over record sequences.
//!
//! Each clause resolves to a sort key; records compare clause by clause in
//! declared order, so the first clause is the primary key and every later
//! clause only breaks remaining ties. Application uses the standard
//! library's stable sort: records tying on every clause keep their input
//! order.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use sift_core::{Record, ResolvedPath, Result, Scalar, resolve_path};

use super::parser::OrderingClause;

/// A compiled ordering over records of type `R`.
#[derive(Debug)]
pub struct KeyOrdering<R> {
    keys: Vec<SortKey>,
    _record: PhantomData<fn(&R)>,
}

#[derive(Debug)]
struct SortKey {
    path: Arc<ResolvedPath>,
    descending: bool,
}

/// Compile ordering clauses against the shape of `R`.
///
/// # Errors
///
/// Returns [`sift_core::Error::PropertyNotFound`] for clause paths that do
/// not resolve and [`sift_core::Error::TypeMismatch`] for paths ending in
/// a nested record rather than a scalar sort key.
pub fn compile_ordering<R: Record>(clauses: &[OrderingClause]) -> Result<KeyOrdering<R>> {
    let mut keys = Vec::with_capacity(clauses.len());
    for clause in clauses {
        let path = resolve_path(R::SHAPE, &clause.path)?;
        keys.push(SortKey {
            path,
            descending: clause.descending,
        });
    }
    debug!(shape = R::SHAPE.name, clauses = keys.len(), "compiled ordering");
    Ok(KeyOrdering {
        keys,
        _record: PhantomData,
    })
}

impl<R: Record> KeyOrdering<R> {
    /// Compare two records clause by clause; the first clause is primary.
    #[must_use]
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        for key in &self.keys {
            let ordering = compare_keys(key.path.get(a).as_ref(), key.path.get(b).as_ref());
            let ordering = if key.descending {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable-sort records in place. An empty clause list leaves the input
    /// untouched.
    pub fn sort(&self, records: &mut [R]) {
        if self.keys.is_empty() {
            return;
        }
        records.sort_by(|a, b| self.compare(a, b));
    }
}

/// Absent values order before present ones; present values use the scalar
/// total order.
fn compare_keys(a: Option<&Scalar>, b: Option<&Scalar>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp_total(b),
    }
}
