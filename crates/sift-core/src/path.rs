//! Dotted property-path resolution with a process-wide cache.
//!
//! A dotted path such as `Address.City` is resolved against a root shape
//! into an ordered descriptor chain. Resolutions are cached by
//! `(shape identity, exact path string)` for the process lifetime: entries
//! are never evicted, and every successful lookup for the same key observes
//! the same `Arc` allocation. Misses are deterministic and cheap, so they
//! are recomputed rather than cached.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::scalar::{Scalar, ScalarKind};
use crate::shape::{FieldDescriptor, FieldType, FieldValue, Fields, Shape, ShapeId};

/// A dotted path resolved against a root shape: the descriptor chain plus
/// the scalar leaf's metadata.
#[derive(Debug)]
pub struct ResolvedPath {
    steps: Vec<&'static FieldDescriptor>,
    leaf_kind: ScalarKind,
    leaf_nullable: bool,
}

impl ResolvedPath {
    /// Descriptors from root to leaf. Never empty.
    #[must_use]
    pub fn steps(&self) -> &[&'static FieldDescriptor] {
        &self.steps
    }

    /// Scalar kind of the final descriptor.
    #[must_use]
    pub fn leaf_kind(&self) -> ScalarKind {
        self.leaf_kind
    }

    /// Whether the final descriptor is nullable.
    #[must_use]
    pub fn leaf_nullable(&self) -> bool {
        self.leaf_nullable
    }

    /// Walk the accessor chain over a record.
    ///
    /// Returns `None` when the leaf, or any nested record along the way,
    /// is null.
    #[must_use]
    pub fn get(&self, record: &dyn Fields) -> Option<Scalar> {
        let (leaf, inner) = self.steps.split_last()?;
        let mut current = record;
        for step in inner {
            match current.field(step.index) {
                FieldValue::Nested(next) => current = next,
                _ => return None,
            }
        }
        match current.field(leaf.index) {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

type PathKey = (ShapeId, Box<str>);

static PATH_CACHE: LazyLock<DashMap<PathKey, Arc<ResolvedPath>>> =
    LazyLock::new(DashMap::new);

/// Resolve `dotted` against `shape`, consulting the process-wide cache.
///
/// Segment lookup is case-insensitive; nullability of intermediate fields
/// is transparent for lookup, while the leaf keeps its own nullability for
/// coercion. Identical `(shape, path)` inputs share a single cached
/// resolution: under a concurrent first-time race the work may be done
/// twice, but one value wins and every reader observes it.
///
/// # Errors
///
/// Returns [`Error::PropertyNotFound`] when a segment matches no field of
/// the shape being walked, and [`Error::TypeMismatch`] when a non-final
/// segment names a scalar field or the final segment names a nested record.
pub fn resolve_path(shape: &'static Shape, dotted: &str) -> Result<Arc<ResolvedPath>> {
    let key = (shape.id(), Box::from(dotted));
    if let Some(hit) = PATH_CACHE.get(&key) {
        return Ok(Arc::clone(&hit));
    }

    let resolved = Arc::new(resolve_uncached(shape, dotted)?);
    debug!(shape = shape.name, path = dotted, "resolved property path");

    // First writer wins; a racing resolver computed the same descriptors.
    Ok(Arc::clone(&PATH_CACHE.entry(key).or_insert(resolved)))
}

fn resolve_uncached(root: &'static Shape, dotted: &str) -> Result<ResolvedPath> {
    let mut segments = dotted.split('.');
    let mut segment = segments.next().unwrap_or_default();
    let mut current = root;
    let mut steps = Vec::new();

    loop {
        let descriptor = current
            .field(segment)
            .ok_or_else(|| Error::PropertyNotFound {
                segment: segment.to_owned(),
                shape: current.name,
            })?;
        steps.push(descriptor);

        match segments.next() {
            Some(next) => {
                let FieldType::Nested { shape, .. } = descriptor.ty else {
                    return Err(Error::TypeMismatch {
                        message: format!(
                            "cannot descend into scalar field '{segment}' on {shape}",
                            shape = current.name
                        ),
                    });
                };
                current = shape;
                segment = next;
            }
            None => {
                return match descriptor.ty {
                    FieldType::Scalar { kind, nullable } => Ok(ResolvedPath {
                        steps,
                        leaf_kind: kind,
                        leaf_nullable: nullable,
                    }),
                    FieldType::Nested { shape, .. } => Err(Error::TypeMismatch {
                        message: format!(
                            "path '{dotted}' resolves to nested record {name}, not a scalar value",
                            name = shape.name
                        ),
                    }),
                };
            }
        }
    }
}
