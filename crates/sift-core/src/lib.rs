//! Record introspection, scalar values, path resolution, and literal
//! coercion shared by the sift expression pipeline.
//!
//! This crate provides the foundational building blocks the filter and
//! ordering compilers in `sift-expr` are built on:
//!
//! - [`Shape`] / [`Record`]: pre-registered descriptions of a record type's
//!   fields, with case-insensitive lookup and index-based accessors.
//! - [`resolve_path`]: dotted-path resolution over shapes, cached for the
//!   process lifetime.
//! - [`Scalar`] / [`ScalarKind`]: the closed set of field value types.
//! - [`coerce`]: conversion of literal lexemes into scalars.
//! - [`Error`]: the unified error type for the whole pipeline.

mod coerce;
mod error;
mod ops;
mod path;
mod scalar;
mod shape;

pub use coerce::coerce;
pub use error::{Error, Result};
pub use ops::{StringOp, StringOpHandle, string_op};
pub use path::{ResolvedPath, resolve_path};
pub use scalar::{Scalar, ScalarKind};
pub use shape::{FieldDescriptor, FieldType, FieldValue, Fields, Record, Shape, ShapeId};
