//! OData-style filter and ordering expressions over typed record sequences.
//!
//! Two small expression languages, each compiled against a record shape
//! registered through [`sift_core`]:
//!
//! 1. **Filter**: tokenize → recursive-descent parse → predicate compile.
//! 2. **Ordering**: clause parse → composed key-comparator compile.
//!
//! The usual entry point is the [`SiftExt`] extension trait, which applies
//! both directly to a `Vec` of records:
//!
//! ```
//! use sift_core::{
//!     FieldDescriptor, FieldType, FieldValue, Fields, Record, Scalar, ScalarKind, Shape,
//! };
//! use sift_expr::SiftExt;
//!
//! struct City {
//!     name: String,
//!     population: i64,
//! }
//!
//! static CITY_SHAPE: Shape = Shape {
//!     name: "City",
//!     fields: &[
//!         FieldDescriptor {
//!             name: "Name",
//!             index: 0,
//!             ty: FieldType::Scalar { kind: ScalarKind::Str, nullable: false },
//!         },
//!         FieldDescriptor {
//!             name: "Population",
//!             index: 1,
//!             ty: FieldType::Scalar { kind: ScalarKind::I64, nullable: false },
//!         },
//!     ],
//! };
//!
//! impl Fields for City {
//!     fn field(&self, index: usize) -> FieldValue<'_> {
//!         match index {
//!             0 => FieldValue::Scalar(Scalar::Str(self.name.clone())),
//!             1 => FieldValue::Scalar(Scalar::I64(self.population)),
//!             _ => FieldValue::Null,
//!         }
//!     }
//! }
//!
//! impl Record for City {
//!     const SHAPE: &'static Shape = &CITY_SHAPE;
//! }
//!
//! let cities = vec![
//!     City { name: "Lyon".to_owned(), population: 522_000 },
//!     City { name: "Lille".to_owned(), population: 236_000 },
//!     City { name: "Nice".to_owned(), population: 342_000 },
//! ];
//!
//! let large = cities
//!     .filter("Name startswith 'L' and Population gt 300000")
//!     .unwrap();
//! assert_eq!(large.len(), 1);
//! assert_eq!(large[0].name, "Lyon");
//! ```

pub mod ext;
pub mod filter;
pub mod ordering;

#[cfg(test)]
pub(crate) mod testutil;

pub use ext::SiftExt;
pub use filter::{
    ComparisonOp, FilterExpr, LogicalOp, Predicate, Token, TokenKind, compile_filter,
    parse_filter, tokenize,
};
pub use ordering::{KeyOrdering, OrderingClause, compile_ordering, parse_ordering};

// The core introspection surface, re-exported so most consumers depend on
// this crate alone.
pub use sift_core::{
    Error, FieldDescriptor, FieldType, FieldValue, Fields, Record, Result, Scalar, ScalarKind,
    Shape, StringOp,
};
