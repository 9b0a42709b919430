//! Record shapes: the introspection surface the expression pipeline walks.
//!
//! A [`Shape`] is a pre-registered, static description of a record type's
//! fields. Field lookup is case-insensitive; field *access* is index-based
//! through the dyn-safe [`Fields`] trait, so a path is resolved to
//! descriptors once at compile time and evaluated without any name lookups.

use crate::scalar::{Scalar, ScalarKind};

/// Describes one record type: a name plus its ordered field descriptors.
///
/// Shapes are declared as statics so descriptors stay pointer-identical
/// across every resolution for the process lifetime.
#[derive(Debug)]
pub struct Shape {
    /// Type name used in diagnostics.
    pub name: &'static str,
    /// Field descriptors in accessor-index order.
    pub fields: &'static [FieldDescriptor],
}

impl Shape {
    /// Look up a field by name, case-insensitively.
    #[must_use]
    pub fn field(&'static self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    /// Cheap identity for cache keys: the address of the static shape.
    #[must_use]
    pub fn id(&'static self) -> ShapeId {
        ShapeId(std::ptr::from_ref(self) as usize)
    }
}

/// Identity of a registered shape, usable as a cache key component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(usize);

/// One field of a shape: name, declared type, and index-based accessor.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Position handed to [`Fields::field`] to read this field's value.
    pub index: usize,
    /// Declared type of the field.
    pub ty: FieldType,
}

/// Declared type of a field.
#[derive(Debug, Clone, Copy)]
pub enum FieldType {
    /// A scalar-valued field.
    Scalar {
        /// The scalar kind.
        kind: ScalarKind,
        /// Whether the field can be null.
        nullable: bool,
    },
    /// A nested record field; dotted paths descend through it.
    Nested {
        /// Shape of the nested record.
        shape: &'static Shape,
        /// Whether the nested record can be null.
        nullable: bool,
    },
}

/// A field value handed out by a record accessor.
pub enum FieldValue<'a> {
    /// A present scalar value.
    Scalar(Scalar),
    /// A present nested record.
    Nested(&'a dyn Fields),
    /// An absent value.
    Null,
}

/// Dyn-safe, index-based field access over a record.
pub trait Fields {
    /// Read the field at `index`, as declared by the record's shape.
    ///
    /// Indexes outside the shape are never produced by resolved paths;
    /// implementations conventionally answer [`FieldValue::Null`] for them.
    fn field(&self, index: usize) -> FieldValue<'_>;
}

/// A record type bound to a statically registered [`Shape`].
///
/// # Examples
///
/// ```
/// use sift_core::{
///     FieldDescriptor, FieldType, FieldValue, Fields, Record, Scalar, ScalarKind, Shape,
/// };
///
/// struct City {
///     name: String,
///     population: i64,
/// }
///
/// static CITY_SHAPE: Shape = Shape {
///     name: "City",
///     fields: &[
///         FieldDescriptor {
///             name: "Name",
///             index: 0,
///             ty: FieldType::Scalar { kind: ScalarKind::Str, nullable: false },
///         },
///         FieldDescriptor {
///             name: "Population",
///             index: 1,
///             ty: FieldType::Scalar { kind: ScalarKind::I64, nullable: false },
///         },
///     ],
/// };
///
/// impl Fields for City {
///     fn field(&self, index: usize) -> FieldValue<'_> {
///         match index {
///             0 => FieldValue::Scalar(Scalar::Str(self.name.clone())),
///             1 => FieldValue::Scalar(Scalar::I64(self.population)),
///             _ => FieldValue::Null,
///         }
///     }
/// }
///
/// impl Record for City {
///     const SHAPE: &'static Shape = &CITY_SHAPE;
/// }
///
/// let field = City::SHAPE.field("population").unwrap();
/// assert_eq!(field.index, 1);
/// ```
pub trait Record: Fields + Send + Sync + 'static {
    /// The shape describing this record's fields.
    const SHAPE: &'static Shape;
}
