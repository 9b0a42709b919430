//! Scalar values and their type tags.
//!
//! [`Scalar`] is the closed set of value types a record field can hold;
//! [`ScalarKind`] is the matching type tag carried by field descriptors.
//! Comparison is defined only within a kind: predicates use the partial
//! order (IEEE semantics for floats, so `NaN` never matches), sorting uses
//! the total order (`total_cmp` for floats).

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single typed field value, produced by a record accessor or the coercer.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean value.
    Bool(bool),
    /// 8-bit signed integer.
    I8(i8),
    /// 16-bit signed integer.
    I16(i16),
    /// 32-bit signed integer.
    I32(i32),
    /// 64-bit signed integer.
    I64(i64),
    /// 8-bit unsigned integer.
    U8(u8),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// Fixed-point decimal.
    Decimal(Decimal),
    /// UUID.
    Uuid(Uuid),
    /// Calendar date without time or offset.
    Date(NaiveDate),
    /// Date and time with a UTC offset.
    DateTime(DateTime<FixedOffset>),
    /// UTF-8 string.
    Str(String),
}

/// Type tag for a [`Scalar`]; the declared type of a scalar field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ScalarKind {
    /// Boolean.
    Bool,
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Fixed-point decimal.
    Decimal,
    /// UUID.
    Uuid,
    /// Calendar date.
    Date,
    /// Date and time with offset.
    DateTime,
    /// UTF-8 string.
    Str,
}

impl Scalar {
    /// The type tag of this value.
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::U8(_) => ScalarKind::U8,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Uuid(_) => ScalarKind::Uuid,
            Self::Date(_) => ScalarKind::Date,
            Self::DateTime(_) => ScalarKind::DateTime,
            Self::Str(_) => ScalarKind::Str,
        }
    }

    /// Compare two scalars of the same kind.
    ///
    /// Returns `None` for mismatched kinds and for float comparisons
    /// involving `NaN`; predicate operators treat `None` as "no match".
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::I8(a), Self::I8(b)) => Some(a.cmp(b)),
            (Self::I16(a), Self::I16(b)) => Some(a.cmp(b)),
            (Self::I32(a), Self::I32(b)) => Some(a.cmp(b)),
            (Self::I64(a), Self::I64(b)) => Some(a.cmp(b)),
            (Self::U8(a), Self::U8(b)) => Some(a.cmp(b)),
            (Self::F32(a), Self::F32(b)) => a.partial_cmp(b),
            (Self::F64(a), Self::F64(b)) => a.partial_cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => Some(a.cmp(b)),
            (Self::Uuid(a), Self::Uuid(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::DateTime(a), Self::DateTime(b)) => Some(a.cmp(b)),
            (Self::Str(a), Self::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Total order for use as a sort key.
    ///
    /// Floats fall back to [`f64::total_cmp`]-style ordering so the
    /// comparator stays total in the presence of `NaN`; mismatched kinds
    /// order by their type tag.
    #[must_use]
    pub fn cmp_total(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::F32(a), Self::F32(b)) => a.total_cmp(b),
            (Self::F64(a), Self::F64(b)) => a.total_cmp(b),
            _ => self
                .compare(other)
                .unwrap_or_else(|| self.kind().cmp(&other.kind())),
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Str => "string",
        };
        f.write_str(name)
    }
}
