//! Literal-to-scalar coercion.
//!
//! Converts a lexeme (a raw literal string, already unquoted and unescaped
//! by the tokenizer) into a [`Scalar`] of a field's declared kind. All
//! numeric and temporal parsing is invariant: radix-10 digits, `.` as the
//! decimal separator, ISO-8601 dates, RFC 3339 date-times.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::scalar::{Scalar, ScalarKind};

/// Convert a literal lexeme into a scalar of the target kind.
///
/// `Ok(None)` is the null value: it is produced exactly when the lexeme is
/// the case-insensitive `null` literal and the target is nullable. String
/// targets take the lexeme unchanged, whitespace included.
///
/// # Errors
///
/// Returns [`Error::NullNotAssignable`] for a `null` literal against a
/// non-nullable target, and [`Error::CoerceFailed`] when the lexeme does
/// not parse as the target kind (including integer overflow).
pub fn coerce(lexeme: &str, kind: ScalarKind, nullable: bool) -> Result<Option<Scalar>> {
    if lexeme.eq_ignore_ascii_case("null") {
        if nullable {
            return Ok(None);
        }
        return Err(Error::NullNotAssignable { target: kind });
    }

    let scalar = match kind {
        ScalarKind::Bool => {
            if lexeme.eq_ignore_ascii_case("true") {
                Scalar::Bool(true)
            } else if lexeme.eq_ignore_ascii_case("false") {
                Scalar::Bool(false)
            } else {
                return Err(fail(lexeme, kind));
            }
        }
        ScalarKind::I8 => Scalar::I8(parse_number(lexeme, kind)?),
        ScalarKind::I16 => Scalar::I16(parse_number(lexeme, kind)?),
        ScalarKind::I32 => Scalar::I32(parse_number(lexeme, kind)?),
        ScalarKind::I64 => Scalar::I64(parse_number(lexeme, kind)?),
        ScalarKind::U8 => Scalar::U8(parse_number(lexeme, kind)?),
        ScalarKind::F32 => Scalar::F32(parse_number(lexeme, kind)?),
        ScalarKind::F64 => Scalar::F64(parse_number(lexeme, kind)?),
        ScalarKind::Decimal => Scalar::Decimal(parse_number::<Decimal>(lexeme, kind)?),
        ScalarKind::Uuid => {
            Scalar::Uuid(Uuid::parse_str(lexeme.trim()).map_err(|_| fail(lexeme, kind))?)
        }
        ScalarKind::Date => {
            Scalar::Date(NaiveDate::from_str(lexeme.trim()).map_err(|_| fail(lexeme, kind))?)
        }
        ScalarKind::DateTime => Scalar::DateTime(
            DateTime::parse_from_rfc3339(lexeme.trim()).map_err(|_| fail(lexeme, kind))?,
        ),
        ScalarKind::Str => Scalar::Str(lexeme.to_owned()),
    };
    Ok(Some(scalar))
}

/// Invariant numeric parse; surrounding whitespace from quoted literals is
/// tolerated the way invariant number parsing conventionally allows it.
fn parse_number<T: FromStr>(lexeme: &str, kind: ScalarKind) -> Result<T> {
    lexeme.trim().parse().map_err(|_| fail(lexeme, kind))
}

fn fail(lexeme: &str, kind: ScalarKind) -> Error {
    Error::CoerceFailed {
        value: lexeme.to_owned(),
        target: kind,
    }
}
