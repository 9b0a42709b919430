//! Predicate compiler for filter expression trees.
//!
//! Walks the tree in post-order against a record shape: property paths are
//! resolved (and cached) up front, literals are coerced once, and the
//! result is a closure graph evaluating in left-to-right written order.
//! Everything that can fail does so here, at compile time; evaluation
//! itself is infallible.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use sift_core::{
    Error, Record, Result, Scalar, ScalarKind, StringOp, coerce, resolve_path, string_op,
};

use super::ast::{ComparisonOp, FilterExpr, LogicalOp};

/// A compiled filter predicate over records of type `R`.
///
/// Pure and reentrant: it captures only resolved paths and coerced
/// constants, so it may be evaluated any number of times, from any thread.
pub struct Predicate<R> {
    eval: Box<dyn Fn(&R) -> bool + Send + Sync>,
}

impl<R> Predicate<R> {
    /// Evaluate the predicate against one record.
    #[must_use]
    pub fn test(&self, record: &R) -> bool {
        (self.eval)(record)
    }
}

impl<R> fmt::Debug for Predicate<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Compile a filter expression tree against the shape of `R`.
///
/// # Errors
///
/// Returns [`Error::PropertyNotFound`] for paths that do not resolve,
/// [`Error::NullNotAssignable`] / [`Error::CoerceFailed`] for literals
/// incompatible with the leaf type, and [`Error::TypeMismatch`] when a
/// string predicate targets a non-string property or a hand-built
/// `Function` node does not carry exactly two arguments.
pub fn compile_filter<R: Record>(expr: &FilterExpr) -> Result<Predicate<R>> {
    let eval = compile_node::<R>(expr)?;
    debug!(shape = R::SHAPE.name, "compiled filter predicate");
    Ok(Predicate { eval })
}

type Eval<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

fn compile_node<R: Record>(expr: &FilterExpr) -> Result<Eval<R>> {
    match expr {
        FilterExpr::Comparison { path, op, value } => compile_comparison::<R>(path, *op, value),
        FilterExpr::Function { op, args } => compile_function::<R>(*op, args),
        FilterExpr::Logical { op, left, right } => {
            let left = compile_node::<R>(left)?;
            let right = compile_node::<R>(right)?;
            Ok(match op {
                LogicalOp::And => Box::new(move |record| left(record) && right(record)),
                LogicalOp::Or => Box::new(move |record| left(record) || right(record)),
            })
        }
        FilterExpr::Not(inner) => {
            let inner = compile_node::<R>(inner)?;
            Ok(Box::new(move |record| !inner(record)))
        }
    }
}

fn compile_comparison<R: Record>(
    path: &str,
    op: ComparisonOp,
    value: &str,
) -> Result<Eval<R>> {
    let check: fn(Option<Ordering>) -> bool = match op {
        // Infix string operators share the guarded string compilation.
        ComparisonOp::Contains => {
            return compile_string_predicate::<R>(path, StringOp::Contains, value);
        }
        ComparisonOp::StartsWith => {
            return compile_string_predicate::<R>(path, StringOp::StartsWith, value);
        }
        ComparisonOp::EndsWith => {
            return compile_string_predicate::<R>(path, StringOp::EndsWith, value);
        }
        ComparisonOp::Eq => |ord| ord == Some(Ordering::Equal),
        ComparisonOp::Ne => |ord| ord != Some(Ordering::Equal),
        ComparisonOp::Gt => |ord| ord == Some(Ordering::Greater),
        ComparisonOp::Ge => |ord| matches!(ord, Some(Ordering::Greater | Ordering::Equal)),
        ComparisonOp::Lt => |ord| ord == Some(Ordering::Less),
        ComparisonOp::Le => |ord| matches!(ord, Some(Ordering::Less | Ordering::Equal)),
    };

    let resolved = resolve_path(R::SHAPE, path)?;
    let constant = coerce(value, resolved.leaf_kind(), resolved.leaf_nullable())?;
    Ok(Box::new(move |record| {
        let actual = resolved.get(record);
        check(compare_operands(actual.as_ref(), constant.as_ref()))
    }))
}

/// Compare an accessor result against the coerced constant.
///
/// Two absent values compare equal (`x eq null` matches a null field); one
/// absent side is unordered, which makes `eq`/`gt`/... fail and `ne`
/// succeed.
fn compare_operands(actual: Option<&Scalar>, constant: Option<&Scalar>) -> Option<Ordering> {
    match (actual, constant) {
        (None, None) => Some(Ordering::Equal),
        (Some(a), Some(b)) => a.compare(b),
        _ => None,
    }
}

fn compile_function<R: Record>(op: StringOp, args: &[String]) -> Result<Eval<R>> {
    let [path, literal] = args else {
        return Err(Error::TypeMismatch {
            message: format!(
                "{op} expects exactly 2 arguments, got {count}",
                count = args.len()
            ),
        });
    };
    compile_string_predicate::<R>(path, op, literal)
}

/// Compile the guarded string form: accessor is non-null AND the operation
/// applies. An absent string never matches.
fn compile_string_predicate<R: Record>(
    path: &str,
    op: StringOp,
    literal: &str,
) -> Result<Eval<R>> {
    let resolved = resolve_path(R::SHAPE, path)?;
    if resolved.leaf_kind() != ScalarKind::Str {
        return Err(Error::TypeMismatch {
            message: format!(
                "{op} requires a string property, but '{path}' is {kind}",
                kind = resolved.leaf_kind()
            ),
        });
    }

    let handle = string_op(op);
    let argument = literal.to_owned();
    Ok(Box::new(move |record| match resolved.get(record) {
        Some(Scalar::Str(value)) => handle.apply(&value, &argument),
        _ => false,
    }))
}
