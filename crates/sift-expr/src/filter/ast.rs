//! AST types for filter expressions.
//!
//! The tree is a tagged sum produced by the parser and consumed by the
//! compiler. Operator spellings are stored normalized to lower case; the
//! `Display` impl renders a canonical form (fully parenthesized, all value
//! lexemes single-quoted) that re-parses to an equivalent tree.

use std::fmt;

use sift_core::StringOp;

/// Comparison operators, including the infix spellings of the three string
/// predicates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ComparisonOp {
    /// `eq`
    Eq,
    /// `ne`
    Ne,
    /// `gt`
    Gt,
    /// `ge`
    Ge,
    /// `lt`
    Lt,
    /// `le`
    Le,
    /// `contains` in infix position.
    Contains,
    /// `startswith` in infix position.
    StartsWith,
    /// `endswith` in infix position.
    EndsWith,
}

impl ComparisonOp {
    /// Parse an operator spelling, case-insensitively.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "eq" => Some(Self::Eq),
            "ne" => Some(Self::Ne),
            "gt" => Some(Self::Gt),
            "ge" => Some(Self::Ge),
            "lt" => Some(Self::Lt),
            "le" => Some(Self::Le),
            "contains" => Some(Self::Contains),
            "startswith" => Some(Self::StartsWith),
            "endswith" => Some(Self::EndsWith),
            _ => None,
        }
    }

    /// Canonical lower-case spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Contains => "contains",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
        }
    }

    /// The string predicate this operator denotes, if any. The infix and
    /// prefix forms of the string predicates have identical semantics.
    #[must_use]
    pub fn string_op(self) -> Option<StringOp> {
        match self {
            Self::Contains => Some(StringOp::Contains),
            Self::StartsWith => Some(StringOp::StartsWith),
            Self::EndsWith => Some(StringOp::EndsWith),
            _ => None,
        }
    }

}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical connectives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum LogicalOp {
    /// Short-circuiting conjunction.
    And,
    /// Short-circuiting disjunction.
    Or,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
        }
    }
}

/// Filter expression tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FilterExpr {
    /// Comparison of a property against a literal: `path op value`.
    Comparison {
        /// Dotted property path, case preserved from the input.
        path: String,
        /// The operator, spelling normalized.
        op: ComparisonOp,
        /// The right-hand lexeme; coercion against the path's type decides
        /// its interpretation.
        value: String,
    },
    /// Prefix string predicate call: `op(path, literal)`.
    Function {
        /// The string predicate.
        op: StringOp,
        /// Argument lexemes: the property path followed by the literal.
        args: Vec<String>,
    },
    /// Logical combination: `left and right` / `left or right`.
    Logical {
        /// The connective.
        op: LogicalOp,
        /// Left-hand expression, evaluated first.
        left: Box<FilterExpr>,
        /// Right-hand expression.
        right: Box<FilterExpr>,
    },
    /// Logical negation: `not expr`.
    Not(Box<FilterExpr>),
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison { path, op, value } => {
                write!(f, "{path} {op} {}", QuotedValue(value))
            }
            Self::Function { op, args } => {
                write!(f, "{op}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    // The first argument is a property path; the rest are
                    // literals and get re-quoted.
                    if i == 0 {
                        f.write_str(arg)?;
                    } else {
                        write!(f, "{}", QuotedValue(arg))?;
                    }
                }
                f.write_str(")")
            }
            Self::Logical { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Not(inner) => write!(f, "not ({inner})"),
        }
    }
}

/// Renders a value lexeme single-quoted with `'` and `\` backslash-escaped,
/// so the canonical form re-tokenizes to the identical lexeme.
struct QuotedValue<'a>(&'a str);

impl fmt::Display for QuotedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for c in self.0.chars() {
            if c == '\'' || c == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("'")
    }
}
