//! Parser for ordering specifications.
//!
//! The input is a comma-separated list of `path [direction]` clauses. The
//! scan works over subslices of the input; nothing is allocated until a
//! clause is accepted. Property existence is a resolver concern at apply
//! time, not checked here.

use std::fmt;

use sift_core::{Error, Result};

/// One ordering clause: a property path and a direction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderingClause {
    /// Dotted property path, case preserved from the input.
    pub path: String,
    /// `true` for descending order.
    pub descending: bool,
}

impl fmt::Display for OrderingClause {
    /// Canonical rendering: the path, plus ` desc` for descending clauses.
    /// A joined clause list re-parses to an equal list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "{} desc", self.path)
        } else {
            f.write_str(&self.path)
        }
    }
}

/// Parse an ordering specification into its clause list.
///
/// Empty and whitespace-only input yields an empty list. Empty clauses
/// (from `,,` or trailing commas) are silently skipped so callers can join
/// partial inputs without bookkeeping. A missing direction means
/// ascending.
///
/// # Errors
///
/// Returns [`Error::InvalidDirection`] when a clause carries a direction
/// word other than `asc`, `ascending`, `desc`, or `descending`
/// (case-insensitive).
pub fn parse_ordering(input: &str) -> Result<Vec<OrderingClause>> {
    let mut clauses = Vec::new();
    for raw in input.split(',') {
        let clause = raw.trim();
        if clause.is_empty() {
            continue;
        }
        clauses.push(parse_clause(clause)?);
    }
    Ok(clauses)
}

/// Split a trimmed clause at its first internal whitespace run; the head
/// is the property path, the remainder the direction.
fn parse_clause(clause: &str) -> Result<OrderingClause> {
    let Some(boundary) = clause.find(char::is_whitespace) else {
        return Ok(OrderingClause {
            path: clause.to_owned(),
            descending: false,
        });
    };
    let (path, direction) = clause.split_at(boundary);
    let descending = parse_direction(direction.trim_start())?;
    Ok(OrderingClause {
        path: path.to_owned(),
        descending,
    })
}

fn parse_direction(word: &str) -> Result<bool> {
    if word.eq_ignore_ascii_case("asc") || word.eq_ignore_ascii_case("ascending") {
        Ok(false)
    } else if word.eq_ignore_ascii_case("desc") || word.eq_ignore_ascii_case("descending") {
        Ok(true)
    } else {
        Err(Error::InvalidDirection(word.to_owned()))
    }
}
