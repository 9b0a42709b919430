//! Built-in string predicate handles.
//!
//! The three string predicates are the only functions the filter grammar
//! admits. Their handles (canonical name plus the host operation) are
//! resolved once into statics and shared for the process lifetime.

use std::fmt;

/// The built-in string predicates usable in filter expressions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum StringOp {
    /// Substring match.
    Contains,
    /// Prefix match.
    StartsWith,
    /// Suffix match.
    EndsWith,
}

impl StringOp {
    /// Parse a function-name spelling, case-insensitively.
    #[must_use]
    pub fn parse(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("contains") {
            Some(Self::Contains)
        } else if word.eq_ignore_ascii_case("startswith") {
            Some(Self::StartsWith)
        } else if word.eq_ignore_ascii_case("endswith") {
            Some(Self::EndsWith)
        } else {
            None
        }
    }

    /// Canonical lower-case spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
        }
    }
}

impl fmt::Display for StringOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved handle for one string predicate: its canonical name plus the
/// host operation it maps to.
#[derive(Debug)]
pub struct StringOpHandle {
    name: &'static str,
    apply: fn(&str, &str) -> bool,
}

impl StringOpHandle {
    /// Canonical name of the predicate.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the predicate to a field value and its argument.
    #[must_use]
    pub fn apply(&self, value: &str, argument: &str) -> bool {
        (self.apply)(value, argument)
    }
}

fn str_contains(value: &str, argument: &str) -> bool {
    value.contains(argument)
}

fn str_starts_with(value: &str, argument: &str) -> bool {
    value.starts_with(argument)
}

fn str_ends_with(value: &str, argument: &str) -> bool {
    value.ends_with(argument)
}

static CONTAINS: StringOpHandle = StringOpHandle {
    name: "contains",
    apply: str_contains,
};

static STARTS_WITH: StringOpHandle = StringOpHandle {
    name: "startswith",
    apply: str_starts_with,
};

static ENDS_WITH: StringOpHandle = StringOpHandle {
    name: "endswith",
    apply: str_ends_with,
};

/// Resolve the handle for a string predicate.
///
/// Repeat callers receive the same static handle.
#[must_use]
pub fn string_op(op: StringOp) -> &'static StringOpHandle {
    match op {
        StringOp::Contains => &CONTAINS,
        StringOp::StartsWith => &STARTS_WITH,
        StringOp::EndsWith => &ENDS_WITH,
    }
}
