// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

use std::fmt;

/// Error returned by the fallible set operations.
///
/// Duplicate inserts, missing removals and failed lookups are not errors;
/// those report through `bool` or `Option` return values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// An absent value was passed where an element was required.
    InvalidArgument,
    /// A boundary query was made on an empty set.
    EmptyCollection,
    /// The named operation is deliberately not implemented.
    Unsupported(&'static str),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            SetError::InvalidArgument => write!(f, "absent values cannot be inserted"),
            SetError::EmptyCollection => write!(f, "the set is empty"),
            SetError::Unsupported(op) => write!(f, "{} is not supported", op),
        };
    }
}

impl std::error::Error for SetError {}
