//! Condition clause builders.
//!
//! Each clause renders one WHERE fragment of the shape
//! `" <OP> <column> [NOT ]<predicate>"`. There is one type per predicate shape,
//! and each knows how many placeholders it renders:
//!
//! | clause         | predicate                     | placeholders |
//! |----------------|-------------------------------|--------------|
//! | [`Comparison`] | `col = ?`, `col LIKE ?`, ...  | 1            |
//! | [`Between`]    | `col BETWEEN ? AND ?`         | 2            |
//! | [`InList`]     | `col IN (?, ?, ...)`          | n            |
//! | [`NullCheck`]  | `col IS NULL`                 | 0            |
//!
//! Column names are written verbatim. Only values are bound.
//!
//! ```rust
//! use oxide_rdb_core::clause::Between;
//!
//! let clause = Between::with("price", "or", true).unwrap();
//! assert_eq!(clause.to_string(), " OR price NOT BETWEEN ? AND ?");
//! ```

mod between;
mod comparison;
mod filter;
mod in_list;
mod null_check;

use std::fmt;
use std::str::FromStr;

use crate::error::BuildError;

pub use between::Between;
pub use comparison::{CompareOp, Comparison};
pub use filter::Filter;
pub use in_list::InList;
pub use null_check::NullCheck;

/// Conjunction joining a clause to the one before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    /// `AND`
    #[default]
    And,
    /// `OR`
    Or,
}

impl LogicalOperator {
    /// Returns the uppercase SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalOperator {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" => Ok(Self::And),
            "OR" => Ok(Self::Or),
            _ => Err(BuildError::UnsupportedLogicalOperator(String::from(s))),
        }
    }
}

/// A renderable WHERE fragment.
///
/// Implementors provide the predicate; the conjunction prefix is rendered by
/// [`Clause::fragment`]. Implement this for custom predicate shapes and hand
/// them to [`Filter::push`].
pub trait Clause: fmt::Debug {
    /// Column the predicate applies to.
    fn column(&self) -> &str;

    /// Conjunction joining this clause to the previous one.
    fn logical_operator(&self) -> LogicalOperator;

    /// Whether the predicate is negated.
    fn is_negated(&self) -> bool;

    /// Number of `?` placeholders the predicate renders.
    fn arity(&self) -> usize;

    /// The predicate without its conjunction, e.g. `price NOT BETWEEN ? AND ?`.
    fn predicate(&self) -> String;

    /// The full fragment, e.g. ` OR price NOT BETWEEN ? AND ?`.
    fn fragment(&self) -> String {
        format!(" {} {}", self.logical_operator(), self.predicate())
    }
}

/// Writes `NOT ` when negated.
pub(crate) const fn not_keyword(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}
