use std::fmt;

use super::{not_keyword, Clause, LogicalOperator};
use crate::error::BuildError;

/// A `BETWEEN ? AND ?` range condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Between {
    column: String,
    logical: LogicalOperator,
    negated: bool,
}

impl Between {
    /// Creates an `AND <column> BETWEEN ? AND ?` clause.
    #[must_use]
    pub fn new(column: &str) -> Self {
        Self {
            column: String::from(column),
            logical: LogicalOperator::And,
            negated: false,
        }
    }

    /// Creates a clause from a textual logical operator (`"and"`, `"OR"`, ...)
    /// and a negation flag.
    pub fn with(column: &str, logical: &str, negate: bool) -> Result<Self, BuildError> {
        Ok(Self::new(column)
            .logical(logical.parse()?)
            .negate(negate))
    }

    /// Sets the conjunction.
    #[must_use]
    pub const fn logical(mut self, logical: LogicalOperator) -> Self {
        self.logical = logical;
        self
    }

    /// Joins with `AND`.
    #[must_use]
    pub const fn and(self) -> Self {
        self.logical(LogicalOperator::And)
    }

    /// Joins with `OR`.
    #[must_use]
    pub const fn or(self) -> Self {
        self.logical(LogicalOperator::Or)
    }

    /// Sets the negation flag.
    #[must_use]
    pub const fn negate(mut self, negate: bool) -> Self {
        self.negated = negate;
        self
    }

    /// Renders `NOT BETWEEN`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub const fn not(self) -> Self {
        self.negate(true)
    }
}

impl Clause for Between {
    fn column(&self) -> &str {
        &self.column
    }

    fn logical_operator(&self) -> LogicalOperator {
        self.logical
    }

    fn is_negated(&self) -> bool {
        self.negated
    }

    fn arity(&self) -> usize {
        2
    }

    fn predicate(&self) -> String {
        format!(
            "{} {}BETWEEN ? AND ?",
            self.column,
            not_keyword(self.negated)
        )
    }
}

impl fmt::Display for Between {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
