use std::fmt;

use super::{not_keyword, Clause, LogicalOperator};

/// A `col IS [NOT ]NULL` condition. Binds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullCheck {
    column: String,
    logical: LogicalOperator,
    negated: bool,
}

impl NullCheck {
    /// Creates an `AND <column> IS NULL` clause.
    #[must_use]
    pub fn new(column: &str) -> Self {
        Self {
            column: String::from(column),
            logical: LogicalOperator::And,
            negated: false,
        }
    }

    /// Sets the conjunction.
    #[must_use]
    pub const fn logical(mut self, logical: LogicalOperator) -> Self {
        self.logical = logical;
        self
    }

    /// Sets the negation flag (`IS NOT NULL`).
    #[must_use]
    pub const fn negate(mut self, negate: bool) -> Self {
        self.negated = negate;
        self
    }
}

impl Clause for NullCheck {
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
        0
    }

    fn predicate(&self) -> String {
        format!("{} IS {}NULL", self.column, not_keyword(self.negated))
    }
}

impl fmt::Display for NullCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
