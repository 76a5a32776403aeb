use std::fmt;

use super::{not_keyword, Clause, LogicalOperator};
use crate::value::placeholders;

/// A `col IN (?, ?, ...)` membership condition with `len` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InList {
    column: String,
    len: usize,
    logical: LogicalOperator,
    negated: bool,
}

impl InList {
    /// Creates an `AND <column> IN (...)` clause with `len` placeholders.
    #[must_use]
    pub fn new(column: &str, len: usize) -> Self {
        Self {
            column: String::from(column),
            len,
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

    /// Sets the negation flag.
    #[must_use]
    pub const fn negate(mut self, negate: bool) -> Self {
        self.negated = negate;
        self
    }
}

impl Clause for InList {
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
        self.len
    }

    fn predicate(&self) -> String {
        format!(
            "{} {}IN ({})",
            self.column,
            not_keyword(self.negated),
            placeholders(self.len)
        )
    }
}

impl fmt::Display for InList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_list() {
        let clause = InList::new("status", 3);
        assert_eq!(clause.to_string(), " AND status IN (?, ?, ?)");
        assert_eq!(clause.arity(), 3);
    }

    #[test]
    fn test_not_in_list() {
        let clause = InList::new("id", 2)
            .logical(LogicalOperator::Or)
            .negate(true);
        assert_eq!(clause.to_string(), " OR id NOT IN (?, ?)");
    }
}
