use std::fmt;
use std::str::FromStr;

use super::{Clause, LogicalOperator};
use crate::error::BuildError;

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal (=)
    Eq,
    /// Not equal (!=)
    Ne,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Le,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Ge,
    /// LIKE
    Like,
    /// NOT LIKE
    NotLike,
}

impl CompareOp {
    /// Returns the SQL operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
        }
    }

    /// The operator matching exactly the rows this one rejects (ignoring NULL).
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Lt => Self::Ge,
            Self::Le => Self::Gt,
            Self::Gt => Self::Le,
            Self::Ge => Self::Lt,
            Self::Like => Self::NotLike,
            Self::NotLike => Self::Like,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for CompareOp {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_ascii_uppercase().as_str() {
            "=" | "==" => Ok(Self::Eq),
            "!=" | "<>" => Ok(Self::Ne),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "LIKE" => Ok(Self::Like),
            "NOT LIKE" => Ok(Self::NotLike),
            _ => Err(BuildError::UnsupportedOperator(String::from(s))),
        }
    }
}

/// A single-value comparison such as `id = ?` or `title LIKE ?`.
///
/// Negation renders the complementary operator, so a negated `=` becomes `!=`
/// and a negated `LIKE` becomes `NOT LIKE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    column: String,
    op: CompareOp,
    logical: LogicalOperator,
    negated: bool,
}

impl Comparison {
    /// Creates an `AND <column> <op> ?` clause.
    #[must_use]
    pub fn new(column: &str, op: CompareOp) -> Self {
        Self {
            column: String::from(column),
            op,
            logical: LogicalOperator::And,
            negated: false,
        }
    }

    /// Creates an equality clause.
    #[must_use]
    pub fn eq(column: &str) -> Self {
        Self::new(column, CompareOp::Eq)
    }

    /// Parses the operator from text (`"="`, `"<>"`, `"like"`, ...).
    pub fn parse(column: &str, op: &str) -> Result<Self, BuildError> {
        Ok(Self::new(column, op.parse()?))
    }

    /// Sets the conjunction.
    #[must_use]
    pub const fn logical(mut self, logical: LogicalOperator) -> Self {
        self.logical = logical;
        self
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

    /// The operator as rendered, after negation.
    #[must_use]
    pub const fn effective_op(&self) -> CompareOp {
        if self.negated {
            self.op.complement()
        } else {
            self.op
        }
    }
}

impl Clause for Comparison {
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
        1
    }

    fn predicate(&self) -> String {
        format!("{} {} ?", self.column, self.effective_op())
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment())
    }
}
