//! The WHERE accumulator shared by SELECT, UPDATE and DELETE.

use super::{Between, Clause, CompareOp, Comparison, InList, LogicalOperator, NullCheck};
use crate::columns::ColumnValues;
use crate::error::BuildError;
use crate::value::SqlValue;

/// An ordered list of clauses and the values bound to them.
///
/// Values are kept in clause-addition order, which is also placeholder order
/// in the rendered text. Mistakes made while chaining (unknown operator,
/// arity mismatch, empty IN list) are recorded and surfaced by
/// [`Filter::check`], so fluent chains never have to return `Result`.
#[derive(Debug, Default)]
pub struct Filter {
    clauses: Vec<Box<dyn Clause>>,
    params: Vec<SqlValue>,
    error: Option<BuildError>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause and the values for its placeholders.
    pub fn push<C: Clause + 'static>(&mut self, clause: C, values: Vec<SqlValue>) {
        if clause.arity() != values.len() {
            self.fail(BuildError::ArityMismatch {
                clause: clause.predicate(),
                expected: clause.arity(),
                actual: values.len(),
            });
            return;
        }
        self.clauses.push(Box::new(clause));
        self.params.extend(values);
    }

    /// Appends `<column> <op> ?`, parsing `op`.
    ///
    /// Equality against `Null` renders `IS NULL` (`IS NOT NULL` for `!=`),
    /// as [`equals_all`](Self::equals_all) does.
    pub fn compare(&mut self, logical: LogicalOperator, column: &str, op: &str, value: SqlValue) {
        match op.parse::<CompareOp>() {
            Ok(CompareOp::Eq) if value.is_null() => self.null(logical, column, false),
            Ok(CompareOp::Ne) if value.is_null() => self.null(logical, column, true),
            Ok(op) => self.push(Comparison::new(column, op).logical(logical), vec![value]),
            Err(e) => self.fail(e),
        }
    }

    /// Appends `<column> [NOT ]BETWEEN ? AND ?`.
    pub fn between(
        &mut self,
        logical: LogicalOperator,
        column: &str,
        negate: bool,
        low: SqlValue,
        high: SqlValue,
    ) {
        self.push(
            Between::new(column).logical(logical).negate(negate),
            vec![low, high],
        );
    }

    /// Appends `<column> [NOT ]IN (...)`.
    pub fn in_list(
        &mut self,
        logical: LogicalOperator,
        column: &str,
        negate: bool,
        values: Vec<SqlValue>,
    ) {
        if values.is_empty() {
            self.fail(BuildError::EmptyInList(String::from(column)));
            return;
        }
        self.push(
            InList::new(column, values.len())
                .logical(logical)
                .negate(negate),
            values,
        );
    }

    /// Appends `<column> IS [NOT ]NULL`.
    pub fn null(&mut self, logical: LogicalOperator, column: &str, negate: bool) {
        self.push(
            NullCheck::new(column).logical(logical).negate(negate),
            vec![],
        );
    }

    /// Appends one AND-joined equality per entry. `Null` values become
    /// `IS NULL`, since `= NULL` never matches.
    pub fn equals_all(&mut self, conditions: &ColumnValues) {
        for (column, value) in conditions.iter() {
            if value.is_null() {
                self.null(LogicalOperator::And, column, false);
            } else {
                self.push(Comparison::eq(column), vec![value.clone()]);
            }
        }
    }

    /// Records an error; only the first one is kept.
    pub fn fail(&mut self, error: BuildError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Returns the first recorded error.
    pub fn check(&self) -> Result<(), BuildError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if no clause was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Bound values in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub(crate) fn has_empty_column(&self) -> bool {
        self.clauses.iter().any(|c| c.column().is_empty())
    }

    /// Renders ` WHERE <first predicate><remaining fragments>`, or an empty
    /// string when there are no clauses. The first clause's conjunction is
    /// dropped.
    #[must_use]
    pub fn render(&self) -> String {
        let mut sql = String::new();
        for (i, clause) in self.clauses.iter().enumerate() {
            if i == 0 {
                sql.push_str(" WHERE ");
                sql.push_str(&clause.predicate());
            } else {
                sql.push_str(&clause.fragment());
            }
        }
        sql
    }
}
