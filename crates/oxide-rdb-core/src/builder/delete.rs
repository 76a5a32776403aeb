//! DELETE statement builder.

use super::Conditional;
use crate::clause::Filter;
use crate::columns::ColumnValues;
use crate::error::BuildError;
use crate::value::SqlValue;

const STATEMENT: &str = "DELETE";

/// Builds `DELETE FROM <table> WHERE ...`.
///
/// A condition is mandatory: deleting every row is never what a where-map
/// with no entries meant.
#[derive(Debug)]
pub struct Delete {
    table: String,
    filter: Filter,
}

impl Delete {
    /// Creates a DELETE of the rows of `table` matching every entry of
    /// `conditions`.
    #[must_use]
    pub fn from_table(table: &str, conditions: impl Into<ColumnValues>) -> Self {
        let mut filter = Filter::new();
        filter.equals_all(&conditions.into());
        Self {
            table: String::from(table),
            filter,
        }
    }

    /// Target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Builds the DELETE statement and returns SQL with parameters.
    pub fn build(self) -> Result<(String, Vec<SqlValue>), BuildError> {
        if self.table.is_empty() {
            return Err(BuildError::EmptyTable {
                statement: STATEMENT,
            });
        }
        self.filter.check()?;
        if self.filter.is_empty() {
            return Err(BuildError::MissingWhere {
                statement: STATEMENT,
            });
        }
        if self.filter.has_empty_column() {
            return Err(BuildError::EmptyColumn {
                statement: STATEMENT,
            });
        }

        let mut sql = String::from("DELETE FROM ");
        sql.push_str(&self.table);
        sql.push_str(&self.filter.render());

        Ok((sql, self.filter.params().to_vec()))
    }
}

impl Conditional for Delete {
    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_delete() {
        let (sql, params) = Delete::from_table("posts", [("id", 1_i64)])
            .build()
            .unwrap();

        assert_eq!(sql, "DELETE FROM posts WHERE id = ?");
        assert_eq!(params, vec![SqlValue::Int(1)]);
    }

    #[test]
    fn test_delete_multiple_conditions() {
        let conditions = ColumnValues::new()
            .set("status", "cancelled")
            .set("archived", SqlValue::Null);
        let (sql, params) = Delete::from_table("orders", conditions)
            .where_between("created_at", "2024-01-01", "2024-02-01")
            .build()
            .unwrap();

        assert_eq!(
            sql,
            "DELETE FROM orders WHERE status = ? AND archived IS NULL \
             AND created_at BETWEEN ? AND ?"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_delete_requires_condition() {
        let err = Delete::from_table("posts", ColumnValues::new())
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingWhere { statement: "DELETE" });
    }

    #[test]
    fn test_delete_chained_condition_satisfies_where() {
        let (sql, _) = Delete::from_table("posts", ColumnValues::new())
            .and_where("id", ">", 10)
            .build()
            .unwrap();
        assert_eq!(sql, "DELETE FROM posts WHERE id > ?");
    }

    #[test]
    fn test_delete_rejects_empty_column() {
        let err = Delete::from_table("posts", [("", 1)]).build().unwrap_err();
        assert_eq!(err, BuildError::EmptyColumn { statement: "DELETE" });
    }

    #[test]
    fn test_delete_sql_injection_prevention() {
        let malicious = "1; DROP TABLE users; --";
        let (sql, params) = Delete::from_table("users", [("id", malicious)])
            .build()
            .unwrap();

        assert_eq!(sql, "DELETE FROM users WHERE id = ?");
        assert!(matches!(&params[0], SqlValue::Text(s) if s == malicious));
    }
}
