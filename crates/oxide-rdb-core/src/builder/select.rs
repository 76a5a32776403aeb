//! SELECT statement builder.

use super::Conditional;
use crate::clause::Filter;
use crate::error::BuildError;
use crate::value::SqlValue;

const STATEMENT: &str = "SELECT";

/// Sort direction for `ORDER BY`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Order {
    const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Builds `SELECT <cols> FROM <table>[ WHERE ...][ ORDER BY ...][ LIMIT n][ OFFSET m]`.
///
/// An empty column list selects `*`. Bound values follow the order the
/// conditions were added in.
#[derive(Debug)]
pub struct Select {
    table: String,
    columns: Vec<String>,
    filter: Filter,
    order_by: Vec<(String, Order)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Creates a SELECT of `columns` from `table`.
    #[must_use]
    pub fn from_table(table: &str, columns: &[&str]) -> Self {
        Self {
            table: String::from(table),
            columns: columns.iter().map(|s| String::from(*s)).collect(),
            filter: Filter::new(),
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }

    /// Adds an `ORDER BY` term.
    #[must_use]
    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.order_by.push((String::from(column), order));
        self
    }

    /// Sets `LIMIT`.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Sets `OFFSET`.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Builds the SELECT statement and returns SQL with parameters.
    pub fn build(self) -> Result<(String, Vec<SqlValue>), BuildError> {
        if self.table.is_empty() {
            return Err(BuildError::EmptyTable {
                statement: STATEMENT,
            });
        }
        self.filter.check()?;
        if self.columns.iter().any(String::is_empty)
            || self.order_by.iter().any(|(c, _)| c.is_empty())
            || self.filter.has_empty_column()
        {
            return Err(BuildError::EmptyColumn {
                statement: STATEMENT,
            });
        }

        let mut sql = String::from("SELECT ");
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            sql.push_str(&self.columns.join(", "));
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.table);
        sql.push_str(&self.filter.render());

        if !self.order_by.is_empty() {
            let terms: Vec<String> = self
                .order_by
                .iter()
                .map(|(c, o)| format!("{c} {}", o.as_sql()))
                .collect();
            sql.push_str(" ORDER BY ");
            sql.push_str(&terms.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded.
            if self.limit.is_none() {
                sql.push_str(" LIMIT -1");
            }
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        Ok((sql, self.filter.params().to_vec()))
    }
}

impl Conditional for Select {
    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Between;

    #[test]
    fn test_simple_select() {
        let (sql, params) = Select::from_table("posts", &["title", "description"])
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT title, description FROM posts");
        assert!(params.is_empty());
    }

    #[test]
    fn test_select_all_columns() {
        let (sql, _) = Select::from_table("posts", &[]).build().unwrap();
        assert_eq!(sql, "SELECT * FROM posts");
    }

    #[test]
    fn test_select_with_where() {
        let (sql, params) = Select::from_table("posts", &["title"])
            .and_where("id", "=", 5_i64)
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT title FROM posts WHERE id = ?");
        assert_eq!(params, vec![SqlValue::Int(5)]);
    }

    #[test]
    fn test_select_mixed_conditions() {
        let (sql, params) = Select::from_table("posts", &["id"])
            .and_where("author", "=", "alice")
            .or_where_between("views", 10, 20)
            .where_not_in("status", vec!["draft", "spam"])
            .where_not_null("published_at")
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id FROM posts WHERE author = ? OR views BETWEEN ? AND ? \
             AND status NOT IN (?, ?) AND published_at IS NOT NULL"
        );
        assert_eq!(
            params,
            vec![
                SqlValue::Text(String::from("alice")),
                SqlValue::Int(10),
                SqlValue::Int(20),
                SqlValue::Text(String::from("draft")),
                SqlValue::Text(String::from("spam")),
            ]
        );
    }

    #[test]
    fn test_select_custom_clause() {
        let (sql, params) = Select::from_table("events", &["id"])
            .and_where("kind", "=", "login")
            .clause(
                Between::new("at").or().not(),
                vec![SqlValue::Int(1), SqlValue::Int(2)],
            )
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id FROM events WHERE kind = ? OR at NOT BETWEEN ? AND ?"
        );
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_select_order_limit_offset() {
        let (sql, _) = Select::from_table("posts", &["id"])
            .order_by("id", Order::Desc)
            .order_by("title", Order::Asc)
            .limit(10)
            .offset(20)
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT id FROM posts ORDER BY id DESC, title ASC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn test_offset_without_limit() {
        let (sql, _) = Select::from_table("posts", &["id"])
            .offset(5)
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT id FROM posts LIMIT -1 OFFSET 5");
    }

    #[test]
    fn test_select_requires_table() {
        let err = Select::from_table("", &["id"]).build().unwrap_err();
        assert_eq!(err, BuildError::EmptyTable { statement: "SELECT" });
    }

    #[test]
    fn test_select_reports_chained_error() {
        let err = Select::from_table("posts", &["id"])
            .and_where("id", "~", 1)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::UnsupportedOperator(String::from("~")));
    }

    #[test]
    fn test_select_rejects_empty_in_list() {
        let err = Select::from_table("posts", &["id"])
            .where_in("id", Vec::<i64>::new())
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::EmptyInList(String::from("id")));
    }

    #[test]
    fn test_select_sql_injection_prevention() {
        let malicious = "'; DROP TABLE users; --";
        let (sql, params) = Select::from_table("users", &["id"])
            .and_where("name", "=", malicious)
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT id FROM users WHERE name = ?");
        assert!(matches!(&params[0], SqlValue::Text(s) if s == malicious));
    }
}
