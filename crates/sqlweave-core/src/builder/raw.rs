//! Raw statement builder.

use crate::ast::RawQuery;
use crate::value::ToSqlValue;

/// Builds a [`RawQuery`].
///
/// The text is written as given. Placeholders inside it must already use
/// the target dialect's spelling; binds are collected in call order.
#[derive(Debug, Clone)]
#[must_use]
pub struct RawBuilder {
    raw: RawQuery,
}

impl RawBuilder {
    /// Starts from `sql`.
    pub fn new(sql: &str) -> Self {
        Self {
            raw: RawQuery {
                sql: String::from(sql),
                binds: Vec::new(),
            },
        }
    }

    /// Appends more text.
    pub fn sql(mut self, sql: &str) -> Self {
        self.raw.sql.push_str(sql);
        self
    }

    /// Appends a bound value.
    pub fn bind<T: ToSqlValue>(mut self, value: T) -> Self {
        self.raw.binds.push(value.to_sql_value());
        self
    }

    /// Finishes the statement.
    pub fn build(self) -> RawQuery {
        self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SqlValue;

    #[test]
    fn test_text_and_binds_accumulate() {
        let raw = RawBuilder::new("SELECT * FROM planets")
            .sql(" WHERE id = ?")
            .bind(3)
            .build();
        assert_eq!(raw.sql, "SELECT * FROM planets WHERE id = ?");
        assert_eq!(raw.binds, vec![SqlValue::Int(3)]);
    }
}
