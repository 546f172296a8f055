//! SQLite dialect.

use sqlweave_core::ast::DataType;
use sqlweave_core::{AlterTableSyntax, Dialect, UpsertSyntax};

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn literal_boolean(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    // No DEFAULT keyword inside VALUES.
    fn literal_default(&self) -> &'static str {
        "NULL"
    }

    fn supports_returning(&self) -> bool {
        true // 3.35.0+
    }

    fn alter_table_syntax(&self) -> AlterTableSyntax {
        AlterTableSyntax {
            alter_column_clause: None,
            alter_column_type_keyword: None,
            allows_batch: false,
            supports_constraints: false,
        }
    }

    fn upsert_syntax(&self) -> UpsertSyntax {
        UpsertSyntax::Standard // 3.24.0+
    }

    // Type affinity: AUTOINCREMENT is only accepted on INTEGER PRIMARY KEY.
    fn data_type_name(&self, data_type: &DataType) -> Option<String> {
        let name = match data_type {
            DataType::Smallint | DataType::Integer | DataType::Bigint | DataType::Boolean => {
                "INTEGER"
            }
            DataType::Real | DataType::Double | DataType::Decimal { .. } => "REAL",
            DataType::Char(_)
            | DataType::Varchar(_)
            | DataType::Date
            | DataType::Time
            | DataType::Timestamp => "TEXT",
            _ => return None,
        };
        Some(String::from(name))
    }
}
