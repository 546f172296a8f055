//! MySQL dialect.

use sqlweave_core::{AlterTableSyntax, Dialect, EnumSyntax, UpsertSyntax};

/// MySQL dialect.
///
/// [`MySqlDialect::new`] targets MySQL 8.0.20 and later, where the new row
/// of an upsert is named with a row alias. [`MySqlDialect::legacy`] targets
/// older servers and MariaDB, which read it through `VALUES(col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MySqlDialect {
    row_alias: bool,
}

impl MySqlDialect {
    /// MySQL with row-alias upserts.
    #[must_use]
    pub const fn new() -> Self {
        Self { row_alias: true }
    }

    /// MySQL (or MariaDB) with `VALUES()` upserts.
    #[must_use]
    pub const fn legacy() -> Self {
        Self { row_alias: false }
    }
}

impl Default for MySqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn auto_increment_clause(&self) -> &'static str {
        "AUTO_INCREMENT"
    }

    fn alter_table_syntax(&self) -> AlterTableSyntax {
        AlterTableSyntax {
            alter_column_clause: Some("MODIFY COLUMN"),
            alter_column_type_keyword: None,
            allows_batch: true,
            supports_constraints: true,
        }
    }

    fn enum_syntax(&self) -> EnumSyntax {
        EnumSyntax::Inline
    }

    fn upsert_syntax(&self) -> UpsertSyntax {
        if self.row_alias {
            UpsertSyntax::Nonspecific
        } else {
            UpsertSyntax::NonspecificWithValues
        }
    }
}
