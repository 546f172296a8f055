//! PostgreSQL dialect.

use sqlweave_core::ast::DataType;
use sqlweave_core::{AlterTableSyntax, Dialect, EnumSyntax, PlaceholderStyle, UpsertSyntax};

/// PostgreSQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Numbered('$')
    }

    fn auto_increment_clause(&self) -> &'static str {
        "GENERATED BY DEFAULT AS IDENTITY"
    }

    fn supports_returning(&self) -> bool {
        true
    }

    fn alter_table_syntax(&self) -> AlterTableSyntax {
        AlterTableSyntax {
            alter_column_clause: Some("ALTER COLUMN"),
            alter_column_type_keyword: Some("SET DATA TYPE"),
            allows_batch: true,
            supports_constraints: true,
        }
    }

    fn enum_syntax(&self) -> EnumSyntax {
        EnumSyntax::TypeName
    }

    fn upsert_syntax(&self) -> UpsertSyntax {
        UpsertSyntax::Standard
    }

    fn data_type_name(&self, data_type: &DataType) -> Option<String> {
        match data_type {
            DataType::Double => Some(String::from("DOUBLE PRECISION")),
            DataType::Blob => Some(String::from("BYTEA")),
            _ => None,
        }
    }
}
