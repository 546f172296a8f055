#![allow(dead_code)]

use sqlweave_core::ast::Statement;
use sqlweave_core::{
    serialize, AlterTableSyntax, DiagnosticKind, Dialect, EnumSyntax, PlaceholderStyle,
    SerializedQuery, UpsertSyntax,
};

/// A dialect whose every capability is a plain field.
#[derive(Debug, Clone, Copy)]
pub struct TestDialect {
    pub placeholders: PlaceholderStyle,
    pub upsert: UpsertSyntax,
    pub enums: EnumSyntax,
    pub alter: AlterTableSyntax,
    pub returning: bool,
    pub if_exists: bool,
}

impl Default for TestDialect {
    fn default() -> Self {
        Self {
            placeholders: PlaceholderStyle::Positional,
            upsert: UpsertSyntax::Standard,
            enums: EnumSyntax::Unsupported,
            alter: AlterTableSyntax::default(),
            returning: true,
            if_exists: true,
        }
    }
}

impl TestDialect {
    pub fn with_upsert(upsert: UpsertSyntax) -> Self {
        Self {
            upsert,
            ..Self::default()
        }
    }
}

impl Dialect for TestDialect {
    fn name(&self) -> &'static str {
        "test"
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        self.placeholders
    }

    fn supports_if_exists(&self) -> bool {
        self.if_exists
    }

    fn supports_returning(&self) -> bool {
        self.returning
    }

    fn alter_table_syntax(&self) -> AlterTableSyntax {
        self.alter
    }

    fn enum_syntax(&self) -> EnumSyntax {
        self.enums
    }

    fn upsert_syntax(&self) -> UpsertSyntax {
        self.upsert
    }
}

pub fn render(statement: impl Into<Statement>, dialect: &dyn Dialect) -> SerializedQuery {
    serialize(&statement.into(), dialect)
}

pub fn kinds(query: &SerializedQuery) -> Vec<DiagnosticKind> {
    query.diagnostics.iter().map(|d| d.kind).collect()
}
