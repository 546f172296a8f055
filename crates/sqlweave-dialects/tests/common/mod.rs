#![allow(dead_code)]

use sqlweave_core::ast::Statement;
use sqlweave_core::{
    serialize, DiagnosticKind, Dialect, Executor, MemoryRow, SerializedQuery, SqlError, SqlValue,
};
use sqlweave_dialects::{MySqlDialect, PostgresDialect, SqliteDialect};

pub fn dialects() -> Vec<Box<dyn Dialect>> {
    vec![
        Box::new(PostgresDialect::new()),
        Box::new(MySqlDialect::new()),
        Box::new(MySqlDialect::legacy()),
        Box::new(SqliteDialect::new()),
    ]
}

pub fn render(statement: impl Into<Statement>, dialect: &dyn Dialect) -> SerializedQuery {
    serialize(&statement.into(), dialect)
}

pub fn kinds(query: &SerializedQuery) -> Vec<DiagnosticKind> {
    query.diagnostics.iter().map(|d| d.kind).collect()
}

/// Records what it is asked to run and answers with canned rows.
pub struct RecordingExecutor<D> {
    pub dialect: D,
    pub sent: Vec<(String, Vec<SqlValue>)>,
    pub rows: Vec<MemoryRow>,
}

impl<D: Dialect> RecordingExecutor<D> {
    pub fn new(dialect: D) -> Self {
        Self {
            dialect,
            sent: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn sql(&self) -> Vec<&str> {
        self.sent.iter().map(|(sql, _)| sql.as_str()).collect()
    }
}

impl<D: Dialect> Executor for RecordingExecutor<D> {
    type Row = MemoryRow;
    type Error = SqlError;

    fn dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn execute(&mut self, sql: &str, binds: &[SqlValue]) -> Result<Vec<MemoryRow>, SqlError> {
        self.sent.push((String::from(sql), binds.to_vec()));
        Ok(std::mem::take(&mut self.rows))
    }
}
