//! Error types.

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Errors raised while assembling a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A VALUES row does not match the declared column list.
    #[error("row has {found} values but {expected} columns were declared")]
    ColumnCountMismatch {
        /// Number of declared columns.
        expected: usize,
        /// Number of values in the offending row.
        found: usize,
    },

    /// A clause the statement cannot exist without is empty.
    #[error("{0} clause is empty")]
    EmptyClause(&'static str),

    /// A bind list was constructed from zero values.
    #[error("bind list must contain at least one value")]
    EmptyBindList,
}

/// Errors raised when reading a column out of a result row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowDecodeError {
    /// The row has no column with this name.
    #[error("column `{0}` not found in row")]
    MissingColumn(String),

    /// The stored value cannot be converted to the requested type.
    #[error("column `{column}`: expected {expected}, found {found}")]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Requested Rust-side type.
        expected: &'static str,
        /// Stored value kind.
        found: &'static str,
    },
}

/// Errors surfaced at the executor boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SqlError {
    /// The statement could not be built.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// The dialect cannot express the statement faithfully.
    #[error("dialect `{dialect}` rejected the statement: {}", summary(.diagnostics))]
    Rejected {
        /// Name of the dialect.
        dialect: String,
        /// The error-severity diagnostics that caused the rejection.
        diagnostics: Vec<Diagnostic>,
    },

    /// A row could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] RowDecodeError),
}

fn summary(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for statement construction.
pub type Result<T> = std::result::Result<T, BuildError>;
