//! Statement serialization.
//!
//! [`serialize`] walks a statement tree once, depth first, and produces the
//! SQL text, the bound values in placeholder order and any dialect
//! limitations that were hit. The walk never reorders binds: the N-th
//! placeholder written always corresponds to the N-th value collected.

mod conflict;
mod ddl;
mod expr;
mod query;

pub use conflict::ExcludedStyle;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::ast::Statement;
use crate::diagnostic::{Diagnostic, Severity};
use crate::dialect::Dialect;
use crate::error::SqlError;
use crate::value::SqlValue;

/// The output of one serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedQuery {
    /// Name of the dialect the text was written for.
    pub dialect: String,
    /// SQL text.
    pub sql: String,
    /// Bound values, in placeholder order.
    pub binds: Vec<SqlValue>,
    /// Dialect limitations hit while serializing.
    pub diagnostics: Vec<Diagnostic>,
}

impl SerializedQuery {
    /// Returns `true` if any diagnostic has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Passes the query through unless an error-severity diagnostic was
    /// recorded.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Rejected`] with the error diagnostics.
    pub fn check(self) -> Result<Self, SqlError> {
        if !self.has_errors() {
            return Ok(self);
        }
        let diagnostics = self
            .diagnostics
            .into_iter()
            .filter(Diagnostic::is_error)
            .collect();
        Err(SqlError::Rejected {
            dialect: self.dialect,
            diagnostics,
        })
    }
}

/// Serializes `statement` for `dialect`.
///
/// Never fails; limitations are reported in
/// [`SerializedQuery::diagnostics`] and logged.
#[must_use]
pub fn serialize(statement: &Statement, dialect: &dyn Dialect) -> SerializedQuery {
    let mut serializer = Serializer::new(dialect);
    statement.serialize(&mut serializer);
    let query = serializer.finish();
    debug!(
        dialect = %query.dialect,
        sql = %query.sql,
        binds = query.binds.len(),
        "Serialized statement"
    );
    query
}

/// Accumulates SQL text and binds for one statement.
///
/// A serializer is created per statement and is never shared.
#[derive(Debug)]
pub struct Serializer<'d> {
    dialect: &'d dyn Dialect,
    sql: String,
    binds: Vec<SqlValue>,
    diagnostics: Vec<Diagnostic>,
    excluded: ExcludedStyle,
}

impl<'d> Serializer<'d> {
    /// Creates an empty serializer for `dialect`.
    #[must_use]
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        Self {
            dialect,
            sql: String::new(),
            binds: Vec::new(),
            diagnostics: Vec::new(),
            excluded: ExcludedStyle::for_syntax(dialect.upsert_syntax()),
        }
    }

    /// The target dialect.
    #[must_use]
    pub fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    /// How excluded-row references are written for this statement.
    #[must_use]
    pub const fn excluded_style(&self) -> ExcludedStyle {
        self.excluded
    }

    /// Text written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Push a string to SQL.
    pub fn push(&mut self, s: &str) {
        self.sql.push_str(s);
    }

    /// Push a quoted identifier.
    pub fn push_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Push a quoted string literal.
    pub fn push_string(&mut self, value: &str) {
        let quoted = self.dialect.quote_string(value);
        self.sql.push_str(&quoted);
    }

    /// Push a placeholder and collect its value.
    pub fn push_bind(&mut self, value: SqlValue) {
        self.binds.push(value);
        let placeholder = self.dialect.placeholder_style().render(self.binds.len());
        self.sql.push_str(&placeholder);
    }

    /// Collect a value whose placeholder the caller wrote into raw text.
    pub fn append_bind(&mut self, value: SqlValue) {
        self.binds.push(value);
    }

    /// Push a list of items with a separator.
    pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&mut Self, T),
    {
        let mut first = true;
        for item in items {
            if !first {
                self.sql.push_str(separator);
            }
            f(self, item);
            first = false;
        }
    }

    /// Records a dialect limitation and logs it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let dialect = self.dialect.name();
        match diagnostic.severity {
            Severity::Warning => {
                warn!(dialect, kind = %diagnostic.kind, "{}", diagnostic.message);
            }
            Severity::Error => {
                error!(dialect, kind = %diagnostic.kind, "{}", diagnostic.message);
            }
        }
        self.diagnostics.push(diagnostic);
    }

    /// Consume the serializer and return the query.
    #[must_use]
    pub fn finish(self) -> SerializedQuery {
        SerializedQuery {
            dialect: self.dialect.name().to_owned(),
            sql: self.sql,
            binds: self.binds,
            diagnostics: self.diagnostics,
        }
    }
}

impl Statement {
    /// Writes the statement into `serializer`.
    pub fn serialize(&self, serializer: &mut Serializer<'_>) {
        match self {
            Self::Select(select) => select.serialize(serializer),
            Self::Insert(insert) => insert.serialize(serializer),
            Self::Update(update) => update.serialize(serializer),
            Self::Delete(delete) => delete.serialize(serializer),
            Self::Upsert(upsert) => upsert.serialize(serializer),
            Self::CreateTable(create) => create.serialize(serializer),
            Self::AlterTable(alter) => alter.serialize(serializer),
            Self::DropTable(drop) => drop.serialize(serializer),
            Self::CreateIndex(index) => index.serialize(serializer),
            Self::Raw(raw) => raw.serialize(serializer),
        }
    }

    /// Serializes the statement for `dialect`.
    #[must_use]
    pub fn to_sql(&self, dialect: &dyn Dialect) -> SerializedQuery {
        serialize(self, dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, RawQuery, Select};
    use crate::diagnostic::DiagnosticKind;
    use crate::dialect::{GenericDialect, PlaceholderStyle};

    struct Numbered;

    impl Dialect for Numbered {
        fn name(&self) -> &'static str {
            "numbered"
        }

        fn placeholder_style(&self) -> PlaceholderStyle {
            PlaceholderStyle::Numbered('$')
        }
    }

    #[test]
    fn test_placeholders_follow_bind_order() {
        let dialect = Numbered;
        let mut s = Serializer::new(&dialect);
        s.push_bind(SqlValue::Int(1));
        s.push(", ");
        s.push_bind(SqlValue::Int(2));
        let q = s.finish();
        assert_eq!(q.sql, "$1, $2");
        assert_eq!(q.binds, vec![SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn test_check_rejects_errors_only() {
        let dialect = GenericDialect::new();
        let mut s = Serializer::new(&dialect);
        s.report(Diagnostic::warning(DiagnosticKind::ReturningUnsupported, "w"));
        let q = s.finish();
        assert!(q.clone().check().is_ok());

        let mut s = Serializer::new(&dialect);
        s.report(Diagnostic::warning(DiagnosticKind::ReturningUnsupported, "w"));
        s.report(Diagnostic::error(DiagnosticKind::ConflictIgnoreUnsupported, "e"));
        let err = s.finish().check().unwrap_err();
        match err {
            SqlError::Rejected {
                dialect,
                diagnostics,
            } => {
                assert_eq!(dialect, "generic");
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].message, "e");
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_serialize_is_idempotent() {
        let statement = Statement::Select(Select {
            columns: vec![Expr::all()],
            tables: vec![Expr::identifier("t")],
            predicate: Some(Expr::binary(
                Expr::column("a"),
                crate::ast::BinaryOp::Eq,
                Expr::bind(1),
            )),
            ..Select::default()
        });
        let dialect = GenericDialect::new();
        assert_eq!(
            serialize(&statement, &dialect),
            serialize(&statement, &dialect)
        );
    }

    #[test]
    fn test_raw_keeps_caller_binds() {
        let statement = Statement::Raw(RawQuery {
            sql: String::from("SELECT * FROM t WHERE a = ? AND b = ?"),
            binds: vec![SqlValue::Int(1), SqlValue::Text(String::from("x"))],
        });
        let q = serialize(&statement, &GenericDialect::new());
        assert_eq!(q.sql, "SELECT * FROM t WHERE a = ? AND b = ?");
        assert_eq!(q.binds.len(), 2);
    }
}
