//! The boundary to a database driver.

use tracing::debug;

use crate::ast::Statement;
use crate::dialect::Dialect;
use crate::error::SqlError;
use crate::row::SqlRow;
use crate::serializer::serialize;
use crate::value::SqlValue;

/// Something that runs SQL text against a database.
///
/// Implementors supply [`Executor::execute`]; [`Executor::run`] turns a
/// statement into text for the executor's dialect first and refuses to
/// send anything the dialect could not express.
pub trait Executor {
    /// Row type returned by the driver.
    type Row: SqlRow;
    /// Driver error, able to carry [`SqlError`].
    type Error: From<SqlError>;

    /// The dialect statements are serialized for.
    fn dialect(&self) -> &dyn Dialect;

    /// Runs already serialized SQL.
    ///
    /// # Errors
    ///
    /// Whatever the driver reports.
    fn execute(&mut self, sql: &str, binds: &[SqlValue]) -> Result<Vec<Self::Row>, Self::Error>;

    /// Serializes `statement` and runs it.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Rejected`] (converted into `Self::Error`) when
    /// serialization produced an error-severity diagnostic; otherwise
    /// whatever [`Executor::execute`] returns.
    fn run(&mut self, statement: &Statement) -> Result<Vec<Self::Row>, Self::Error> {
        let query = serialize(statement, self.dialect()).check()?;
        debug!(dialect = %query.dialect, sql = %query.sql, "Running statement");
        self.execute(&query.sql, &query.binds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{bind, insert_into, upsert_into};
    use crate::diagnostic::DiagnosticKind;
    use crate::dialect::GenericDialect;
    use crate::row::MemoryRow;

    #[derive(Default)]
    struct RecordingExecutor {
        dialect: GenericDialect,
        sent: Vec<(String, Vec<SqlValue>)>,
    }

    impl Executor for RecordingExecutor {
        type Row = MemoryRow;
        type Error = SqlError;

        fn dialect(&self) -> &dyn Dialect {
            &self.dialect
        }

        fn execute(&mut self, sql: &str, binds: &[SqlValue]) -> Result<Vec<MemoryRow>, SqlError> {
            self.sent.push((String::from(sql), binds.to_vec()));
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_run_sends_serialized_text() {
        let mut executor = RecordingExecutor::default();
        let insert = insert_into("planets")
            .columns(&["name"])
            .unwrap()
            .values([bind("Mars")])
            .unwrap()
            .build()
            .unwrap();
        executor.run(&Statement::from(insert)).unwrap();
        assert_eq!(
            executor.sent,
            vec![(
                String::from(r#"INSERT INTO "planets" ("name") VALUES (?)"#),
                vec![SqlValue::Text(String::from("Mars"))]
            )]
        );
    }

    #[test]
    fn test_run_rejects_inexpressible_statement() {
        let mut executor = RecordingExecutor::default();
        let upsert = upsert_into("planets")
            .columns(&["name"])
            .unwrap()
            .values([bind("Mars")])
            .unwrap()
            .do_nothing()
            .build()
            .unwrap();
        let err = executor.run(&Statement::from(upsert)).unwrap_err();
        let SqlError::Rejected { dialect, diagnostics } = err else {
            panic!("Expected Rejected, got {err:?}");
        };
        assert_eq!(dialect, "generic");
        assert_eq!(diagnostics[0].kind, DiagnosticKind::ConflictIgnoreUnsupported);
        assert!(executor.sent.is_empty());
    }
}
