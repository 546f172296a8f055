//! INSERT builder.

use crate::ast::{ConflictClause, Expr, Insert};
use crate::error::{BuildError, Result};
use crate::record::SqlRecord;

use super::expr::{col, IntoExpr};

/// Builds an [`Insert`].
///
/// Rows are checked as they are added: against the column list when one is
/// set, otherwise against the first row.
#[derive(Debug, Clone)]
#[must_use]
pub struct InsertBuilder {
    insert: Insert,
}

impl InsertBuilder {
    /// Starts an INSERT into `table`.
    pub fn into_table(table: &str) -> Self {
        Self {
            insert: Insert::new(Expr::identifier(table)),
        }
    }

    /// Sets the column list.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnCountMismatch`] when rows were already
    /// added with a different width.
    pub fn columns(mut self, columns: &[&str]) -> Result<Self> {
        if let Some(row) = self.insert.rows.first() {
            check_width(columns.len(), row.len())?;
        }
        self.insert.columns = columns.iter().map(|c| String::from(*c)).collect();
        Ok(self)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnCountMismatch`] when a column list is
    /// set and the row has a different width.
    pub fn values<I, T>(mut self, row: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoExpr,
    {
        let row: Vec<Expr> = row.into_iter().map(IntoExpr::into_expr).collect();
        self.push_row(row)?;
        Ok(self)
    }

    /// Appends a record as a row, adopting its columns if none are set.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnCountMismatch`] when the record's width
    /// differs from the column list.
    pub fn model(mut self, record: &impl SqlRecord) -> Result<Self> {
        let (names, row): (Vec<String>, Vec<Expr>) = record.to_columns().into_iter().unzip();
        if self.insert.columns.is_empty() && self.insert.rows.is_empty() {
            self.insert.columns = names;
        }
        self.push_row(row)?;
        Ok(self)
    }

    /// Appends several records.
    ///
    /// # Errors
    ///
    /// Fails on the first record whose width does not match.
    pub fn models<'a, R, I>(self, records: I) -> Result<Self>
    where
        R: SqlRecord + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        records
            .into_iter()
            .try_fold(self, |builder, record| builder.model(record))
    }

    /// Skips rows that conflict with an existing unique key.
    pub fn ignoring_conflicts(mut self) -> Self {
        self.insert.conflict = Some(ConflictClause::do_nothing());
        self
    }

    /// Adds RETURNING columns.
    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.insert
            .returning
            .extend(columns.iter().copied().map(col));
        self
    }

    /// Finishes the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyClause`] when no row was added.
    pub fn build(self) -> Result<Insert> {
        if self.insert.rows.is_empty() {
            return Err(BuildError::EmptyClause("VALUES"));
        }
        Ok(self.insert)
    }

    fn push_row(&mut self, row: Vec<Expr>) -> Result<()> {
        let expected = if self.insert.columns.is_empty() {
            self.insert.rows.first().map_or(row.len(), Vec::len)
        } else {
            self.insert.columns.len()
        };
        check_width(expected, row.len())?;
        self.insert.rows.push(row);
        Ok(())
    }
}

const fn check_width(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(BuildError::ColumnCountMismatch { expected, found });
    }
    Ok(())
}
