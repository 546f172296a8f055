//! UPDATE builder.

use crate::ast::{Assignment, Expr, Update};
use crate::error::{BuildError, Result};
use crate::record::SqlRecord;

use super::expr::{col, ident, IntoExpr};
use super::predicate::PredicateBuilder;

/// Builds an [`Update`].
#[derive(Debug, Clone)]
#[must_use]
pub struct UpdateBuilder {
    update: Update,
}

impl UpdateBuilder {
    /// Starts an UPDATE of `table`.
    pub fn table(table: &str) -> Self {
        Self {
            update: Update {
                table: ident(table),
                assignments: Vec::new(),
                predicate: None,
                returning: Vec::new(),
            },
        }
    }

    /// `column = value`.
    pub fn set(mut self, column: &str, value: impl IntoExpr) -> Self {
        self.update
            .assignments
            .push(Assignment::new(column, value.into_expr()));
        self
    }

    /// Assigns every column of `record`.
    pub fn set_model(mut self, record: &impl SqlRecord) -> Self {
        self.update.assignments.extend(
            record
                .to_columns()
                .into_iter()
                .map(|(name, value)| Assignment::new(name, value)),
        );
        self
    }

    /// Adds RETURNING columns.
    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.update
            .returning
            .extend(columns.iter().copied().map(col));
        self
    }

    /// Finishes the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyClause`] when nothing is assigned.
    pub fn build(self) -> Result<Update> {
        if self.update.assignments.is_empty() {
            return Err(BuildError::EmptyClause("SET"));
        }
        Ok(self.update)
    }
}

impl PredicateBuilder for UpdateBuilder {
    fn predicate_mut(&mut self) -> &mut Option<Expr> {
        &mut self.update.predicate
    }
}
