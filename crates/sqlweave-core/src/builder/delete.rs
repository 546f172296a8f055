//! DELETE builder.

use crate::ast::{Delete, Expr};

use super::expr::{col, ident};
use super::predicate::PredicateBuilder;

/// Builds a [`Delete`].
///
/// A DELETE without a predicate removes every row; that is allowed.
#[derive(Debug, Clone)]
#[must_use]
pub struct DeleteBuilder {
    delete: Delete,
}

impl DeleteBuilder {
    /// Starts a DELETE from `table`.
    pub fn from_table(table: &str) -> Self {
        Self {
            delete: Delete {
                table: ident(table),
                predicate: None,
                returning: Vec::new(),
            },
        }
    }

    /// Adds RETURNING columns.
    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.delete
            .returning
            .extend(columns.iter().copied().map(col));
        self
    }

    /// Finishes the statement.
    pub fn build(self) -> Delete {
        self.delete
    }
}

impl PredicateBuilder for DeleteBuilder {
    fn predicate_mut(&mut self) -> &mut Option<Expr> {
        &mut self.delete.predicate
    }
}
