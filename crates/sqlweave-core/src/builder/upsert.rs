//! UPSERT builder.
//!
//! The builder records intent only: targets, an optional condition and
//! the action. How (and whether) that intent is expressible is decided at
//! serialization time by the dialect.
//!
//! ```rust
//! use sqlweave_core::builder::{bind, upsert_into};
//!
//! let upsert = upsert_into("planets")
//!     .columns(&["id", "name"])?
//!     .values([bind(1), bind("Earth")])?
//!     .on_conflict(&["id"])
//!     .do_update(|update| update.set_excluded("name"))
//!     .build()?;
//! assert_eq!(upsert.conflict.targets.len(), 1);
//! # Ok::<(), sqlweave_core::BuildError>(())
//! ```

use crate::ast::{
    Assignment, BinaryOp, ConflictAction, ConflictClause, ConflictUpdate, Expr, Upsert,
};
use crate::error::{BuildError, Result};
use crate::record::SqlRecord;

use super::expr::{col, excluded, IntoExpr};
use super::insert::InsertBuilder;
use super::predicate::{fold, PredicateBuilder};

/// Builds the SET list of a conflict update.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ConflictUpdateBuilder {
    update: ConflictUpdate,
}

impl ConflictUpdateBuilder {
    /// An empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// `column = value`.
    pub fn set(mut self, column: &str, value: impl IntoExpr) -> Self {
        self.update
            .assignments
            .push(Assignment::new(column, value.into_expr()));
        self
    }

    /// `column = <excluded value of column>`.
    pub fn set_excluded(mut self, column: &str) -> Self {
        self.update
            .assignments
            .push(Assignment::new(column, excluded(column)));
        self
    }

    /// Assigns every column of `record` from its value in `record`.
    pub fn set_model(mut self, record: &impl SqlRecord) -> Self {
        self.update.assignments.extend(
            record
                .to_columns()
                .into_iter()
                .map(|(name, value)| Assignment::new(name, value)),
        );
        self
    }

    /// Assigns every column of `record` from the excluded row.
    pub fn set_excluded_model(mut self, record: &impl SqlRecord) -> Self {
        self.update.assignments.extend(
            record
                .column_names()
                .into_iter()
                .map(|name| Assignment::new(name.clone(), Expr::Excluded(name))),
        );
        self
    }

    fn build(self) -> Result<ConflictUpdate> {
        if self.update.assignments.is_empty() {
            return Err(BuildError::EmptyClause("DO UPDATE SET"));
        }
        Ok(self.update)
    }
}

impl PredicateBuilder for ConflictUpdateBuilder {
    fn predicate_mut(&mut self) -> &mut Option<Expr> {
        &mut self.update.predicate
    }
}

/// Builds an [`Upsert`].
#[derive(Debug, Clone)]
#[must_use]
pub struct UpsertBuilder {
    insert: InsertBuilder,
    targets: Vec<Expr>,
    condition: Option<Expr>,
    action: PendingAction,
}

#[derive(Debug, Clone)]
enum PendingAction {
    Nothing,
    Update(ConflictUpdateBuilder),
    Custom(Expr),
}

impl UpsertBuilder {
    /// Starts an upsert into `table`. The default action is DO NOTHING.
    pub fn into_table(table: &str) -> Self {
        Self {
            insert: InsertBuilder::into_table(table),
            targets: Vec::new(),
            condition: None,
            action: PendingAction::Nothing,
        }
    }

    /// Sets the column list.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnCountMismatch`] when rows were already
    /// added with a different width.
    pub fn columns(mut self, columns: &[&str]) -> Result<Self> {
        self.insert = self.insert.columns(columns)?;
        Ok(self)
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnCountMismatch`] on a width mismatch.
    pub fn values<I, T>(mut self, row: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: IntoExpr,
    {
        self.insert = self.insert.values(row)?;
        Ok(self)
    }

    /// Appends a record as a row.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::ColumnCountMismatch`] on a width mismatch.
    pub fn model(mut self, record: &impl SqlRecord) -> Result<Self> {
        self.insert = self.insert.model(record)?;
        Ok(self)
    }

    /// Adds RETURNING columns.
    pub fn returning(mut self, columns: &[&str]) -> Self {
        self.insert = self.insert.returning(columns);
        self
    }

    /// Columns identifying the conflicting unique index.
    pub fn on_conflict(mut self, targets: &[&str]) -> Self {
        self.targets = targets.iter().copied().map(col).collect();
        self
    }

    /// Arbitrary conflict target expressions.
    pub fn on_conflict_exprs(mut self, targets: Vec<Expr>) -> Self {
        self.targets = targets;
        self
    }

    /// ANDs a partial-index condition onto the conflict target.
    pub fn conflict_where(mut self, expr: impl IntoExpr) -> Self {
        fold(&mut self.condition, BinaryOp::And, expr.into_expr());
        self
    }

    /// Skips conflicting rows.
    pub fn do_nothing(mut self) -> Self {
        self.action = PendingAction::Nothing;
        self
    }

    /// Updates the existing row.
    pub fn do_update<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(ConflictUpdateBuilder) -> ConflictUpdateBuilder,
    {
        self.action = PendingAction::Update(configure(ConflictUpdateBuilder::new()));
        self
    }

    /// Caller supplied action, written verbatim after the conflict prefix.
    pub fn do_custom(mut self, action: impl IntoExpr) -> Self {
        self.action = PendingAction::Custom(action.into_expr());
        self
    }

    /// Finishes the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyClause`] when no row was added or the
    /// update assigns nothing.
    pub fn build(self) -> Result<Upsert> {
        let insert = self.insert.build()?;
        let action = match self.action {
            PendingAction::Nothing => ConflictAction::Nothing,
            PendingAction::Update(update) => ConflictAction::Update(update.build()?),
            PendingAction::Custom(expr) => ConflictAction::Custom(expr),
        };
        Ok(Upsert {
            insert,
            conflict: ConflictClause {
                targets: self.targets,
                condition: self.condition,
                action,
            },
        })
    }
}
