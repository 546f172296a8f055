//! SELECT builder.

use crate::ast::{BinaryOp, Expr, Join, JoinType, OrderBy, Select};

use super::expr::{col, ident, IntoExpr};
use super::predicate::{fold, PredicateBuilder};

/// Builds a [`Select`].
///
/// Nothing is mandatory: a builder with no columns and no tables still
/// produces a complete (if vacuous) statement.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct SelectBuilder {
    select: Select,
}

impl SelectBuilder {
    /// An empty SELECT.
    pub fn new() -> Self {
        Self::default()
    }

    /// SELECT DISTINCT.
    pub const fn distinct(mut self) -> Self {
        self.select.distinct = true;
        self
    }

    /// Adds columns by name.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.select
            .columns
            .extend(columns.iter().copied().map(col));
        self
    }

    /// Adds a result expression.
    pub fn column(mut self, expr: impl IntoExpr) -> Self {
        self.select.columns.push(expr.into_expr());
        self
    }

    /// Adds a table.
    pub fn from(mut self, table: &str) -> Self {
        self.select.tables.push(ident(table));
        self
    }

    /// Adds a table expression (aliased table, sub-query).
    pub fn from_expr(mut self, table: impl IntoExpr) -> Self {
        self.select.tables.push(table.into_expr());
        self
    }

    /// Adds a join.
    pub fn join_with(mut self, method: JoinType, table: impl IntoExpr, on: Option<Expr>) -> Self {
        self.select.joins.push(Join {
            method,
            table: table.into_expr(),
            condition: on,
        });
        self
    }

    /// INNER JOIN `table` ON `on`.
    pub fn join(self, table: &str, on: impl IntoExpr) -> Self {
        self.join_with(JoinType::Inner, ident(table), Some(on.into_expr()))
    }

    /// LEFT JOIN `table` ON `on`.
    pub fn left_join(self, table: &str, on: impl IntoExpr) -> Self {
        self.join_with(JoinType::Left, ident(table), Some(on.into_expr()))
    }

    /// Adds a GROUP BY key.
    pub fn group_by(mut self, key: impl IntoExpr) -> Self {
        self.select.group_by.push(key.into_expr());
        self
    }

    /// ANDs onto the HAVING predicate.
    pub fn having(mut self, expr: impl IntoExpr) -> Self {
        fold(&mut self.select.having, BinaryOp::And, expr.into_expr());
        self
    }

    /// ORs onto the HAVING predicate.
    pub fn or_having(mut self, expr: impl IntoExpr) -> Self {
        fold(&mut self.select.having, BinaryOp::Or, expr.into_expr());
        self
    }

    /// Adds an ORDER BY entry.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.select.order_by.push(order);
        self
    }

    /// Sets LIMIT.
    pub const fn limit(mut self, limit: u64) -> Self {
        self.select.limit = Some(limit);
        self
    }

    /// Sets OFFSET.
    pub const fn offset(mut self, offset: u64) -> Self {
        self.select.offset = Some(offset);
        self
    }

    /// Finishes the statement.
    pub fn build(self) -> Select {
        self.select
    }
}

impl PredicateBuilder for SelectBuilder {
    fn predicate_mut(&mut self) -> &mut Option<Expr> {
        &mut self.select.predicate
    }
}

impl IntoExpr for SelectBuilder {
    fn into_expr(self) -> Expr {
        Expr::subquery(self.select)
    }
}
