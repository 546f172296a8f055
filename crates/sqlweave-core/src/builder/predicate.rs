//! WHERE composition shared by every predicate-bearing builder.

use crate::ast::{BinaryOp, Expr};

use super::expr::IntoExpr;

/// Folds `expr` into `slot` with `op`: the first call sets the predicate,
/// later calls build a left-associative `existing op expr` tree.
pub(crate) fn fold(slot: &mut Option<Expr>, op: BinaryOp, expr: Expr) {
    *slot = Some(match slot.take() {
        Some(existing) => Expr::binary(existing, op, expr),
        None => expr,
    });
}

/// A builder that owns a single optional predicate.
///
/// `where_clause(a).where_clause(b).or_where_clause(c)` produces
/// `(a AND b) OR c`.
pub trait PredicateBuilder: Sized {
    /// The predicate slot.
    fn predicate_mut(&mut self) -> &mut Option<Expr>;

    /// ANDs `expr` onto the predicate.
    #[must_use]
    fn where_clause(mut self, expr: impl IntoExpr) -> Self {
        fold(self.predicate_mut(), BinaryOp::And, expr.into_expr());
        self
    }

    /// ORs `expr` onto the predicate.
    #[must_use]
    fn or_where_clause(mut self, expr: impl IntoExpr) -> Self {
        fold(self.predicate_mut(), BinaryOp::Or, expr.into_expr());
        self
    }

    /// ANDs `lhs op rhs` onto the predicate.
    #[must_use]
    fn where_op(self, lhs: impl IntoExpr, op: BinaryOp, rhs: impl IntoExpr) -> Self {
        self.where_clause(Expr::binary(lhs.into_expr(), op, rhs.into_expr()))
    }

    /// ORs `lhs op rhs` onto the predicate.
    #[must_use]
    fn or_where_op(self, lhs: impl IntoExpr, op: BinaryOp, rhs: impl IntoExpr) -> Self {
        self.or_where_clause(Expr::binary(lhs.into_expr(), op, rhs.into_expr()))
    }
}
