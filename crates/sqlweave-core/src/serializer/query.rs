//! SELECT, UPDATE, DELETE and raw statements.

use crate::ast::{Assignment, Delete, Expr, RawQuery, Select, Update};
use crate::diagnostic::{Diagnostic, DiagnosticKind};

use super::Serializer;

impl Select {
    /// Writes the SELECT into `serializer`.
    ///
    /// Empty clauses are omitted, so a default `Select` renders as `SELECT`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("SELECT");
        if self.distinct {
            s.push(" DISTINCT");
        }
        if !self.columns.is_empty() {
            s.push(" ");
            s.push_list(&self.columns, ", ", |s, column| column.serialize(s));
        }
        if !self.tables.is_empty() {
            s.push(" FROM ");
            s.push_list(&self.tables, ", ", |s, table| table.serialize(s));
        }
        for join in &self.joins {
            s.push(" ");
            s.push(join.method.as_str());
            s.push(" ");
            join.table.serialize(s);
            if let Some(condition) = &join.condition {
                s.push(" ON ");
                condition.serialize(s);
            }
        }
        write_where(self.predicate.as_ref(), s);
        if !self.group_by.is_empty() {
            s.push(" GROUP BY ");
            s.push_list(&self.group_by, ", ", |s, key| key.serialize(s));
        }
        if let Some(having) = &self.having {
            s.push(" HAVING ");
            having.serialize(s);
        }
        if !self.order_by.is_empty() {
            s.push(" ORDER BY ");
            s.push_list(&self.order_by, ", ", |s, order| {
                order.expr.serialize(s);
                s.push(" ");
                s.push(order.direction.as_str());
            });
        }
        if let Some(limit) = self.limit {
            s.push(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            s.push(&format!(" OFFSET {offset}"));
        }
    }
}

impl Update {
    /// Writes the UPDATE into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("UPDATE ");
        self.table.serialize(s);
        s.push(" SET ");
        write_assignments(&self.assignments, s);
        write_where(self.predicate.as_ref(), s);
        write_returning(&self.returning, s);
    }
}

impl Delete {
    /// Writes the DELETE into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("DELETE FROM ");
        self.table.serialize(s);
        write_where(self.predicate.as_ref(), s);
        write_returning(&self.returning, s);
    }
}

impl RawQuery {
    /// Writes the text verbatim and collects the caller's binds.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push(&self.sql);
        for value in &self.binds {
            s.append_bind(value.clone());
        }
    }
}

fn write_where(predicate: Option<&Expr>, s: &mut Serializer<'_>) {
    if let Some(predicate) = predicate {
        s.push(" WHERE ");
        predicate.serialize(s);
    }
}

pub(super) fn write_assignments(assignments: &[Assignment], s: &mut Serializer<'_>) {
    s.push_list(assignments, ", ", |s, assignment| {
        assignment.column.serialize(s);
        s.push(" = ");
        assignment.value.serialize(s);
    });
}

pub(super) fn write_returning(returning: &[Expr], s: &mut Serializer<'_>) {
    if returning.is_empty() {
        return;
    }
    if s.dialect().supports_returning() {
        s.push(" RETURNING ");
        s.push_list(returning, ", ", |s, column| column.serialize(s));
    } else {
        let message = format!(
            "dialect `{}` does not support RETURNING; clause dropped",
            s.dialect().name()
        );
        s.report(Diagnostic::warning(DiagnosticKind::ReturningUnsupported, message));
    }
}
