//! DML statement nodes.

use crate::value::SqlValue;

use super::conflict::{ConflictClause, Upsert};
use super::ddl::{AlterTable, CreateIndex, CreateTable, DropTable};
use super::expression::Expr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending (default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    /// The sort key.
    pub expr: Expr,
    /// The direction.
    pub direction: OrderDirection,
}

/// Join method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    /// INNER JOIN.
    #[default]
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// A JOIN clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Join method.
    pub method: JoinType,
    /// Joined table.
    pub table: Expr,
    /// ON condition.
    pub condition: Option<Expr>,
}

/// `SELECT`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    /// DISTINCT flag.
    pub distinct: bool,
    /// Result columns; may repeat.
    pub columns: Vec<Expr>,
    /// FROM tables.
    pub tables: Vec<Expr>,
    /// JOIN clauses.
    pub joins: Vec<Join>,
    /// WHERE predicate.
    pub predicate: Option<Expr>,
    /// GROUP BY keys.
    pub group_by: Vec<Expr>,
    /// HAVING predicate.
    pub having: Option<Expr>,
    /// ORDER BY entries.
    pub order_by: Vec<OrderBy>,
    /// LIMIT.
    pub limit: Option<u64>,
    /// OFFSET.
    pub offset: Option<u64>,
}

impl Select {
    /// Number of values this statement will bind.
    #[must_use]
    pub fn bind_count(&self) -> usize {
        let exprs = self
            .columns
            .iter()
            .chain(&self.tables)
            .chain(self.joins.iter().map(|j| &j.table))
            .chain(self.joins.iter().filter_map(|j| j.condition.as_ref()))
            .chain(&self.predicate)
            .chain(&self.group_by)
            .chain(&self.having)
            .chain(self.order_by.iter().map(|o| &o.expr));
        exprs.map(Expr::bind_count).sum()
    }
}

/// `INSERT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table.
    pub table: Expr,
    /// Column list; empty means "all columns in table order".
    pub columns: Vec<String>,
    /// Value rows. With a column list, every row has `columns.len()` entries.
    pub rows: Vec<Vec<Expr>>,
    /// Conflict handling.
    pub conflict: Option<ConflictClause>,
    /// RETURNING list.
    pub returning: Vec<Expr>,
}

impl Insert {
    /// Creates an empty INSERT into `table`.
    #[must_use]
    pub fn new(table: Expr) -> Self {
        Self {
            table,
            columns: Vec::new(),
            rows: Vec::new(),
            conflict: None,
            returning: Vec::new(),
        }
    }
}

/// `column = value` in a SET list.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Assigned column.
    pub column: Expr,
    /// New value.
    pub value: Expr,
}

impl Assignment {
    /// Creates an assignment to an unqualified column.
    #[must_use]
    pub fn new(column: impl Into<String>, value: Expr) -> Self {
        Self {
            column: Expr::column(column),
            value,
        }
    }
}

/// `UPDATE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table.
    pub table: Expr,
    /// SET list, in order.
    pub assignments: Vec<Assignment>,
    /// WHERE predicate.
    pub predicate: Option<Expr>,
    /// RETURNING list.
    pub returning: Vec<Expr>,
}

/// `DELETE`.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Target table.
    pub table: Expr,
    /// WHERE predicate.
    pub predicate: Option<Expr>,
    /// RETURNING list.
    pub returning: Vec<Expr>,
}

/// Verbatim SQL with caller supplied binds.
///
/// Placeholders inside `sql` are written by the caller and must already
/// match the target dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuery {
    /// SQL text.
    pub sql: String,
    /// Bound values.
    pub binds: Vec<SqlValue>,
}

/// Any statement the serializer understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT.
    Select(Select),
    /// INSERT.
    Insert(Insert),
    /// UPDATE.
    Update(Update),
    /// DELETE.
    Delete(Delete),
    /// INSERT with conflict resolution.
    Upsert(Upsert),
    /// CREATE TABLE.
    CreateTable(CreateTable),
    /// ALTER TABLE.
    AlterTable(AlterTable),
    /// DROP TABLE.
    DropTable(DropTable),
    /// CREATE INDEX.
    CreateIndex(CreateIndex),
    /// Raw SQL.
    Raw(RawQuery),
}

macro_rules! impl_into_statement {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Statement {
                fn from(statement: $ty) -> Self {
                    Self::$ty(statement)
                }
            }
        )*
    };
}

impl_into_statement!(
    Select,
    Insert,
    Update,
    Delete,
    Upsert,
    CreateTable,
    AlterTable,
    DropTable,
    CreateIndex
);

impl From<RawQuery> for Statement {
    fn from(raw: RawQuery) -> Self {
        Self::Raw(raw)
    }
}
