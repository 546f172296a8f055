//! Statement and expression trees.
//!
//! Nodes are plain data. They carry no dialect knowledge and are turned into
//! SQL text by [`crate::serializer`].

mod conflict;
mod ddl;
mod expression;
mod statement;
mod types;

pub use conflict::{ConflictAction, ConflictClause, ConflictUpdate, Upsert};
pub use ddl::{
    AlterTable, ColumnConstraint, ColumnDefinition, ColumnRef, CreateIndex, CreateTable,
    DropTable, ForeignKeyAction, ForeignKeyConstraint, ForeignKeyReference, TableConstraint,
    UniqueConstraint,
};
pub use expression::{BinaryOp, Bind, Expr, FunctionCall, Literal};
pub use statement::{
    Assignment, Delete, Insert, Join, JoinType, OrderBy, OrderDirection, RawQuery, Select,
    Statement, Update,
};
pub use types::DataType;
