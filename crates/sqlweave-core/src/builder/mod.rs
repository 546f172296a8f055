//! Statement builders.
//!
//! Builders take `self` by value and produce plain AST values. They know
//! nothing about dialects: the same statement can be serialized for any of
//! them.
//!
//! # Example
//!
//! ```rust
//! use sqlweave_core::builder::{col, select, PredicateBuilder};
//! use sqlweave_core::{serialize, GenericDialect, Statement};
//!
//! let query = select()
//!     .columns(&["id", "name"])
//!     .from("planets")
//!     .where_clause(col("mass").gt(1.5))
//!     .or_where_clause(col("name").eq("Earth"))
//!     .build();
//!
//! let out = serialize(&Statement::from(query), &GenericDialect::new());
//! assert_eq!(
//!     out.sql,
//!     r#"SELECT "id", "name" FROM "planets" WHERE "mass" > ? OR "name" = ?"#
//! );
//! assert_eq!(out.binds.len(), 2);
//! ```

mod column;
mod delete;
mod expr;
mod insert;
mod predicate;
mod raw;
mod schema;
mod select;
mod update;
mod upsert;

pub use column::{
    bigint, blob, boolean, double, enumeration, integer, smallint, text, timestamp, varchar,
    ColumnBuilder,
};
pub use delete::DeleteBuilder;
pub use expr::{
    bind, bind_list, col, default_value, excluded, func, ident, lit, raw_expr, star, table_col,
    IntoExpr,
};
pub use insert::InsertBuilder;
pub use predicate::PredicateBuilder;
pub use raw::RawBuilder;
pub use schema::{AlterTableBuilder, CreateIndexBuilder, CreateTableBuilder, DropTableBuilder};
pub use select::SelectBuilder;
pub use update::UpdateBuilder;
pub use upsert::{ConflictUpdateBuilder, UpsertBuilder};

/// Starts a SELECT.
#[must_use]
pub fn select() -> SelectBuilder {
    SelectBuilder::new()
}

/// Starts an INSERT into `table`.
#[must_use]
pub fn insert_into(table: &str) -> InsertBuilder {
    InsertBuilder::into_table(table)
}

/// Starts an UPDATE of `table`.
#[must_use]
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::table(table)
}

/// Starts a DELETE from `table`.
#[must_use]
pub fn delete_from(table: &str) -> DeleteBuilder {
    DeleteBuilder::from_table(table)
}

/// Starts an INSERT with a conflict clause.
#[must_use]
pub fn upsert_into(table: &str) -> UpsertBuilder {
    UpsertBuilder::into_table(table)
}

/// Starts a CREATE TABLE.
#[must_use]
pub fn create_table(table: &str) -> CreateTableBuilder {
    CreateTableBuilder::new(table)
}

/// Starts an ALTER TABLE.
#[must_use]
pub fn alter_table(table: &str) -> AlterTableBuilder {
    AlterTableBuilder::new(table)
}

/// Starts a DROP TABLE.
#[must_use]
pub fn drop_table(table: &str) -> DropTableBuilder {
    DropTableBuilder::new(table)
}

/// Starts a CREATE INDEX.
#[must_use]
pub fn create_index(name: &str) -> CreateIndexBuilder {
    CreateIndexBuilder::new(name)
}

/// Starts a raw statement.
#[must_use]
pub fn raw(sql: &str) -> RawBuilder {
    RawBuilder::new(sql)
}
