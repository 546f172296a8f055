//! # sqlweave-core
//!
//! Dialect-aware SQL statement compiler.
//!
//! Statements are built as plain values, then serialized for a
//! [`Dialect`] into SQL text plus the bound values in placeholder order.
//! What a dialect cannot express is reported as [`Diagnostic`]s alongside
//! the text instead of silently disappearing.
//!
//! ## Upserts
//!
//! An upsert records intent (conflict targets, an optional condition and
//! an action) and the dialect decides how it is written:
//!
//! ```rust
//! use sqlweave_core::builder::{bind, upsert_into};
//! use sqlweave_core::{serialize, GenericDialect, Statement};
//!
//! let upsert = upsert_into("planets")
//!     .columns(&["id", "name"])?
//!     .values([bind(1), bind("Earth")])?
//!     .on_conflict(&["id"])
//!     .do_update(|update| update.set_excluded("name"))
//!     .build()?;
//!
//! // The generic dialect has no upsert syntax: the conflict clause is
//! // dropped and a warning says so.
//! let out = serialize(&Statement::from(upsert), &GenericDialect::new());
//! assert_eq!(out.sql, r#"INSERT INTO "planets" ("id", "name") VALUES (?, ?)"#);
//! assert_eq!(out.diagnostics.len(), 1);
//! assert!(!out.has_errors());
//! # Ok::<(), sqlweave_core::BuildError>(())
//! ```
//!
//! Concrete dialects live in the `sqlweave-dialects` crate.

pub mod ast;
pub mod builder;
pub mod diagnostic;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod record;
pub mod row;
pub mod serializer;
pub mod value;

pub use ast::{Expr, Statement};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use dialect::{
    AlterTableSyntax, Dialect, EnumSyntax, GenericDialect, PlaceholderStyle, UpsertSyntax,
};
pub use error::{BuildError, RowDecodeError, SqlError};
pub use executor::Executor;
pub use record::SqlRecord;
pub use row::{FromSqlValue, MemoryRow, SqlRow};
pub use serializer::{serialize, SerializedQuery, Serializer};
pub use value::{SqlValue, ToSqlValue};
