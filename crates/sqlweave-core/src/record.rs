//! Typed records as column lists.
//!
//! Turning a struct into `(column, value)` pairs is left to the caller (or
//! a derive in another crate); builders only consume the result.

use crate::ast::Expr;

/// A value that can be written as one row.
///
/// ```rust
/// use sqlweave_core::{Expr, SqlRecord};
///
/// struct Planet {
///     name: String,
///     moons: i64,
/// }
///
/// impl SqlRecord for Planet {
///     fn to_columns(&self) -> Vec<(String, Expr)> {
///         vec![
///             (String::from("name"), Expr::bind(self.name.clone())),
///             (String::from("moons"), Expr::bind(self.moons)),
///         ]
///     }
/// }
/// ```
pub trait SqlRecord {
    /// Column names with their values, in column order.
    fn to_columns(&self) -> Vec<(String, Expr)>;

    /// Column names only.
    fn column_names(&self) -> Vec<String> {
        self.to_columns().into_iter().map(|(name, _)| name).collect()
    }
}
