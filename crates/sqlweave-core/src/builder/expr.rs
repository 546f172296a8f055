//! Expression builder.
//!
//! Free functions create leaf expressions; combinators on [`Expr`] join
//! them. Plain Rust values passed to a combinator become bound parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::ast::{BinaryOp, Bind, Expr, Literal, OrderBy, OrderDirection, Select};
use crate::error::Result;
use crate::value::{SqlValue, ToSqlValue};

/// Anything that can stand on either side of an operator.
pub trait IntoExpr {
    /// Converts into an expression.
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for Select {
    fn into_expr(self) -> Expr {
        Expr::subquery(self)
    }
}

impl IntoExpr for SqlValue {
    fn into_expr(self) -> Expr {
        Expr::Bind(Bind::one(self))
    }
}

impl<T: ToSqlValue> IntoExpr for Option<T> {
    fn into_expr(self) -> Expr {
        Expr::bind(self)
    }
}

macro_rules! bind_into_expr {
    ($($ty:ty),*) => {
        $(
            impl IntoExpr for $ty {
                fn into_expr(self) -> Expr {
                    Expr::bind(self)
                }
            }
        )*
    };
}

bind_into_expr!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    String,
    &str,
    &String,
    Vec<u8>,
    &[u8],
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>
);

/// Creates a column reference.
#[must_use]
pub fn col(name: &str) -> Expr {
    Expr::column(name)
}

/// Creates a table-qualified column reference.
#[must_use]
pub fn table_col(table: &str, name: &str) -> Expr {
    Expr::qualified_column(table, name)
}

/// Creates a quoted identifier.
#[must_use]
pub fn ident(name: &str) -> Expr {
    Expr::identifier(name)
}

/// Binds a value.
#[must_use]
pub fn bind<T: ToSqlValue>(value: T) -> Expr {
    Expr::bind(value)
}

/// Inlines a value as a literal instead of binding it.
///
/// Blobs and non-finite floats have no portable literal spelling and stay
/// bound.
#[must_use]
pub fn lit<T: ToSqlValue>(value: T) -> Expr {
    match value.to_sql_value() {
        SqlValue::Null => Expr::null(),
        SqlValue::Bool(b) => Expr::boolean(b),
        SqlValue::Int(i) => Expr::integer(i),
        SqlValue::Float(f) => Expr::float(f),
        SqlValue::Text(s) => Expr::string(s),
        blob @ SqlValue::Blob(_) => blob.into_expr(),
    }
}

/// Binds a list of values, rendered as `(?, ?, ...)`.
///
/// # Errors
///
/// Returns [`crate::BuildError::EmptyBindList`] when `values` is empty.
pub fn bind_list<T, I>(values: I) -> Result<Expr>
where
    T: ToSqlValue,
    I: IntoIterator<Item = T>,
{
    Bind::many(values).map(Expr::Bind)
}

/// A function call.
#[must_use]
pub fn func(name: &str, args: Vec<Expr>) -> Expr {
    Expr::function(name, args)
}

/// The value the conflicting row would have inserted for `column`.
#[must_use]
pub fn excluded(column: &str) -> Expr {
    Expr::Excluded(String::from(column))
}

/// Verbatim SQL.
#[must_use]
pub fn raw_expr(sql: &str) -> Expr {
    Expr::Raw(String::from(sql))
}

/// `*`.
#[must_use]
pub const fn star() -> Expr {
    Expr::all()
}

/// The dialect's spelling of "use the column default".
#[must_use]
pub const fn default_value() -> Expr {
    Expr::Literal(Literal::Default)
}

impl Expr {
    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Eq, rhs.into_expr())
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::NotEq, rhs.into_expr())
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Lt, rhs.into_expr())
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::LtEq, rhs.into_expr())
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Gt, rhs.into_expr())
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::GtEq, rhs.into_expr())
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Like, pattern.into_expr())
    }

    /// Creates a NOT LIKE expression.
    #[must_use]
    pub fn not_like(self, pattern: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::NotLike, pattern.into_expr())
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::binary(self, BinaryOp::Is, Self::null())
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::binary(self, BinaryOp::IsNot, Self::null())
    }

    /// Creates an IN expression over bound values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuildError::EmptyBindList`] when `values` is empty.
    pub fn in_list<T, I>(self, values: I) -> Result<Self>
    where
        T: ToSqlValue,
        I: IntoIterator<Item = T>,
    {
        Ok(Self::binary(self, BinaryOp::In, bind_list(values)?))
    }

    /// Creates a NOT IN expression over bound values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BuildError::EmptyBindList`] when `values` is empty.
    pub fn not_in_list<T, I>(self, values: I) -> Result<Self>
    where
        T: ToSqlValue,
        I: IntoIterator<Item = T>,
    {
        Ok(Self::binary(self, BinaryOp::NotIn, bind_list(values)?))
    }

    /// Creates an IN expression over a sub-query or group.
    #[must_use]
    pub fn in_query(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::In, rhs.into_expr())
    }

    /// Combines with AND.
    #[must_use]
    pub fn and(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::And, rhs.into_expr())
    }

    /// Combines with OR.
    #[must_use]
    pub fn or(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Or, rhs.into_expr())
    }

    /// `self + rhs`.
    #[must_use]
    pub fn plus(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Add, rhs.into_expr())
    }

    /// `self - rhs`.
    #[must_use]
    pub fn minus(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Sub, rhs.into_expr())
    }

    /// `self * rhs`.
    #[must_use]
    pub fn times(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Mul, rhs.into_expr())
    }

    /// `self / rhs`.
    #[must_use]
    pub fn divided_by(self, rhs: impl IntoExpr) -> Self {
        Self::binary(self, BinaryOp::Div, rhs.into_expr())
    }

    /// `self AS alias`.
    #[must_use]
    pub fn alias(self, alias: &str) -> Self {
        Self::Alias {
            expr: Box::new(self),
            alias: String::from(alias),
        }
    }

    /// Ascending sort key.
    #[must_use]
    pub const fn asc(self) -> OrderBy {
        OrderBy {
            expr: self,
            direction: OrderDirection::Asc,
        }
    }

    /// Descending sort key.
    #[must_use]
    pub const fn desc(self) -> OrderBy {
        OrderBy {
            expr: self,
            direction: OrderDirection::Desc,
        }
    }
}
