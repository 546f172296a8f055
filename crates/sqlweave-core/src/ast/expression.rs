//! Expression nodes.

use crate::error::{BuildError, Result};
use crate::value::{SqlValue, ToSqlValue};

use super::statement::Select;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    In,
    NotIn,
    Is,
    IsNot,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::Like
            | Self::NotLike
            | Self::In
            | Self::NotIn
            | Self::Is
            | Self::IsNot => 3,
            Self::Add | Self::Sub => 4,
            Self::Mul | Self::Div | Self::Mod => 5,
        }
    }

    /// `AND` or `OR`.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// Comparisons do not chain: `a = b = c` is always grouped explicitly.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        self.precedence() == 3
    }

    /// `(a op b) op c == a op (b op c)`.
    #[must_use]
    pub const fn is_associative(&self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Add | Self::Mul)
    }

    /// Whether the right-hand operand is a value list.
    #[must_use]
    pub const fn takes_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

/// Literal values written directly into the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `NULL`.
    Null,
    /// Boolean, rendered by the dialect.
    Boolean(bool),
    /// Numeric text, written verbatim.
    Numeric(String),
    /// String, quoted and escaped by the dialect.
    String(String),
    /// The dialect's default-value keyword.
    Default,
    /// `*`.
    All,
}

/// One or more values bound to placeholders.
///
/// A single value renders as one placeholder, several values as a
/// parenthesized placeholder list.
#[derive(Debug, Clone, PartialEq)]
pub struct Bind(Vec<SqlValue>);

impl Bind {
    /// Binds a single value.
    #[must_use]
    pub fn one<T: ToSqlValue>(value: T) -> Self {
        Self(vec![value.to_sql_value()])
    }

    /// Binds a list of values.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyBindList`] when `values` is empty.
    pub fn many<T, I>(values: I) -> Result<Self>
    where
        T: ToSqlValue,
        I: IntoIterator<Item = T>,
    {
        let values: Vec<SqlValue> = values.into_iter().map(ToSqlValue::to_sql_value).collect();
        if values.is_empty() {
            return Err(BuildError::EmptyBindList);
        }
        Ok(Self(values))
    }

    /// The bound values, in placeholder order.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.0
    }

    /// `true` when exactly one value is bound.
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.0.len() == 1
    }
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name, written verbatim.
    pub name: String,
    /// The arguments.
    pub args: Vec<Expr>,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A quoted identifier (table, alias, constraint).
    Identifier(String),

    /// A column reference, optionally qualified with its table.
    Column {
        /// Table name or alias.
        table: Option<String>,
        /// Column name, `*` for all columns.
        name: String,
    },

    /// A literal value.
    Literal(Literal),

    /// Bound parameter(s).
    Bind(Bind),

    /// Verbatim SQL.
    Raw(String),

    /// Binary operation.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// Parenthesized, comma separated list.
    Group(Vec<Expr>),

    /// Function call.
    Function(FunctionCall),

    /// Parenthesized sub-select.
    Subquery(Box<Select>),

    /// The value a conflicting row would have inserted for a column.
    Excluded(String),

    /// `expr AS alias`.
    Alias {
        /// The aliased expression.
        expr: Box<Expr>,
        /// The alias.
        alias: String,
    },
}

impl Expr {
    /// Creates a binary expression.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a table-qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Creates an identifier.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Binds a single value.
    #[must_use]
    pub fn bind<T: ToSqlValue>(value: T) -> Self {
        Self::Bind(Bind::one(value))
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Literal(Literal::Numeric(value.to_string()))
    }

    /// Creates a float literal. `NaN` and the infinities have no SQL
    /// literal spelling and are bound instead.
    #[must_use]
    pub fn float(value: f64) -> Self {
        if value.is_finite() {
            Self::Literal(Literal::Numeric(value.to_string()))
        } else {
            Self::bind(value)
        }
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// `*`.
    #[must_use]
    pub const fn all() -> Self {
        Self::Literal(Literal::All)
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall {
            name: name.into(),
            args,
        })
    }

    /// Wraps a SELECT as a sub-query.
    #[must_use]
    pub fn subquery(select: Select) -> Self {
        Self::Subquery(Box::new(select))
    }

    /// Number of values this expression will bind.
    #[must_use]
    pub fn bind_count(&self) -> usize {
        match self {
            Self::Bind(bind) => bind.values().len(),
            Self::Binary { left, right, .. } => left.bind_count() + right.bind_count(),
            Self::Group(items) => items.iter().map(Self::bind_count).sum(),
            Self::Function(call) => call.args.iter().map(Self::bind_count).sum(),
            Self::Subquery(select) => select.bind_count(),
            Self::Alias { expr, .. } => expr.bind_count(),
            Self::Identifier(_)
            | Self::Column { .. }
            | Self::Literal(_)
            | Self::Raw(_)
            | Self::Excluded(_) => 0,
        }
    }
}
