//! SQL data type definitions.

use core::fmt;

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    // Integer types
    /// Small integer (2 bytes).
    Smallint,
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    Bigint,

    // Floating point
    /// Real (4-byte float).
    Real,
    /// Double precision (8-byte float).
    Double,
    /// Decimal with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },

    // String types
    /// Fixed-length character string.
    Char(Option<u32>),
    /// Variable-length character string.
    Varchar(Option<u32>),
    /// Text (variable length, no limit).
    Text,

    // Binary types
    /// Binary large object.
    Blob,

    // Date/time types
    /// Date.
    Date,
    /// Time.
    Time,
    /// Timestamp.
    Timestamp,

    /// Boolean.
    Boolean,

    /// Enumeration; how it renders is up to the dialect.
    Enum {
        /// Type name, used by dialects with named enum types.
        name: String,
        /// Allowed values, in order.
        variants: Vec<String>,
    },

    /// Database specific type, written verbatim.
    Custom(String),
}

impl DataType {
    /// Creates an enum type.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Enum {
            name: name.into(),
            variants: variants.into_iter().map(Into::into).collect(),
        }
    }

    /// ANSI spelling of the type.
    ///
    /// Enums have no portable spelling and render as `TEXT` here; dialects
    /// override this through [`crate::dialect::Dialect::data_type_name`].
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Smallint => String::from("SMALLINT"),
            Self::Integer => String::from("INTEGER"),
            Self::Bigint => String::from("BIGINT"),
            Self::Real => String::from("REAL"),
            Self::Double => String::from("DOUBLE"),
            Self::Decimal { precision, scale } => match (precision, scale) {
                (Some(p), Some(s)) => format!("DECIMAL({p}, {s})"),
                (Some(p), None) => format!("DECIMAL({p})"),
                _ => String::from("DECIMAL"),
            },
            Self::Char(len) => len.map_or_else(|| String::from("CHAR"), |n| format!("CHAR({n})")),
            Self::Varchar(len) => {
                len.map_or_else(|| String::from("VARCHAR"), |n| format!("VARCHAR({n})"))
            }
            Self::Text | Self::Enum { .. } => String::from("TEXT"),
            Self::Blob => String::from("BLOB"),
            Self::Date => String::from("DATE"),
            Self::Time => String::from("TIME"),
            Self::Timestamp => String::from("TIMESTAMP"),
            Self::Boolean => String::from("BOOLEAN"),
            Self::Custom(name) => name.clone(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
