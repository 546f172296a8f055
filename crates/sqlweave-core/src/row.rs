//! Result row access.
//!
//! Drivers expose their rows through [`SqlRow`]; callers pull typed values
//! out with [`SqlRow::decode`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::RowDecodeError;
use crate::value::{SqlValue, ToSqlValue};

/// A type that can be read back from a [`SqlValue`].
pub trait FromSqlValue: Sized {
    /// Name used in mismatch errors.
    const EXPECTED: &'static str;

    /// Converts the stored value, or returns `None` if its kind does not fit.
    fn from_sql_value(value: &SqlValue) -> Option<Self>;
}

/// One row of a result set.
pub trait SqlRow {
    /// Column names in result order.
    fn columns(&self) -> Vec<&str>;

    /// The raw value stored under `column`.
    fn value(&self, column: &str) -> Option<&SqlValue>;

    /// Returns `true` if the row has `column`.
    fn contains(&self, column: &str) -> bool {
        self.value(column).is_some()
    }

    /// Returns `true` if `column` is present and NULL.
    fn is_null(&self, column: &str) -> bool {
        self.value(column).is_some_and(SqlValue::is_null)
    }

    /// Decodes `column` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RowDecodeError::MissingColumn`] when the column is absent and
    /// [`RowDecodeError::TypeMismatch`] when its value does not convert.
    fn decode<T: FromSqlValue>(&self, column: &str) -> Result<T, RowDecodeError> {
        let value = self
            .value(column)
            .ok_or_else(|| RowDecodeError::MissingColumn(String::from(column)))?;
        T::from_sql_value(value).ok_or_else(|| RowDecodeError::TypeMismatch {
            column: String::from(column),
            expected: T::EXPECTED,
            found: value.type_name(),
        })
    }
}

/// A row held in memory, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRow {
    entries: Vec<(String, SqlValue)>,
}

impl MemoryRow {
    /// An empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Lookups return the first column with a given name.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.entries.push((column.into(), value.to_sql_value()));
        self
    }
}

impl FromIterator<(String, SqlValue)> for MemoryRow {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl SqlRow for MemoryRow {
    fn columns(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn value(&self, column: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

impl FromSqlValue for SqlValue {
    const EXPECTED: &'static str = "any";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromSqlValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Bool(b) => Some(*b),
            SqlValue::Int(0) => Some(false),
            SqlValue::Int(1) => Some(true),
            _ => None,
        }
    }
}

impl FromSqlValue for i64 {
    const EXPECTED: &'static str = "int";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromSqlValue for i32 {
    const EXPECTED: &'static str = "int";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Int(i) => Self::try_from(*i).ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for f64 {
    const EXPECTED: &'static str = "float";

    #[allow(clippy::cast_precision_loss)]
    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Float(f) => Some(*f),
            SqlValue::Int(i) => Some(*i as Self),
            _ => None,
        }
    }
}

impl FromSqlValue for String {
    const EXPECTED: &'static str = "text";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromSqlValue for Vec<u8> {
    const EXPECTED: &'static str = "blob";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Blob(b) => Some(b.clone()),
            _ => None,
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }
        T::from_sql_value(value).map(Some)
    }
}

impl FromSqlValue for NaiveDate {
    const EXPECTED: &'static str = "date";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Text(s) => Self::parse_from_str(s, "%Y-%m-%d").ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for NaiveDateTime {
    const EXPECTED: &'static str = "datetime";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Text(s) => Self::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").ok(),
            _ => None,
        }
    }
}

impl FromSqlValue for DateTime<Utc> {
    const EXPECTED: &'static str = "timestamp";

    fn from_sql_value(value: &SqlValue) -> Option<Self> {
        match value {
            SqlValue::Text(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }
}
