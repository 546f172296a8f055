//! SQL Dialect support.
//!
//! Different databases have different SQL syntax. A [`Dialect`] is a
//! read-only description of one variant: how it quotes, how it spells
//! placeholders and literals, and which statement forms it can express.
//! The serializer asks the dialect at every decision point and never
//! hard-codes a database.

mod generic;

pub use generic::GenericDialect;

use core::fmt;

use crate::ast::DataType;

/// How bound parameters are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `?` for every parameter.
    Positional,
    /// Prefix followed by the 1-based position: `$1`, `?1`.
    Numbered(char),
    /// Prefix, `p` and the 1-based position: `:p1`, `@p1`.
    Named(char),
}

impl PlaceholderStyle {
    /// Placeholder for the parameter at 1-based `position`.
    #[must_use]
    pub fn render(self, position: usize) -> String {
        match self {
            Self::Positional => String::from("?"),
            Self::Numbered(prefix) => format!("{prefix}{position}"),
            Self::Named(prefix) => format!("{prefix}p{position}"),
        }
    }
}

/// How enum column types are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumSyntax {
    /// `ENUM('a', 'b')` in the column definition.
    Inline,
    /// A named type created separately and referenced by name.
    TypeName,
    /// No enum types; columns fall back to text.
    Unsupported,
}

/// How a dialect spells INSERT conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertSyntax {
    /// `ON CONFLICT (targets) DO NOTHING | DO UPDATE SET ...` with an
    /// implicit `excluded` row.
    Standard,
    /// `ON DUPLICATE KEY UPDATE ...` with an `AS excluded` row alias.
    Nonspecific,
    /// `ON DUPLICATE KEY UPDATE ...` reading new values through `VALUES(col)`.
    NonspecificWithValues,
    /// No atomic upsert.
    Unsupported,
}

/// ALTER TABLE capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlterTableSyntax {
    /// Keyword introducing a column modification, e.g. `MODIFY COLUMN` or
    /// `ALTER COLUMN`. `None` means columns cannot be modified.
    pub alter_column_clause: Option<&'static str>,
    /// When set, a modification only changes the type and is written as
    /// `<clause> <name> <keyword> <type>`, e.g. `SET DATA TYPE`. Otherwise
    /// the full column definition follows the clause.
    pub alter_column_type_keyword: Option<&'static str>,
    /// Several alterations may share one statement.
    pub allows_batch: bool,
    /// `ADD CONSTRAINT` / `DROP CONSTRAINT` are available.
    pub supports_constraints: bool,
}

impl Default for AlterTableSyntax {
    fn default() -> Self {
        Self {
            alter_column_clause: None,
            alter_column_type_keyword: None,
            allows_batch: true,
            supports_constraints: true,
        }
    }
}

/// Trait for SQL dialect-specific behavior.
///
/// Every method except [`Dialect::name`] has an ANSI leaning default.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Returns the string literal quote character.
    fn string_quote(&self) -> char {
        '\''
    }

    /// Returns the parameter placeholder style.
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Positional
    }

    /// Spelling of a boolean literal.
    fn literal_boolean(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// Spelling of "use the column default" inside VALUES.
    fn literal_default(&self) -> &'static str {
        "DEFAULT"
    }

    /// Returns whether auto-incrementing primary keys are available.
    fn supports_auto_increment(&self) -> bool {
        true
    }

    /// Clause written after `PRIMARY KEY` for auto-incrementing columns.
    fn auto_increment_clause(&self) -> &'static str {
        "AUTOINCREMENT"
    }

    /// When set, auto-increment is written as `DEFAULT <function>` instead
    /// of [`Dialect::auto_increment_clause`].
    fn auto_increment_function(&self) -> Option<&'static str> {
        None
    }

    /// Returns whether `IF EXISTS` / `IF NOT EXISTS` are available on DDL.
    fn supports_if_exists(&self) -> bool {
        true
    }

    /// Returns whether the dialect supports RETURNING clause.
    fn supports_returning(&self) -> bool {
        false
    }

    /// ALTER TABLE capabilities.
    fn alter_table_syntax(&self) -> AlterTableSyntax {
        AlterTableSyntax::default()
    }

    /// How enum types are declared.
    fn enum_syntax(&self) -> EnumSyntax {
        EnumSyntax::Unsupported
    }

    /// Conflict resolution class.
    fn upsert_syntax(&self) -> UpsertSyntax {
        UpsertSyntax::Unsupported
    }

    /// Dialect specific spelling of a data type; `None` keeps
    /// [`DataType::to_sql`]. Enums are handled by [`Dialect::enum_syntax`]
    /// and never reach this method.
    fn data_type_name(&self, data_type: &DataType) -> Option<String> {
        let _ = data_type;
        None
    }

    /// Quotes an identifier, doubling embedded quote characters.
    fn quote_identifier(&self, name: &str) -> String {
        quote_with(self.identifier_quote(), name)
    }

    /// Quotes a string literal, doubling embedded quote characters.
    fn quote_string(&self, value: &str) -> String {
        quote_with(self.string_quote(), value)
    }
}

impl fmt::Debug for dyn Dialect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn quote_with(quote: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        if c == quote {
            out.push(quote);
        }
        out.push(c);
    }
    out.push(quote);
    out
}
