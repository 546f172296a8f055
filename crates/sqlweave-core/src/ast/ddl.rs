//! Schema definition nodes.

use super::expression::Expr;
use super::types::DataType;

/// Foreign key referential action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    Cascade,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// A column, optionally qualified with its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    /// Owning table, when known.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Unqualified column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Table-qualified column.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// `table.name` or `name`; the form used inside generated constraint names.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.table {
            Some(table) => format!("{table}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// `REFERENCES table (column)` with its referential actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyReference {
    /// Referenced table.
    pub table: String,
    /// Referenced column.
    pub column: String,
    /// ON DELETE action.
    pub on_delete: Option<ForeignKeyAction>,
    /// ON UPDATE action.
    pub on_update: Option<ForeignKeyAction>,
}

impl ForeignKeyReference {
    /// References `table(column)` with no explicit actions.
    #[must_use]
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            on_delete: None,
            on_update: None,
        }
    }
}

/// A constraint attached to one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnConstraint {
    /// PRIMARY KEY, optionally auto-incrementing.
    PrimaryKey {
        /// Let the database assign values.
        auto_increment: bool,
    },
    /// NOT NULL.
    NotNull,
    /// UNIQUE.
    Unique,
    /// DEFAULT expr.
    Default(Expr),
    /// REFERENCES ...
    References(ForeignKeyReference),
    /// CHECK (expr).
    Check(Expr),
    /// COLLATE name.
    Collate(String),
}

/// A column in CREATE TABLE or ALTER TABLE.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Column type.
    pub data_type: DataType,
    /// Column constraints, in order.
    pub constraints: Vec<ColumnConstraint>,
}

impl ColumnDefinition {
    /// A column with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
        }
    }
}

/// UNIQUE over one or more columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueConstraint {
    /// Covered columns.
    pub columns: Vec<ColumnRef>,
    /// Explicit name; generated when absent.
    pub name: Option<String>,
}

impl UniqueConstraint {
    /// The constraint name: the explicit one, or `uq:` followed by the
    /// columns joined with `+`.
    #[must_use]
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            let columns: Vec<String> = self.columns.iter().map(ColumnRef::qualified_name).collect();
            format!("uq:{}", columns.join("+"))
        })
    }
}

/// FOREIGN KEY from a local column to a foreign one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyConstraint {
    /// Referencing column.
    pub local: ColumnRef,
    /// Referenced column; its table is required.
    pub foreign: ColumnRef,
    /// ON DELETE action.
    pub on_delete: Option<ForeignKeyAction>,
    /// ON UPDATE action.
    pub on_update: Option<ForeignKeyAction>,
    /// Explicit name; generated when absent.
    pub name: Option<String>,
}

impl ForeignKeyConstraint {
    /// A foreign key from `local` to `foreign` with no actions.
    #[must_use]
    pub const fn new(local: ColumnRef, foreign: ColumnRef) -> Self {
        Self {
            local,
            foreign,
            on_delete: None,
            on_update: None,
            name: None,
        }
    }

    /// The constraint name: the explicit one, or `fk:local+foreign`.
    #[must_use]
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!(
                "fk:{}+{}",
                self.local.qualified_name(),
                self.foreign.qualified_name()
            )
        })
    }
}

/// A table level constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableConstraint {
    /// UNIQUE (...).
    Unique(UniqueConstraint),
    /// FOREIGN KEY (...) REFERENCES ...
    ForeignKey(ForeignKeyConstraint),
}

impl TableConstraint {
    /// The name emitted after `CONSTRAINT`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Unique(unique) => unique.name(),
            Self::ForeignKey(fk) => fk.name(),
        }
    }
}

/// `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Table name.
    pub table: String,
    /// CREATE TEMPORARY TABLE.
    pub temporary: bool,
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Columns.
    pub columns: Vec<ColumnDefinition>,
    /// Table constraints.
    pub constraints: Vec<TableConstraint>,
}

/// `ALTER TABLE`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlterTable {
    /// Table name.
    pub table: String,
    /// ADD COLUMN.
    pub add_columns: Vec<ColumnDefinition>,
    /// Column modifications.
    pub modify_columns: Vec<ColumnDefinition>,
    /// DROP COLUMN, by name.
    pub drop_columns: Vec<String>,
    /// ADD CONSTRAINT.
    pub add_constraints: Vec<TableConstraint>,
    /// DROP CONSTRAINT, by name.
    pub drop_constraints: Vec<String>,
}

impl AlterTable {
    /// An ALTER TABLE with no alterations.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Total number of alteration clauses.
    #[must_use]
    pub fn alteration_count(&self) -> usize {
        self.add_columns.len()
            + self.modify_columns.len()
            + self.drop_columns.len()
            + self.add_constraints.len()
            + self.drop_constraints.len()
    }

    /// One statement per alteration, in serialization order.
    ///
    /// For dialects that accept a single clause per ALTER TABLE.
    #[must_use]
    pub fn split(&self) -> Vec<Self> {
        let single = || Self::new(self.table.clone());
        let mut out = Vec::with_capacity(self.alteration_count());
        out.extend(self.add_columns.iter().map(|c| Self {
            add_columns: vec![c.clone()],
            ..single()
        }));
        out.extend(self.modify_columns.iter().map(|c| Self {
            modify_columns: vec![c.clone()],
            ..single()
        }));
        out.extend(self.drop_columns.iter().map(|c| Self {
            drop_columns: vec![c.clone()],
            ..single()
        }));
        out.extend(self.add_constraints.iter().map(|c| Self {
            add_constraints: vec![c.clone()],
            ..single()
        }));
        out.extend(self.drop_constraints.iter().map(|c| Self {
            drop_constraints: vec![c.clone()],
            ..single()
        }));
        out
    }
}

/// `DROP TABLE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Tables to drop.
    pub tables: Vec<String>,
    /// IF EXISTS.
    pub if_exists: bool,
}

/// `CREATE INDEX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndex {
    /// Index name.
    pub name: String,
    /// Indexed table.
    pub table: String,
    /// Indexed columns.
    pub columns: Vec<String>,
    /// CREATE UNIQUE INDEX.
    pub unique: bool,
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
}
