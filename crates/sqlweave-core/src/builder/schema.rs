//! DDL builders.

use crate::ast::{
    AlterTable, ColumnDefinition, ColumnRef, CreateIndex, CreateTable, DropTable,
    ForeignKeyAction, ForeignKeyConstraint, TableConstraint, UniqueConstraint,
};
use crate::error::{BuildError, Result};

/// Builds a [`CreateTable`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CreateTableBuilder {
    create: CreateTable,
}

impl CreateTableBuilder {
    /// Starts a CREATE TABLE.
    pub fn new(table: &str) -> Self {
        Self {
            create: CreateTable {
                table: String::from(table),
                temporary: false,
                if_not_exists: false,
                columns: Vec::new(),
                constraints: Vec::new(),
            },
        }
    }

    /// CREATE TEMPORARY TABLE.
    pub const fn temporary(mut self) -> Self {
        self.create.temporary = true;
        self
    }

    /// Adds IF NOT EXISTS.
    pub const fn if_not_exists(mut self) -> Self {
        self.create.if_not_exists = true;
        self
    }

    /// Adds a column.
    pub fn column(mut self, column: impl Into<ColumnDefinition>) -> Self {
        self.create.columns.push(column.into());
        self
    }

    /// Adds a UNIQUE constraint over `columns`.
    pub fn unique(mut self, columns: &[&str]) -> Self {
        self.create
            .constraints
            .push(unique_constraint(&self.create.table, None, columns));
        self
    }

    /// Adds a UNIQUE constraint with an explicit name.
    pub fn unique_named(mut self, name: &str, columns: &[&str]) -> Self {
        self.create
            .constraints
            .push(unique_constraint(&self.create.table, Some(name), columns));
        self
    }

    /// Adds a FOREIGN KEY constraint.
    pub fn foreign_key(
        mut self,
        local: &str,
        foreign_table: &str,
        foreign_column: &str,
        on_delete: Option<ForeignKeyAction>,
        on_update: Option<ForeignKeyAction>,
    ) -> Self {
        let constraint = foreign_key_constraint(
            &self.create.table,
            local,
            foreign_table,
            foreign_column,
            on_delete,
            on_update,
        );
        self.create.constraints.push(constraint);
        self
    }

    /// Adds an arbitrary table constraint.
    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.create.constraints.push(constraint);
        self
    }

    /// Finishes the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyClause`] when no column was added.
    pub fn build(self) -> Result<CreateTable> {
        if self.create.columns.is_empty() {
            return Err(BuildError::EmptyClause("column list"));
        }
        Ok(self.create)
    }
}

/// Builds an [`AlterTable`].
#[derive(Debug, Clone)]
#[must_use]
pub struct AlterTableBuilder {
    alter: AlterTable,
}

impl AlterTableBuilder {
    /// Starts an ALTER TABLE.
    pub fn new(table: &str) -> Self {
        Self {
            alter: AlterTable::new(table),
        }
    }

    /// ADD COLUMN.
    pub fn add_column(mut self, column: impl Into<ColumnDefinition>) -> Self {
        self.alter.add_columns.push(column.into());
        self
    }

    /// Modifies an existing column.
    pub fn modify_column(mut self, column: impl Into<ColumnDefinition>) -> Self {
        self.alter.modify_columns.push(column.into());
        self
    }

    /// DROP COLUMN.
    pub fn drop_column(mut self, name: &str) -> Self {
        self.alter.drop_columns.push(String::from(name));
        self
    }

    /// ADD a UNIQUE constraint. Columns are qualified with this table in the
    /// generated name.
    pub fn add_unique(mut self, columns: &[&str]) -> Self {
        let constraint = unique_constraint(&self.alter.table, None, columns);
        self.alter.add_constraints.push(constraint);
        self
    }

    /// ADD a FOREIGN KEY constraint.
    pub fn add_foreign_key(
        mut self,
        local: &str,
        foreign_table: &str,
        foreign_column: &str,
        on_delete: Option<ForeignKeyAction>,
        on_update: Option<ForeignKeyAction>,
    ) -> Self {
        let constraint = foreign_key_constraint(
            &self.alter.table,
            local,
            foreign_table,
            foreign_column,
            on_delete,
            on_update,
        );
        self.alter.add_constraints.push(constraint);
        self
    }

    /// DROP CONSTRAINT by name.
    pub fn drop_constraint(mut self, name: &str) -> Self {
        self.alter.drop_constraints.push(String::from(name));
        self
    }

    /// Finishes the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyClause`] when nothing is altered.
    pub fn build(self) -> Result<AlterTable> {
        if self.alter.alteration_count() == 0 {
            return Err(BuildError::EmptyClause("ALTER TABLE"));
        }
        Ok(self.alter)
    }
}

/// Builds a [`DropTable`].
#[derive(Debug, Clone)]
#[must_use]
pub struct DropTableBuilder {
    drop: DropTable,
}

impl DropTableBuilder {
    /// Starts a DROP TABLE.
    pub fn new(table: &str) -> Self {
        Self {
            drop: DropTable {
                tables: vec![String::from(table)],
                if_exists: false,
            },
        }
    }

    /// Drops another table in the same statement.
    pub fn table(mut self, table: &str) -> Self {
        self.drop.tables.push(String::from(table));
        self
    }

    /// Adds IF EXISTS.
    pub const fn if_exists(mut self) -> Self {
        self.drop.if_exists = true;
        self
    }

    /// Finishes the statement.
    pub fn build(self) -> DropTable {
        self.drop
    }
}

/// Builds a [`CreateIndex`].
#[derive(Debug, Clone)]
#[must_use]
pub struct CreateIndexBuilder {
    index: CreateIndex,
}

impl CreateIndexBuilder {
    /// Starts a CREATE INDEX named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            index: CreateIndex {
                name: String::from(name),
                table: String::new(),
                columns: Vec::new(),
                unique: false,
                if_not_exists: false,
            },
        }
    }

    /// Sets the indexed table.
    pub fn on(mut self, table: &str) -> Self {
        self.index.table = String::from(table);
        self
    }

    /// Adds indexed columns.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.index
            .columns
            .extend(columns.iter().map(|c| String::from(*c)));
        self
    }

    /// CREATE UNIQUE INDEX.
    pub const fn unique(mut self) -> Self {
        self.index.unique = true;
        self
    }

    /// Adds IF NOT EXISTS.
    pub const fn if_not_exists(mut self) -> Self {
        self.index.if_not_exists = true;
        self
    }

    /// Finishes the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyClause`] when no table or no column was
    /// given.
    pub fn build(self) -> Result<CreateIndex> {
        if self.index.table.is_empty() {
            return Err(BuildError::EmptyClause("ON"));
        }
        if self.index.columns.is_empty() {
            return Err(BuildError::EmptyClause("index column list"));
        }
        Ok(self.index)
    }
}

fn unique_constraint(table: &str, name: Option<&str>, columns: &[&str]) -> TableConstraint {
    TableConstraint::Unique(UniqueConstraint {
        columns: columns
            .iter()
            .map(|c| ColumnRef::qualified(table, *c))
            .collect(),
        name: name.map(String::from),
    })
}

fn foreign_key_constraint(
    table: &str,
    local: &str,
    foreign_table: &str,
    foreign_column: &str,
    on_delete: Option<ForeignKeyAction>,
    on_update: Option<ForeignKeyAction>,
) -> TableConstraint {
    let mut fk = ForeignKeyConstraint::new(
        ColumnRef::qualified(table, local),
        ColumnRef::qualified(foreign_table, foreign_column),
    );
    fk.on_delete = on_delete;
    fk.on_update = on_update;
    TableConstraint::ForeignKey(fk)
}
