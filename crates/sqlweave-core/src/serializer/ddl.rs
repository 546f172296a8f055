//! CREATE / ALTER / DROP rendering.

use crate::ast::{
    AlterTable, ColumnConstraint, ColumnDefinition, CreateIndex, CreateTable, DataType,
    DropTable, ForeignKeyAction, TableConstraint,
};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::dialect::EnumSyntax;

use super::Serializer;

impl CreateTable {
    /// Writes the CREATE TABLE into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("CREATE");
        if self.temporary {
            s.push(" TEMPORARY");
        }
        s.push(" TABLE");
        if self.if_not_exists {
            write_if_exists(s, " IF NOT EXISTS");
        }
        s.push(" ");
        s.push_identifier(&self.table);
        s.push(" (");
        s.push_list(&self.columns, ", ", |s, column| column.serialize(s));
        for constraint in &self.constraints {
            s.push(", ");
            constraint.serialize(s);
        }
        s.push(")");
    }
}

impl ColumnDefinition {
    /// Writes `name type constraints...` into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push_identifier(&self.name);
        s.push(" ");
        write_data_type(&self.data_type, s);
        for constraint in &self.constraints {
            constraint.serialize(s);
        }
    }
}

impl ColumnConstraint {
    /// Writes the constraint, including its leading space.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        match self {
            Self::PrimaryKey { auto_increment } => {
                s.push(" PRIMARY KEY");
                if *auto_increment {
                    write_auto_increment(s);
                }
            }
            Self::NotNull => s.push(" NOT NULL"),
            Self::Unique => s.push(" UNIQUE"),
            Self::Default(expr) => {
                s.push(" DEFAULT ");
                expr.serialize(s);
            }
            Self::References(reference) => {
                s.push(" REFERENCES ");
                s.push_identifier(&reference.table);
                s.push(" (");
                s.push_identifier(&reference.column);
                s.push(")");
                write_actions(reference.on_delete, reference.on_update, s);
            }
            Self::Check(expr) => {
                s.push(" CHECK (");
                expr.serialize(s);
                s.push(")");
            }
            Self::Collate(name) => {
                s.push(" COLLATE ");
                s.push(name);
            }
        }
    }
}

impl TableConstraint {
    /// Writes `CONSTRAINT name ...` into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("CONSTRAINT ");
        s.push_identifier(&self.name());
        match self {
            Self::Unique(unique) => {
                s.push(" UNIQUE (");
                s.push_list(&unique.columns, ", ", |s, column| {
                    s.push_identifier(&column.name);
                });
                s.push(")");
            }
            Self::ForeignKey(fk) => {
                s.push(" FOREIGN KEY (");
                s.push_identifier(&fk.local.name);
                s.push(") REFERENCES ");
                if let Some(table) = &fk.foreign.table {
                    s.push_identifier(table);
                    s.push(" ");
                }
                s.push("(");
                s.push_identifier(&fk.foreign.name);
                s.push(")");
                write_actions(fk.on_delete, fk.on_update, s);
            }
        }
    }
}

/// One clause of an ALTER TABLE, in serialization order.
enum Alteration<'a> {
    AddColumn(&'a ColumnDefinition),
    ModifyColumn(&'a ColumnDefinition),
    DropColumn(&'a str),
    AddConstraint(&'a TableConstraint),
    DropConstraint(&'a str),
}

impl AlterTable {
    /// Writes the ALTER TABLE into `serializer`.
    ///
    /// Clauses the dialect cannot express are dropped with a diagnostic. On
    /// dialects without batch support only the first clause is written; use
    /// [`AlterTable::split`] to get one statement per clause.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        let syntax = s.dialect().alter_table_syntax();
        let dialect = s.dialect().name();

        let mut alterations: Vec<Alteration<'_>> = Vec::with_capacity(self.alteration_count());
        alterations.extend(self.add_columns.iter().map(Alteration::AddColumn));
        if syntax.alter_column_clause.is_some() {
            alterations.extend(self.modify_columns.iter().map(Alteration::ModifyColumn));
        } else if !self.modify_columns.is_empty() {
            s.report(Diagnostic::warning(
                DiagnosticKind::ModifyColumnUnsupported,
                format!(
                    "dialect `{dialect}` cannot modify columns; {} modification(s) dropped",
                    self.modify_columns.len()
                ),
            ));
        }
        alterations.extend(
            self.drop_columns
                .iter()
                .map(String::as_str)
                .map(Alteration::DropColumn),
        );
        if syntax.supports_constraints {
            alterations.extend(self.add_constraints.iter().map(Alteration::AddConstraint));
            alterations.extend(
                self.drop_constraints
                    .iter()
                    .map(String::as_str)
                    .map(Alteration::DropConstraint),
            );
        } else if !self.add_constraints.is_empty() || !self.drop_constraints.is_empty() {
            s.report(Diagnostic::warning(
                DiagnosticKind::ConstraintAlterationUnsupported,
                format!("dialect `{dialect}` cannot add or drop constraints on an existing table"),
            ));
        }

        if !syntax.allows_batch && alterations.len() > 1 {
            s.report(Diagnostic::warning(
                DiagnosticKind::BatchAlterUnsupported,
                format!(
                    "dialect `{dialect}` takes one ALTER TABLE clause per statement; {} of {} clauses dropped, split the statement",
                    alterations.len() - 1,
                    alterations.len()
                ),
            ));
            alterations.truncate(1);
        }

        s.push("ALTER TABLE ");
        s.push_identifier(&self.table);
        if alterations.is_empty() {
            s.report(Diagnostic::error(
                DiagnosticKind::EmptyAlteration,
                format!(
                    "dialect `{dialect}` can express none of the requested alterations on `{}`",
                    self.table
                ),
            ));
            return;
        }
        s.push(" ");
        s.push_list(alterations, ", ", |s, alteration| match alteration {
            Alteration::AddColumn(column) => {
                s.push("ADD COLUMN ");
                column.serialize(s);
            }
            Alteration::ModifyColumn(column) => {
                let clause = syntax.alter_column_clause.unwrap_or("MODIFY COLUMN");
                s.push(clause);
                s.push(" ");
                if let Some(keyword) = syntax.alter_column_type_keyword {
                    s.push_identifier(&column.name);
                    s.push(" ");
                    s.push(keyword);
                    s.push(" ");
                    write_data_type(&column.data_type, s);
                } else {
                    column.serialize(s);
                }
            }
            Alteration::DropColumn(name) => {
                s.push("DROP COLUMN ");
                s.push_identifier(name);
            }
            Alteration::AddConstraint(constraint) => {
                s.push("ADD ");
                constraint.serialize(s);
            }
            Alteration::DropConstraint(name) => {
                s.push("DROP CONSTRAINT ");
                s.push_identifier(name);
            }
        });
    }
}

impl DropTable {
    /// Writes the DROP TABLE into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("DROP TABLE");
        if self.if_exists {
            write_if_exists(s, " IF EXISTS");
        }
        s.push(" ");
        s.push_list(&self.tables, ", ", |s, table| s.push_identifier(table));
    }
}

impl CreateIndex {
    /// Writes the CREATE INDEX into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        s.push("CREATE");
        if self.unique {
            s.push(" UNIQUE");
        }
        s.push(" INDEX");
        if self.if_not_exists {
            write_if_exists(s, " IF NOT EXISTS");
        }
        s.push(" ");
        s.push_identifier(&self.name);
        s.push(" ON ");
        s.push_identifier(&self.table);
        s.push(" (");
        s.push_list(&self.columns, ", ", |s, column| s.push_identifier(column));
        s.push(")");
    }
}

fn write_if_exists(s: &mut Serializer<'_>, clause: &str) {
    if s.dialect().supports_if_exists() {
        s.push(clause);
    } else {
        let message = format!(
            "dialect `{}` does not support{clause}; clause dropped",
            s.dialect().name()
        );
        s.report(Diagnostic::warning(DiagnosticKind::IfExistsUnsupported, message));
    }
}

fn write_auto_increment(s: &mut Serializer<'_>) {
    let dialect = s.dialect();
    if !dialect.supports_auto_increment() {
        let message = format!(
            "dialect `{}` has no auto-increment; the key must be supplied explicitly",
            dialect.name()
        );
        s.report(Diagnostic::warning(
            DiagnosticKind::AutoIncrementUnsupported,
            message,
        ));
        return;
    }
    if let Some(function) = dialect.auto_increment_function() {
        s.push(" DEFAULT ");
        s.push(function);
    } else {
        s.push(" ");
        s.push(dialect.auto_increment_clause());
    }
}

fn write_actions(
    on_delete: Option<ForeignKeyAction>,
    on_update: Option<ForeignKeyAction>,
    s: &mut Serializer<'_>,
) {
    if let Some(action) = on_delete {
        s.push(" ON DELETE ");
        s.push(action.as_sql());
    }
    if let Some(action) = on_update {
        s.push(" ON UPDATE ");
        s.push(action.as_sql());
    }
}

fn write_data_type(data_type: &DataType, s: &mut Serializer<'_>) {
    let dialect = s.dialect();
    match data_type {
        DataType::Enum { name, variants } => match dialect.enum_syntax() {
            EnumSyntax::Inline => {
                s.push("ENUM(");
                s.push_list(variants, ", ", |s, variant| s.push_string(variant));
                s.push(")");
            }
            EnumSyntax::TypeName => s.push_identifier(name),
            EnumSyntax::Unsupported => {
                let message = format!(
                    "dialect `{}` has no enum types; `{name}` stored as text",
                    dialect.name()
                );
                s.report(Diagnostic::warning(DiagnosticKind::EnumUnsupported, message));
                write_data_type(&DataType::Text, s);
            }
        },
        other => {
            let spelled = dialect.data_type_name(other).unwrap_or_else(|| other.to_sql());
            s.push(&spelled);
        }
    }
}
