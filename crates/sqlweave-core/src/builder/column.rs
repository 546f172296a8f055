//! Column definition builder.

use crate::ast::{
    ColumnConstraint, ColumnDefinition, DataType, Expr, ForeignKeyAction, ForeignKeyReference,
};

use super::expr::IntoExpr;

/// Builder for column definitions.
///
/// Constraints are written in the order they are added.
#[derive(Debug, Clone)]
#[must_use]
pub struct ColumnBuilder {
    column: ColumnDefinition,
}

impl ColumnBuilder {
    /// Creates a new column builder.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            column: ColumnDefinition::new(name, data_type),
        }
    }

    fn constraint(mut self, constraint: ColumnConstraint) -> Self {
        self.column.constraints.push(constraint);
        self
    }

    /// Marks the column as NOT NULL.
    pub fn not_null(self) -> Self {
        self.constraint(ColumnConstraint::NotNull)
    }

    /// Marks the column as primary key.
    pub fn primary_key(self) -> Self {
        self.constraint(ColumnConstraint::PrimaryKey {
            auto_increment: false,
        })
    }

    /// Marks the column as an auto-incrementing primary key.
    pub fn auto_increment_primary_key(self) -> Self {
        self.constraint(ColumnConstraint::PrimaryKey {
            auto_increment: true,
        })
    }

    /// Marks the column as UNIQUE.
    pub fn unique(self) -> Self {
        self.constraint(ColumnConstraint::Unique)
    }

    /// Sets the default value. Use literals here: most engines reject bound
    /// parameters inside DDL.
    pub fn default(self, value: impl IntoExpr) -> Self {
        self.constraint(ColumnConstraint::Default(value.into_expr()))
    }

    /// Adds a foreign key reference.
    pub fn references(self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.constraint(ColumnConstraint::References(ForeignKeyReference::new(
            table, column,
        )))
    }

    /// Adds a foreign key reference with referential actions.
    pub fn references_full(
        self,
        table: impl Into<String>,
        column: impl Into<String>,
        on_delete: Option<ForeignKeyAction>,
        on_update: Option<ForeignKeyAction>,
    ) -> Self {
        let mut reference = ForeignKeyReference::new(table, column);
        reference.on_delete = on_delete;
        reference.on_update = on_update;
        self.constraint(ColumnConstraint::References(reference))
    }

    /// Adds a CHECK constraint.
    pub fn check(self, expr: Expr) -> Self {
        self.constraint(ColumnConstraint::Check(expr))
    }

    /// Sets the collation.
    pub fn collation(self, collation: impl Into<String>) -> Self {
        self.constraint(ColumnConstraint::Collate(collation.into()))
    }

    /// Builds the column definition.
    #[must_use]
    pub fn build(self) -> ColumnDefinition {
        self.column
    }
}

impl From<ColumnBuilder> for ColumnDefinition {
    fn from(builder: ColumnBuilder) -> Self {
        builder.column
    }
}

/// Creates an INTEGER column.
pub fn integer(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Integer)
}

/// Creates a SMALLINT column.
pub fn smallint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Smallint)
}

/// Creates a BIGINT column.
pub fn bigint(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Bigint)
}

/// Creates a DOUBLE column.
pub fn double(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Double)
}

/// Creates a VARCHAR column.
pub fn varchar(name: impl Into<String>, len: u32) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Varchar(Some(len)))
}

/// Creates a TEXT column.
pub fn text(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Text)
}

/// Creates a BLOB column.
pub fn blob(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Blob)
}

/// Creates a TIMESTAMP column.
pub fn timestamp(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Timestamp)
}

/// Creates a BOOLEAN column.
pub fn boolean(name: impl Into<String>) -> ColumnBuilder {
    ColumnBuilder::new(name, DataType::Boolean)
}

/// Creates an enum column.
pub fn enumeration<I, S>(name: impl Into<String>, type_name: &str, variants: I) -> ColumnBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ColumnBuilder::new(name, DataType::enumeration(type_name, variants))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraints_keep_order() {
        let column = bigint("star_id")
            .not_null()
            .references_full("stars", "id", Some(ForeignKeyAction::Cascade), None)
            .build();
        assert_eq!(column.name, "star_id");
        assert_eq!(column.data_type, DataType::Bigint);
        assert_eq!(column.constraints.len(), 2);
        assert_eq!(column.constraints[0], ColumnConstraint::NotNull);
        let ColumnConstraint::References(reference) = &column.constraints[1] else {
            panic!("Expected REFERENCES");
        };
        assert_eq!(reference.table, "stars");
        assert_eq!(reference.on_delete, Some(ForeignKeyAction::Cascade));
    }

    #[test]
    fn test_default_takes_literal() {
        let column = boolean("active").default(Expr::boolean(true)).build();
        assert_eq!(
            column.constraints,
            vec![ColumnConstraint::Default(Expr::boolean(true))]
        );
    }
}
