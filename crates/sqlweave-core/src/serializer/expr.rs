//! Expression rendering.

use crate::ast::{BinaryOp, Bind, Expr, Literal};

use super::Serializer;

impl Expr {
    /// Writes the expression into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        match self {
            Self::Identifier(name) => s.push_identifier(name),
            Self::Column { table, name } => {
                if let Some(table) = table {
                    s.push_identifier(table);
                    s.push(".");
                }
                if name == "*" {
                    s.push("*");
                } else {
                    s.push_identifier(name);
                }
            }
            Self::Literal(literal) => literal.serialize(s),
            Self::Bind(bind) => bind.serialize(s),
            Self::Raw(sql) => s.push(sql),
            Self::Binary { left, op, right } => write_binary(left, *op, right, s),
            Self::Group(items) => {
                s.push("(");
                s.push_list(items, ", ", |s, item| item.serialize(s));
                s.push(")");
            }
            Self::Function(call) => {
                s.push(&call.name);
                s.push("(");
                s.push_list(&call.args, ", ", |s, arg| arg.serialize(s));
                s.push(")");
            }
            Self::Subquery(select) => {
                s.push("(");
                select.serialize(s);
                s.push(")");
            }
            Self::Excluded(column) => s.push_excluded(column),
            Self::Alias { expr, alias } => {
                expr.serialize(s);
                s.push(" AS ");
                s.push_identifier(alias);
            }
        }
    }
}

impl Literal {
    /// Writes the literal into `serializer`.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        let dialect = s.dialect();
        match self {
            Self::Null => s.push("NULL"),
            Self::Boolean(value) => s.push(dialect.literal_boolean(*value)),
            Self::Numeric(text) => s.push(text),
            Self::String(text) => s.push_string(text),
            Self::Default => s.push(dialect.literal_default()),
            Self::All => s.push("*"),
        }
    }
}

impl Bind {
    /// Writes one placeholder per value, parenthesized when there are several.
    pub fn serialize(&self, s: &mut Serializer<'_>) {
        if self.is_single() {
            self.write_placeholders(s);
        } else {
            s.push("(");
            self.write_placeholders(s);
            s.push(")");
        }
    }

    fn write_placeholders(&self, s: &mut Serializer<'_>) {
        s.push_list(self.values(), ", ", |s, value| s.push_bind(value.clone()));
    }
}

fn write_binary(left: &Expr, op: BinaryOp, right: &Expr, s: &mut Serializer<'_>) {
    write_operand(left, op, false, s);
    s.push(" ");
    s.push(op.as_str());
    s.push(" ");
    match right {
        // `x IN ?` is not valid anywhere; a lone value still needs a list.
        Expr::Bind(bind) if op.takes_list() && bind.is_single() => {
            s.push("(");
            bind.serialize(s);
            s.push(")");
        }
        _ => write_operand(right, op, true, s),
    }
}

fn write_operand(operand: &Expr, parent: BinaryOp, is_right: bool, s: &mut Serializer<'_>) {
    if needs_parens(operand, parent, is_right) {
        s.push("(");
        operand.serialize(s);
        s.push(")");
    } else {
        operand.serialize(s);
    }
}

/// Whether a binary operand must be grouped to keep the tree's shape.
fn needs_parens(operand: &Expr, parent: BinaryOp, is_right: bool) -> bool {
    let Expr::Binary { op: child, .. } = operand else {
        return false;
    };
    let (child_prec, parent_prec) = (child.precedence(), parent.precedence());
    if child_prec < parent_prec {
        return true;
    }
    // Mixed AND/OR is always grouped: `(a AND b) OR c`.
    if child.is_logical() && parent.is_logical() && *child != parent {
        return true;
    }
    if child_prec > parent_prec {
        return false;
    }
    if parent.is_comparison() {
        return true;
    }
    is_right && !(*child == parent && parent.is_associative())
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOp, Bind, Expr, Select};
    use crate::dialect::{Dialect, GenericDialect, PlaceholderStyle};
    use crate::serializer::Serializer;
    use crate::value::SqlValue;

    struct Dollar;

    impl Dialect for Dollar {
        fn name(&self) -> &'static str {
            "dollar"
        }

        fn placeholder_style(&self) -> PlaceholderStyle {
            PlaceholderStyle::Numbered('$')
        }

        fn literal_boolean(&self, value: bool) -> &'static str {
            if value {
                "1"
            } else {
                "0"
            }
        }
    }

    fn render(expr: &Expr, dialect: &dyn Dialect) -> (String, Vec<SqlValue>) {
        let mut s = Serializer::new(dialect);
        expr.serialize(&mut s);
        let q = s.finish();
        (q.sql, q.binds)
    }

    fn eq(column: &str, value: i64) -> Expr {
        Expr::binary(Expr::column(column), BinaryOp::Eq, Expr::bind(value))
    }

    #[test]
    fn test_mixed_logic_is_grouped() {
        let expr = Expr::binary(
            Expr::binary(eq("a", 1), BinaryOp::And, eq("b", 2)),
            BinaryOp::Or,
            eq("c", 3),
        );
        let (sql, binds) = render(&expr, &GenericDialect::new());
        assert_eq!(sql, r#"("a" = ? AND "b" = ?) OR "c" = ?"#);
        assert_eq!(binds.len(), 3);
    }

    #[test]
    fn test_same_logic_chain_is_flat() {
        let expr = Expr::binary(
            Expr::binary(eq("a", 1), BinaryOp::And, eq("b", 2)),
            BinaryOp::And,
            eq("c", 3),
        );
        let (sql, _) = render(&expr, &Dollar);
        assert_eq!(sql, r#""a" = $1 AND "b" = $2 AND "c" = $3"#);
    }

    #[test]
    fn test_lower_precedence_operand_is_grouped() {
        let sum = Expr::binary(Expr::column("a"), BinaryOp::Add, Expr::column("b"));
        let expr = Expr::binary(sum, BinaryOp::Mul, Expr::integer(2));
        let (sql, _) = render(&expr, &GenericDialect::new());
        assert_eq!(sql, r#"("a" + "b") * 2"#);

        let diff = Expr::binary(Expr::column("b"), BinaryOp::Sub, Expr::column("c"));
        let expr = Expr::binary(Expr::column("a"), BinaryOp::Sub, diff);
        let (sql, _) = render(&expr, &GenericDialect::new());
        assert_eq!(sql, r#""a" - ("b" - "c")"#);
    }

    #[test]
    fn test_bind_lists() {
        let list = Expr::binary(
            Expr::column("id"),
            BinaryOp::In,
            Expr::Bind(Bind::many([1, 2, 3]).unwrap()),
        );
        let (sql, binds) = render(&list, &Dollar);
        assert_eq!(sql, r#""id" IN ($1, $2, $3)"#);
        assert_eq!(binds.len(), 3);

        let single = Expr::binary(Expr::column("id"), BinaryOp::NotIn, Expr::bind(9));
        let (sql, _) = render(&single, &Dollar);
        assert_eq!(sql, r#""id" NOT IN ($1)"#);
    }

    #[test]
    fn test_literals_follow_dialect() {
        let (sql, _) = render(&Expr::boolean(true), &Dollar);
        assert_eq!(sql, "1");
        let (sql, _) = render(&Expr::boolean(true), &GenericDialect::new());
        assert_eq!(sql, "TRUE");
        let (sql, _) = render(&Expr::string("it's"), &GenericDialect::new());
        assert_eq!(sql, "'it''s'");
        let (sql, _) = render(&Expr::null(), &GenericDialect::new());
        assert_eq!(sql, "NULL");
    }

    #[test]
    fn test_columns_functions_aliases() {
        let expr = Expr::Alias {
            expr: Box::new(Expr::function("COUNT", vec![Expr::all()])),
            alias: String::from("total"),
        };
        let (sql, _) = render(&expr, &GenericDialect::new());
        assert_eq!(sql, r#"COUNT(*) AS "total""#);

        let (sql, _) = render(&Expr::qualified_column("p", "*"), &GenericDialect::new());
        assert_eq!(sql, r#""p".*"#);
    }

    #[test]
    fn test_subquery_shares_bind_counter() {
        let inner = Select {
            columns: vec![Expr::column("id")],
            tables: vec![Expr::identifier("galaxies")],
            predicate: Some(eq("name", 2)),
            ..Select::default()
        };
        let expr = Expr::binary(
            eq("a", 1),
            BinaryOp::And,
            Expr::binary(
                Expr::column("galaxy_id"),
                BinaryOp::In,
                Expr::subquery(inner),
            ),
        );
        let (sql, binds) = render(&expr, &Dollar);
        assert_eq!(
            sql,
            r#""a" = $1 AND "galaxy_id" IN (SELECT "id" FROM "galaxies" WHERE "name" = $2)"#
        );
        assert_eq!(binds, vec![SqlValue::Int(1), SqlValue::Int(2)]);
    }
}
