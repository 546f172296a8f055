//! WHERE composition and operator grouping as seen in rendered SQL.

mod common;
use common::*;

use sqlweave_core::ast::BinaryOp;
use sqlweave_core::builder::{bind_list, col, delete_from, func, select, star, PredicateBuilder};
use sqlweave_core::{GenericDialect, PlaceholderStyle, SqlValue};

#[test]
fn and_then_or_groups_the_and_chain() {
    let query = select()
        .columns(&["id"])
        .from("planets")
        .where_clause(col("a").eq(1))
        .where_clause(col("b").eq(2))
        .or_where_clause(col("c").eq(3))
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(
        out.sql,
        r#"SELECT "id" FROM "planets" WHERE ("a" = ? AND "b" = ?) OR "c" = ?"#
    );
    assert_eq!(
        out.binds,
        vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
    );
}

#[test]
fn or_then_and_groups_the_or_chain() {
    let query = select()
        .columns(&["id"])
        .from("planets")
        .where_clause(col("a").eq(1))
        .or_where_clause(col("b").eq(2))
        .where_clause(col("c").eq(3))
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(
        out.sql,
        r#"SELECT "id" FROM "planets" WHERE ("a" = ? OR "b" = ?) AND "c" = ?"#
    );
}

#[test]
fn nested_group_stays_grouped() {
    let query = delete_from("planets")
        .where_clause(col("a").eq(1))
        .where_clause(col("b").eq(2).or(col("c").eq(3)))
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(
        out.sql,
        r#"DELETE FROM "planets" WHERE "a" = ? AND ("b" = ? OR "c" = ?)"#
    );
}

#[test]
fn numbered_placeholders_follow_text_order() {
    let dialect = TestDialect {
        placeholders: PlaceholderStyle::Numbered('$'),
        ..TestDialect::default()
    };
    let query = select()
        .column(func("COUNT", vec![star()]))
        .from("planets")
        .where_op(col("mass"), BinaryOp::Gt, 2.5)
        .where_clause(col("id").in_list([1, 2, 3]).unwrap())
        .build();
    let out = render(query, &dialect);
    assert_eq!(
        out.sql,
        r#"SELECT COUNT(*) FROM "planets" WHERE "mass" > $1 AND "id" IN ($2, $3, $4)"#
    );
    assert_eq!(out.binds.len(), 4);
    assert_eq!(out.binds[0], SqlValue::Float(2.5));
}

#[test]
fn single_value_in_list_is_parenthesized() {
    let query = select()
        .columns(&["name"])
        .from("planets")
        .where_clause(col("id").in_list([7]).unwrap())
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(out.sql, r#"SELECT "name" FROM "planets" WHERE "id" IN (?)"#);
}

#[test]
fn empty_bind_list_fails_at_build_time() {
    assert!(bind_list(Vec::<String>::new()).is_err());
}

#[test]
fn arithmetic_keeps_tree_shape() {
    let query = select()
        .column(col("a").plus(col("b")).times(2).alias("doubled"))
        .column(col("a").minus(col("b").minus(col("c"))))
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(
        out.sql,
        r#"SELECT ("a" + "b") * ? AS "doubled", "a" - ("b" - "c")"#
    );
}
