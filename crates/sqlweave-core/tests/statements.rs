//! SELECT, UPDATE, DELETE and raw statements end to end.

mod common;
use common::*;

use sqlweave_core::builder::{
    col, delete_from, func, insert_into, raw, select, star, table_col, update, PredicateBuilder,
};
use sqlweave_core::{
    DiagnosticKind, Expr, GenericDialect, PlaceholderStyle, SqlRecord, SqlValue,
};

struct Planet {
    name: &'static str,
    moons: i64,
}

impl SqlRecord for Planet {
    fn to_columns(&self) -> Vec<(String, Expr)> {
        vec![
            (String::from("name"), Expr::bind(self.name)),
            (String::from("moons"), Expr::bind(self.moons)),
        ]
    }
}

#[test]
fn select_with_every_clause() {
    let query = select()
        .distinct()
        .column(table_col("p", "name"))
        .column(func("COUNT", vec![star()]).alias("n"))
        .from_expr(Expr::identifier("planets").alias("p"))
        .left_join("moons", table_col("m", "planet_id").eq(table_col("p", "id")))
        .where_clause(table_col("p", "mass").gt(1))
        .group_by(table_col("p", "name"))
        .having(func("COUNT", vec![star()]).gt(2))
        .order_by(col("n").desc())
        .limit(10)
        .offset(20)
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(
        out.sql,
        concat!(
            r#"SELECT DISTINCT "p"."name", COUNT(*) AS "n" FROM "planets" AS "p" "#,
            r#"LEFT JOIN "moons" ON "m"."planet_id" = "p"."id" "#,
            r#"WHERE "p"."mass" > ? GROUP BY "p"."name" HAVING COUNT(*) > ? "#,
            r#"ORDER BY "n" DESC LIMIT 10 OFFSET 20"#,
        )
    );
    assert_eq!(out.binds, vec![SqlValue::Int(1), SqlValue::Int(2)]);
}

#[test]
fn subquery_shares_the_bind_counter() {
    let dialect = TestDialect {
        placeholders: PlaceholderStyle::Numbered('$'),
        ..TestDialect::default()
    };
    let inner = select()
        .columns(&["planet_id"])
        .from("moons")
        .where_clause(col("radius").gt(100));
    let query = select()
        .columns(&["name"])
        .from("planets")
        .where_clause(col("mass").gt(1))
        .where_clause(col("id").in_query(inner))
        .where_clause(col("name").not_eq("Pluto"))
        .build();
    let out = render(query, &dialect);
    assert_eq!(
        out.sql,
        concat!(
            r#"SELECT "name" FROM "planets" WHERE "mass" > $1 "#,
            r#"AND "id" IN (SELECT "planet_id" FROM "moons" WHERE "radius" > $2) "#,
            r#"AND "name" <> $3"#,
        )
    );
    assert_eq!(
        out.binds,
        vec![
            SqlValue::Int(1),
            SqlValue::Int(100),
            SqlValue::Text(String::from("Pluto"))
        ]
    );
}

#[test]
fn update_from_record_with_returning() {
    let statement = update("planets")
        .set_model(&Planet {
            name: "Earth",
            moons: 1,
        })
        .where_clause(col("id").eq(3))
        .returning(&["id"])
        .build()
        .unwrap();
    let out = render(statement.clone(), &TestDialect::default());
    assert_eq!(
        out.sql,
        r#"UPDATE "planets" SET "name" = ?, "moons" = ? WHERE "id" = ? RETURNING "id""#
    );

    let out = render(statement, &GenericDialect::new());
    assert_eq!(
        out.sql,
        r#"UPDATE "planets" SET "name" = ?, "moons" = ? WHERE "id" = ?"#
    );
    assert_eq!(kinds(&out), vec![DiagnosticKind::ReturningUnsupported]);
}

#[test]
fn insert_many_records() {
    let planets = [
        Planet {
            name: "Mercury",
            moons: 0,
        },
        Planet {
            name: "Mars",
            moons: 2,
        },
    ];
    let insert = insert_into("planets")
        .models(&planets)
        .unwrap()
        .build()
        .unwrap();
    let out = render(insert, &GenericDialect::new());
    assert_eq!(
        out.sql,
        r#"INSERT INTO "planets" ("name", "moons") VALUES (?, ?), (?, ?)"#
    );
    // Row-major: every value of row one before any of row two.
    assert_eq!(
        out.binds,
        vec![
            SqlValue::Text(String::from("Mercury")),
            SqlValue::Int(0),
            SqlValue::Text(String::from("Mars")),
            SqlValue::Int(2),
        ]
    );
}

#[test]
fn row_width_is_checked_per_row() {
    let err = insert_into("planets")
        .columns(&["name", "moons"])
        .unwrap()
        .values([Expr::bind("Venus"), Expr::bind(0)])
        .unwrap()
        .values([Expr::bind("Earth")])
        .unwrap_err();
    assert_eq!(
        err,
        sqlweave_core::BuildError::ColumnCountMismatch {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn delete_without_predicate() {
    let out = render(delete_from("moons").build(), &GenericDialect::new());
    assert_eq!(out.sql, r#"DELETE FROM "moons""#);
}

#[test]
fn raw_statement_keeps_text_and_binds() {
    let statement = raw("SELECT * FROM planets WHERE name = ")
        .sql("?")
        .bind("Earth")
        .build();
    let out = render(statement, &GenericDialect::new());
    assert_eq!(out.sql, "SELECT * FROM planets WHERE name = ?");
    assert_eq!(out.binds, vec![SqlValue::Text(String::from("Earth"))]);
}

#[test]
fn quoting_escapes_embedded_quotes() {
    let query = select()
        .columns(&[r#"we"ird"#])
        .column(Expr::string("it's"))
        .build();
    let out = render(query, &GenericDialect::new());
    assert_eq!(out.sql, r#"SELECT "we""ird", 'it''s'"#);
}

#[test]
fn serialization_is_repeatable() {
    let query = select()
        .columns(&["id"])
        .from("planets")
        .where_clause(col("id").eq(1))
        .build();
    let dialect = GenericDialect::new();
    assert_eq!(render(query.clone(), &dialect), render(query, &dialect));
}
