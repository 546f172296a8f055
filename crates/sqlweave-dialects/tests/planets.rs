//! The galaxies-and-planets walkthrough, run against every dialect through
//! a recording executor.

mod common;
use common::*;

use sqlweave_core::ast::{ForeignKeyAction, Statement};
use sqlweave_core::builder::{
    alter_table, bigint, col, create_index, create_table, delete_from, drop_table, func,
    insert_into, raw, select, star, table_col, text, update, IntoExpr, PredicateBuilder,
};
use sqlweave_core::{Dialect, Executor, Expr, MemoryRow, SqlRecord, SqlRow, SqlValue};
use sqlweave_dialects::{MySqlDialect, PostgresDialect, SqliteDialect};

struct Galaxy {
    name: &'static str,
}

impl SqlRecord for Galaxy {
    fn to_columns(&self) -> Vec<(String, Expr)> {
        vec![(String::from("name"), Expr::bind(self.name))]
    }
}

struct Planet {
    name: &'static str,
    galaxy_id: i64,
}

impl SqlRecord for Planet {
    fn to_columns(&self) -> Vec<(String, Expr)> {
        vec![
            (String::from("name"), Expr::bind(self.name)),
            (String::from("galaxy_id"), Expr::bind(self.galaxy_id)),
        ]
    }
}

fn walkthrough() -> Vec<Statement> {
    let planets = ["Mercury", "Venus", "Mars", "Jpuiter", "Pluto"].map(|name| Planet { name, galaxy_id: 1 });

    vec![
        create_table("galaxies")
            .column(bigint("id").auto_increment_primary_key())
            .column(text("name"))
            .build()
            .unwrap()
            .into(),
        create_table("planets")
            .if_not_exists()
            .column(bigint("id").auto_increment_primary_key())
            .column(bigint("galaxy_id").references_full(
                "galaxies",
                "id",
                Some(ForeignKeyAction::Cascade),
                None,
            ))
            .build()
            .unwrap()
            .into(),
        alter_table("planets")
            .add_column(text("name").default(Expr::string("Unnamed Planet")))
            .build()
            .unwrap()
            .into(),
        create_index("test_index")
            .on("planets")
            .columns(&["name"])
            .unique()
            .build()
            .unwrap()
            .into(),
        insert_into("galaxies")
            .model(&Galaxy { name: "Milky Way" })
            .unwrap()
            .build()
            .unwrap()
            .into(),
        select()
            .column(star())
            .from("galaxies")
            .where_clause(col("name").eq("Milky Way"))
            .group_by(col("id"))
            .order_by(col("name").desc())
            .build()
            .into(),
        insert_into("planets")
            .model(&Planet {
                name: "Earth",
                galaxy_id: 1,
            })
            .unwrap()
            .build()
            .unwrap()
            .into(),
        insert_into("planets")
            .models(&planets)
            .unwrap()
            .build()
            .unwrap()
            .into(),
        update("planets")
            .where_clause(col("name").eq("Jpuiter"))
            .set("name", "Jupiter")
            .build()
            .unwrap()
            .into(),
        select()
            .column(star())
            .from("planets")
            .join(
                "galaxies",
                table_col("planets", "galaxy_id").eq(table_col("galaxies", "id")),
            )
            .build()
            .into(),
        update("galaxies")
            .set("name", "Milky Way 2")
            .where_clause(col("name").eq("Milky Way"))
            .build()
            .unwrap()
            .into(),
        delete_from("galaxies")
            .where_clause(col("name").eq("Milky Way"))
            .build()
            .into(),
        select()
            .column(func("COUNT", vec![star()]).alias("c"))
            .from("galaxies")
            .build()
            .into(),
        select()
            .column(star())
            .column(
                select()
                    .columns(&["id"])
                    .from("planets")
                    .limit(1)
                    .into_expr()
                    .alias("firstPlanetID"),
            )
            .from("galaxies")
            .build()
            .into(),
        raw("SELECT 1 + 1").build().into(),
        drop_table("planets").if_exists().build().into(),
        drop_table("galaxies").if_exists().build().into(),
    ]
}

fn run_all<D: Dialect>(dialect: D) -> RecordingExecutor<D> {
    let mut executor = RecordingExecutor::new(dialect);
    for statement in walkthrough() {
        executor
            .run(&statement)
            .unwrap_or_else(|e| panic!("{} rejected {statement:?}: {e}", executor.dialect.name()));
    }
    executor
}

#[test]
fn walkthrough_runs_on_every_dialect() {
    let expected = walkthrough().len();
    assert_eq!(run_all(PostgresDialect::new()).sent.len(), expected);
    assert_eq!(run_all(MySqlDialect::new()).sent.len(), expected);
    assert_eq!(run_all(MySqlDialect::legacy()).sent.len(), expected);
    assert_eq!(run_all(SqliteDialect::new()).sent.len(), expected);
}

#[test]
fn postgres_spelling() {
    let executor = run_all(PostgresDialect::new());
    let sql = executor.sql();
    assert_eq!(
        sql[1],
        concat!(
            r#"CREATE TABLE IF NOT EXISTS "planets" ("#,
            r#""id" BIGINT PRIMARY KEY GENERATED BY DEFAULT AS IDENTITY, "#,
            r#""galaxy_id" BIGINT REFERENCES "galaxies" ("id") ON DELETE CASCADE)"#,
        )
    );
    assert_eq!(
        sql[2],
        r#"ALTER TABLE "planets" ADD COLUMN "name" TEXT DEFAULT 'Unnamed Planet'"#
    );
    assert_eq!(
        sql[7],
        r#"INSERT INTO "planets" ("name", "galaxy_id") VALUES ($1, $2), ($3, $4), ($5, $6), ($7, $8), ($9, $10)"#
    );
    assert_eq!(executor.sent[7].1.len(), 10);
    assert_eq!(
        sql[13],
        r#"SELECT *, (SELECT "id" FROM "planets" LIMIT 1) AS "firstPlanetID" FROM "galaxies""#
    );
}

#[test]
fn mysql_spelling() {
    let executor = run_all(MySqlDialect::new());
    let sql = executor.sql();
    assert_eq!(
        sql[5],
        "SELECT * FROM `galaxies` WHERE `name` = ? GROUP BY `id` ORDER BY `name` DESC"
    );
    assert_eq!(
        sql[9],
        "SELECT * FROM `planets` INNER JOIN `galaxies` ON `planets`.`galaxy_id` = `galaxies`.`id`"
    );
    assert_eq!(sql[14], "SELECT 1 + 1");
}

#[test]
fn sqlite_spelling() {
    let executor = run_all(SqliteDialect::new());
    let sql = executor.sql();
    assert_eq!(
        sql[0],
        r#"CREATE TABLE "galaxies" ("id" INTEGER PRIMARY KEY AUTOINCREMENT, "name" TEXT)"#
    );
    assert_eq!(
        sql[8],
        r#"UPDATE "planets" SET "name" = ? WHERE "name" = ?"#
    );
    assert_eq!(
        executor.sent[8].1,
        vec![
            SqlValue::Text(String::from("Jupiter")),
            SqlValue::Text(String::from("Jpuiter")),
        ]
    );
}

#[test]
fn count_row_decodes() {
    let mut executor = RecordingExecutor::new(SqliteDialect::new());
    executor.rows = vec![MemoryRow::new().with("c", 0i64)];
    let count = select()
        .column(func("COUNT", vec![star()]).alias("c"))
        .from("galaxies")
        .build();
    let rows = executor.run(&count.into()).unwrap();
    assert_eq!(rows[0].decode::<i64>("c"), Ok(0));
}
