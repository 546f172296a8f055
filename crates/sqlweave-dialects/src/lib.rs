//! # sqlweave-dialects
//!
//! PostgreSQL, MySQL and SQLite dialects for `sqlweave-core`.
//!
//! # How the dialects differ
//!
//! | | PostgreSQL | MySQL | SQLite |
//! |---|---|---|---|
//! | identifiers | `"x"` | `` `x` `` | `"x"` |
//! | placeholders | `$1, $2` | `?` | `?` |
//! | upsert | `ON CONFLICT` | `ON DUPLICATE KEY UPDATE` | `ON CONFLICT` |
//! | skip duplicates | `ON CONFLICT DO NOTHING` | `INSERT IGNORE` | `ON CONFLICT DO NOTHING` |
//! | RETURNING | yes | no | yes |
//! | enums | named type | inline `ENUM(...)` | stored as `TEXT` |
//! | auto-increment | `GENERATED BY DEFAULT AS IDENTITY` | `AUTO_INCREMENT` | `AUTOINCREMENT` |
//! | ALTER TABLE | batched, `ALTER COLUMN ... SET DATA TYPE` | batched, `MODIFY COLUMN` | one clause, no modify, no constraints |
//!
//! - **MySQL row alias**: from 8.0.20 the new row of an upsert is named with
//!   `AS excluded` after VALUES; [`MySqlDialect::legacy`] writes
//!   `VALUES(col)` instead for older servers and MariaDB.
//! - **SQLite [type affinity]**: declared types collapse onto `INTEGER`,
//!   `REAL`, `TEXT` and `BLOB`; `AUTOINCREMENT` is only accepted on
//!   `INTEGER PRIMARY KEY`.
//!
//! [type affinity]: https://www.sqlite.org/datatype3.html
//!
//! ## Example
//!
//! ```rust
//! use sqlweave_core::builder::{bind, upsert_into};
//! use sqlweave_core::{serialize, Statement};
//! use sqlweave_dialects::{MySqlDialect, PostgresDialect};
//!
//! let upsert = Statement::from(
//!     upsert_into("planets")
//!         .columns(&["id", "name"])?
//!         .values([bind(1), bind("Earth")])?
//!         .on_conflict(&["id"])
//!         .do_update(|update| update.set_excluded("name"))
//!         .build()?,
//! );
//!
//! let pg = serialize(&upsert, &PostgresDialect::new());
//! assert_eq!(
//!     pg.sql,
//!     r#"INSERT INTO "planets" ("id", "name") VALUES ($1, $2) ON CONFLICT ("id") DO UPDATE SET "name" = "excluded"."name""#
//! );
//!
//! let my = serialize(&upsert, &MySqlDialect::new());
//! assert_eq!(
//!     my.sql,
//!     "INSERT INTO `planets` (`id`, `name`) VALUES (?, ?) AS `excluded` ON DUPLICATE KEY UPDATE `name` = `excluded`.`name`"
//! );
//! # Ok::<(), sqlweave_core::BuildError>(())
//! ```

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;
