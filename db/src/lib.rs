#![allow(proc_macro_derive_resolution_fallback)]

#[macro_use]
extern crate diesel;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::warn;
use thiserror::Error;

/// Type of a pooled SQLite connection manager.
pub type SqliteConnectionManager = r2d2::ConnectionManager<SqliteConnection>;

/// Type for a SQLite connection pool.
pub type SqliteConnectionPool = r2d2::Pool<SqliteConnectionManager>;

pub type DbConnection = SqliteConnection;

/// Migrations compiled into the crate from `db/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(Clone, Error, Debug, PartialEq)]
pub enum DbError {
    #[error("'{}' was not found.", book)]
    BookNotFound { book: String },

    #[error("Chapter {} of '{}' was not found.", chapter, book)]
    ChapterNotFound { book: String, chapter: i32 },

    #[error("{} '{}' was not found.", entity, key)]
    NotFound { entity: &'static str, key: String },

    #[error("The record violates a database constraint. Root cause: {:?}.", cause)]
    Integrity { cause: String },

    #[error("Could not connect to the database. Root cause: {:?}.", cause)]
    Connection { cause: String },

    #[error("There was a connection pool error.")]
    ConnectionPool { cause: String },

    #[error("There was a database error. Root cause: {:?}.", cause)]
    Other { cause: String },

    #[error("There was a database migration error. Root cause: {:?}.", cause)]
    Migration { cause: String },

    #[error("'{}' is not a valid Strong's number.", number)]
    InvalidStrongNumber { number: String },

    #[error("'{}' is not one of Torah, Nevi'im or Ketuvim.", testament)]
    InvalidTestament { testament: String },
}

impl From<DieselError> for DbError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => {
                warn!("Rejected write: {}", info.message());
                DbError::Integrity {
                    cause: info.message().to_string(),
                }
            }
            e => DbError::Other {
                cause: e.to_string(),
            },
        }
    }
}

/// Turns on foreign key enforcement for every connection handed out by the pool.
#[derive(Debug)]
struct ForeignKeys;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ForeignKeys {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds a SQLite connection pool with the given URL.
pub fn build_pool(db_url: &str) -> Result<SqliteConnectionPool, DbError> {
    r2d2::Pool::builder()
        .max_size(15)
        .connection_customizer(Box::new(ForeignKeys))
        .build(SqliteConnectionManager::new(db_url))
        .map_err(|e| DbError::ConnectionPool {
            cause: e.to_string(),
        })
}

/// Establishes a non-pooled SQLite connection with foreign keys enforced.
pub fn establish_connection(db_url: &str) -> Result<SqliteConnection, DbError> {
    let mut conn = SqliteConnection::establish(db_url).map_err(|e| DbError::Connection {
        cause: e.to_string(),
    })?;
    conn.batch_execute("PRAGMA foreign_keys = ON")?;
    Ok(conn)
}

/// Run any pending Diesel migrations.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), DbError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| DbError::Migration {
            cause: e.to_string(),
        })
}

pub mod clock;
pub mod data;
pub mod models;
pub mod paleo;
mod schema;
pub mod scribe;

pub use clock::{Clock, FixedClock, SystemClock};
pub use paleo::{paleo_of, PhoenicianScript, Transliterate};

#[cfg(test)]
pub(crate) fn test_connection() -> SqliteConnection {
    let mut conn = establish_connection(":memory:").unwrap();
    run_migrations(&mut conn).unwrap();
    conn
}
