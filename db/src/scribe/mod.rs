//! Reads and writes of every table.
//!
//! Each function takes the connection it works on. Multi-statement writes
//! run inside one transaction.
use diesel::result::Error;

use crate::DbError;

pub mod alphabet;
pub mod canon;
pub mod facts;
pub mod lexicon;

/// Maps a lookup error, turning a missing row into `not_found`.
fn lookup_err(e: Error, not_found: impl FnOnce() -> DbError) -> DbError {
    match e {
        Error::NotFound => not_found(),
        e => DbError::from(e),
    }
}
