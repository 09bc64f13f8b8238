use anyhow::anyhow;
use diesel::{
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
    
};
use restodb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, DbReadOnly, DbReadWrite};

mod group;
mod rejection_message;
mod report;
mod restaurant;
mod restaurant_request;
mod review;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Write operations are not permitted on shared connections.
fn read_only_violation(operation: &str) -> repo::Error {
    log::error!("Invalid write operation on a read-only connection: {operation}");
    repo::Error::Other(anyhow!("Read-only database connection"))
}

/// Maps the number of affected rows of an update or delete
/// statement for a single row.
fn expect_single_row(count: usize) -> Result<()> {
    match count {
        0 => Err(repo::Error::NotFound),
        1 => Ok(()),
        _ => Err(repo::Error::Other(anyhow!(
            "Unexpected number of affected rows: {count}"
        ))),
    }
}

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

fn last_insert_id(conn: &mut SqliteConnection) -> Result<Id> {
    diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map(Id::new)
        .map_err(from_diesel_err)
}
