//! Schema setup for the application's SQLite database.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::Error;

/// Create the tables for the domain models in the database behind
/// `connection`.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    // Only id and timestamp carry a NOT NULL constraint. The other columns
    // are stored as received, absent fields included.
    transaction.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                user_id TEXT,
                amount REAL,
                type TEXT,
                timestamp TEXT NOT NULL
                )",
        (),
    )?;

    transaction.commit()?;

    Ok(())
}
