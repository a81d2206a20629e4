//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction},
};

/// Stores transactions in a SQLite database.
///
/// The `transactions` table must be set up in the database before use, see
/// [initialize](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Map a row of the `transactions` table to a [Transaction].
    ///
    /// The row must contain the columns `id`, `user_id`, `amount`, `type`
    /// and `timestamp`, in that order.
    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            user_id: row.get(1)?,
            amount: row.get(2)?,
            transaction_type: row.get(3)?,
            timestamp: row.get(4)?,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Record a new transaction in the database.
    ///
    /// The database assigns the row ID, which becomes the transaction ID.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the database lock has been poisoned,
    /// - or [Error::SqlError] if the insert fails.
    fn create(&mut self, record: NewTransaction) -> Result<Transaction, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        let transaction = connection
            .prepare(
                "INSERT INTO transactions (user_id, amount, type, timestamp)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, user_id, amount, type, timestamp",
            )?
            .query_row(
                (
                    &record.user_id,
                    record.amount,
                    &record.transaction_type,
                    record.timestamp,
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve the transactions in the database that have `user_id`, in
    /// insertion order.
    ///
    /// An empty vector is returned if the specified user has no transactions.
    /// Rows with a NULL user ID never match.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the database lock has been poisoned,
    /// - or [Error::SqlError] if there is an SQL error.
    fn get_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare(
                "SELECT id, user_id, amount, type, timestamp FROM transactions
                 WHERE user_id = :user_id",
            )?
            .query_map(&[(":user_id", &user_id)], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }
}
