//! Defines the transaction store trait.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction},
};

/// Handles the recording and retrieval of transactions.
pub trait TransactionStore {
    /// Record a new transaction in the store, assigning it a fresh unique ID.
    ///
    /// Returns the stored record, including the assigned ID.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the write fails. Failures are not
    /// retried, they propagate to the caller.
    fn create(&mut self, record: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve all transactions whose user identifier equals `user_id`, in
    /// the order they were stored.
    ///
    /// An empty vector is returned if the specified user has no transactions.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn get_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, Error>;
}
