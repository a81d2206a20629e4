//! Implements an in-memory transaction store.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Stores transactions in memory.
///
/// All data is lost when the store is dropped. Intended for tests, where it
/// stands in for [SQLiteTransactionStore](crate::stores::SQLiteTransactionStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: TransactionId,
    transactions: Vec<Transaction>,
}

impl MemoryTransactionStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn create(&mut self, record: NewTransaction) -> Result<Transaction, Error> {
        let mut inner = self.inner.lock().map_err(|_| Error::DatabaseLockError)?;

        inner.next_id += 1;
        let transaction = record.into_transaction(inner.next_id);
        inner.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn get_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, Error> {
        let inner = self.inner.lock().map_err(|_| Error::DatabaseLockError)?;

        Ok(inner
            .transactions
            .iter()
            .filter(|transaction| transaction.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }
}
