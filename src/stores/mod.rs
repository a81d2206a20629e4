//! Contains the trait and implementations for objects that store
//! [Transaction](crate::transaction::Transaction) records.

mod memory;
mod sqlite;
mod transaction;

pub use memory::MemoryTransactionStore;
pub use sqlite::SQLiteTransactionStore;
pub use transaction::TransactionStore;
