//! Defines the core data types for transactions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// One recorded monetary event.
///
/// Only `id` and `timestamp` are guaranteed to be set on a persisted
/// transaction: both are assigned by the server. The remaining fields are
/// stored exactly as the client sent them, including when they are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction, assigned by the store.
    pub id: TransactionId,
    /// The identifier of the owning user.
    ///
    /// Not checked against any user registry.
    pub user_id: Option<String>,
    /// The amount of money that changed hands.
    ///
    /// Signed, currency-less, and taken at face value from the client.
    pub amount: Option<f64>,
    /// A free-form category label, e.g. "debit" or "credit".
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// When the server recorded the transaction.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A transaction that has been stamped with its server timestamp but has not
/// yet been assigned an ID by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The identifier of the owning user.
    pub user_id: Option<String>,
    /// The amount of money that changed hands.
    pub amount: Option<f64>,
    /// A free-form category label.
    pub transaction_type: Option<String>,
    /// When the server received the transaction.
    pub timestamp: OffsetDateTime,
}

impl NewTransaction {
    /// Attach `id` to produce the stored form of this record.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            user_id: self.user_id,
            amount: self.amount,
            transaction_type: self.transaction_type,
            timestamp: self.timestamp,
        }
    }
}
