//! Transaction recording for the application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `NewTransaction` record handed to stores
//! - Route handlers for recording a transaction and listing a user's
//!   transactions

mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{NewTransaction, Transaction, TransactionId};
pub use create_endpoint::{TransactionPayload, create_transaction_endpoint};
pub use list_endpoint::get_user_transactions_endpoint;
