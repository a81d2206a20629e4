//! Defines the endpoint for recording a new transaction.

use axum::{Json, extract::State};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction},
};

/// The payload for recording a transaction.
///
/// Every field is optional and stored as-is. Any `id` or `timestamp` field in
/// the request body is not part of this payload and is therefore discarded,
/// both values are assigned by the server.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    /// The identifier of the owning user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// The amount of money that changed hands.
    #[serde(default)]
    pub amount: Option<f64>,
    /// A free-form category label.
    #[serde(default, rename = "type")]
    pub transaction_type: Option<String>,
}

/// A route handler for recording a new transaction.
///
/// Stamps the payload with the current server time, stores it, and responds
/// with the stored record, including its assigned ID.
pub async fn create_transaction_endpoint<T>(
    State(mut state): State<AppState<T>>,
    Json(payload): Json<TransactionPayload>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore,
{
    let record = NewTransaction {
        user_id: payload.user_id,
        amount: payload.amount,
        transaction_type: payload.transaction_type,
        timestamp: OffsetDateTime::now_utc(),
    };

    let transaction = state.transaction_store.create(record)?;

    Ok(Json(transaction))
}

#[cfg(test)]
mod create_endpoint_tests {
    use axum_test::TestServer;
    use serde_json::json;
    use time::{OffsetDateTime, macros::datetime};

    use crate::{
        AppState, build_router, endpoints, stores::MemoryTransactionStore,
        transaction::Transaction,
    };

    fn get_test_server() -> TestServer {
        let state = AppState::new(MemoryTransactionStore::new());

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn create_transaction_returns_stored_record() {
        let server = get_test_server();
        let before = OffsetDateTime::now_utc();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "userId": "u1",
                "amount": 42.5,
                "type": "debit",
            }))
            .await;

        response.assert_status_ok();
        let transaction = response.json::<Transaction>();
        let after = OffsetDateTime::now_utc();

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.user_id.as_deref(), Some("u1"));
        assert_eq!(transaction.amount, Some(42.5));
        assert_eq!(transaction.transaction_type.as_deref(), Some("debit"));
        assert!(
            before <= transaction.timestamp && transaction.timestamp <= after,
            "timestamp {} outside of request window {} - {}",
            transaction.timestamp,
            before,
            after
        );
    }

    #[tokio::test]
    async fn create_transaction_assigns_unique_ids() {
        let server = get_test_server();

        let first = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "userId": "u1", "amount": 1.0, "type": "debit" }))
            .await
            .json::<Transaction>();
        let second = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "userId": "u1", "amount": 2.0, "type": "debit" }))
            .await
            .json::<Transaction>();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn create_transaction_ignores_client_id_and_timestamp() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "id": 99,
                "userId": "u1",
                "amount": 42.5,
                "type": "debit",
                "timestamp": "2000-01-01T00:00:00Z",
            }))
            .await;

        response.assert_status_ok();
        let transaction = response.json::<Transaction>();

        assert_eq!(transaction.id, 1);
        assert_ne!(transaction.timestamp, datetime!(2000-01-01 00:00:00 UTC));
    }

    #[tokio::test]
    async fn create_transaction_accepts_empty_payload() {
        let server = get_test_server();

        let response = server.post(endpoints::TRANSACTIONS).json(&json!({})).await;

        response.assert_status_ok();
        let transaction = response.json::<Transaction>();

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.user_id, None);
        assert_eq!(transaction.amount, None);
        assert_eq!(transaction.transaction_type, None);
    }

    #[tokio::test]
    async fn create_transaction_rejects_malformed_json() {
        let server = get_test_server();

        let response = server
            .post(endpoints::TRANSACTIONS)
            .text("{\"userId\":")
            .content_type("application/json")
            .await;

        response.assert_status_bad_request();
    }
}
