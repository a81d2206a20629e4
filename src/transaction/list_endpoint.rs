//! Defines the endpoint for listing the transactions of a single user.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, Error, stores::TransactionStore, transaction::Transaction};

/// A route handler for listing all transactions that belong to `user_id`.
///
/// The user ID is not checked against any registry: an unknown user yields an
/// empty list, not an error.
pub async fn get_user_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore,
{
    let transactions = state.transaction_store.get_by_user(&user_id)?;

    Ok(Json(transactions))
}

#[cfg(test)]
mod list_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, build_router,
        db::initialize,
        endpoints::{self, format_endpoint},
        stores::SQLiteTransactionStore,
        transaction::Transaction,
    };

    fn get_test_server() -> TestServer {
        let connection = Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));
        let state = AppState::new(store);

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn unknown_user_yields_empty_list() {
        let server = get_test_server();

        let response = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, "u2"))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn lists_only_the_requested_users_transactions() {
        let server = get_test_server();

        let mut want = Vec::new();
        for amount in [42.5, -10.0] {
            let transaction = server
                .post(endpoints::TRANSACTIONS)
                .json(&json!({ "userId": "u1", "amount": amount, "type": "debit" }))
                .await
                .json::<Transaction>();
            want.push(transaction);
        }
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "userId": "u2", "amount": 99.9, "type": "credit" }))
            .await
            .assert_status_ok();

        let got = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, "u1"))
            .await
            .json::<Vec<Transaction>>();

        assert_eq!(got.len(), want.len());
        for (got, want) in got.iter().zip(&want) {
            assert_eq!(got.id, want.id);
            assert_eq!(got.user_id, want.user_id);
            assert_eq!(got.amount, want.amount);
            assert_eq!(got.transaction_type, want.transaction_type);
            // Equal to within the precision of the stored text column.
            assert_eq!(
                got.timestamp.replace_nanosecond(0),
                want.timestamp.replace_nanosecond(0)
            );
        }
    }

    #[tokio::test]
    async fn recorded_transaction_round_trips() {
        let server = get_test_server();

        let recorded = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "userId": "u1", "amount": 42.5, "type": "debit" }))
            .await
            .json::<Transaction>();

        let transactions = server
            .get(&format_endpoint(endpoints::USER_TRANSACTIONS, "u1"))
            .await
            .json::<Vec<Transaction>>();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, recorded.id);
        assert_eq!(transactions[0].user_id.as_deref(), Some("u1"));
        assert_eq!(transactions[0].amount, Some(42.5));
        assert_eq!(transactions[0].transaction_type.as_deref(), Some("debit"));
    }
}
