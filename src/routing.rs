//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    stores::TransactionStore,
    transaction::{create_transaction_endpoint, get_user_transactions_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint::<T>),
        )
        .route(
            endpoints::USER_TRANSACTIONS,
            get(get_user_transactions_endpoint::<T>),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
