use super::handlers;
use crate::relay::RateRelay;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds and returns the Axum router with the relay routes and shared state.
pub fn build(relay: Arc<RateRelay>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/rate/{from}/{to}", get(handlers::get_exchange_rate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(relay)
}
