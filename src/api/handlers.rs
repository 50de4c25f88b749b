use crate::errors::RelayError;
use crate::models::RateResponse;
use crate::relay::RateRelay;
use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::Json,
};
use std::sync::Arc;

/// GET / — liveness check, always "1"
pub async fn root(State(relay): State<Arc<RateRelay>>) -> &'static str {
    relay.handle_root()
}

/// GET /rate/{from}/{to} — current conversion rate for a pair (e.g. USD/EUR)
pub async fn get_exchange_rate(
    State(relay): State<Arc<RateRelay>>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<RateResponse>, RelayError> {
    let Path((from, to)) =
        path.map_err(|rejection| RelayError::InvalidPath(rejection.body_text()))?;
    relay.get_exchange_rate(&from, &to).await.map(Json)
}
