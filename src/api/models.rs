use serde::Serialize;

/// Body of every 4xx/5xx answer from the relay
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
