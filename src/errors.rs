use crate::api::models::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON from provider: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid provider base URL: {0}")]
    InvalidBaseUrl(String),

    /// The provider answered, but not with a usable rate.
    #[error("Failed to fetch exchange rate")]
    Unsuccessful { error_type: Option<String> },
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Please provide both 'from' and 'to' currency codes")]
    MissingCurrency,

    /// The path segments could not be extracted (e.g. not valid UTF-8).
    #[error("{0}")]
    InvalidPath(String),

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingCurrency | RelayError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
