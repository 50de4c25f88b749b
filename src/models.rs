use crate::errors::RelayError;
use serde::Serialize;
use serde_json::Number;

/// A currency pair taken verbatim from the request path. Codes are not
/// validated beyond being present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub from: String,
    pub to: String,
}

impl RateQuery {
    pub fn new(from: &str, to: &str) -> Result<Self, RelayError> {
        if from.is_empty() || to.is_empty() {
            return Err(RelayError::MissingCurrency);
        }

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Body of a successful GET /rate/{from}/{to}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResponse {
    pub from: String,
    pub to: String,
    pub rate: Number,
}
