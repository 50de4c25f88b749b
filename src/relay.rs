use crate::errors::RelayError;
use crate::models::{RateQuery, RateResponse};
use crate::provider::RateProvider;
use std::sync::Arc;

/// Forwards currency-pair lookups to a provider and reshapes the answer.
/// Holds no per-request state, so one instance serves every request.
pub struct RateRelay {
    provider: Arc<dyn RateProvider>,
}

impl RateRelay {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    /// Liveness body for GET /
    pub fn handle_root(&self) -> &'static str {
        "1"
    }

    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<RateResponse, RelayError> {
        let query = RateQuery::new(from, to)?;

        tracing::debug!(
            "[{}] looking up {}/{}",
            self.provider.name(),
            query.from,
            query.to
        );

        match self.provider.fetch_pair(&query.from, &query.to).await {
            Ok(rate) => {
                metrics::counter!("relay_upstream_requests_total", "outcome" => "success")
                    .increment(1);
                Ok(RateResponse {
                    from: query.from,
                    to: query.to,
                    rate,
                })
            }
            Err(e) => {
                metrics::counter!("relay_upstream_requests_total", "outcome" => "failure")
                    .increment(1);
                tracing::warn!(
                    "[{}] {}/{} lookup failed: {}",
                    self.provider.name(),
                    query.from,
                    query.to,
                    e
                );
                Err(RelayError::Upstream(e))
            }
        }
    }
}
