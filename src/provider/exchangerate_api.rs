use super::RateProvider;
use crate::errors::ProviderError;
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Map, Number, Value};
use std::time::Duration;

/// Fields of the provider's `/pair/{from}/{to}` object that the relay reads.
/// Errors come back in-body too, with `result` set to "error".
#[derive(Debug)]
struct PairResponse {
    result: Option<String>,
    conversion_rate: Option<Number>,
    error_type: Option<String>,
}

impl PairResponse {
    fn from_object(map: &Map<String, Value>) -> Self {
        let text = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            result: text("result"),
            conversion_rate: match map.get("conversion_rate") {
                Some(Value::Number(n)) => Some(n.clone()),
                _ => None,
            },
            error_type: text("error-type"),
        }
    }
}

pub struct ExchangeRateApi {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl ExchangeRateApi {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ProviderError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::InvalidBaseUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// `<base>/<key>/pair/<from>/<to>`, each segment percent-encoded so a
    /// currency code can't reshape the upstream path.
    fn pair_url(&self, from: &str, to: &str) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend([self.api_key.as_str(), "pair", from, to]);
        Ok(url)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApi {
    fn name(&self) -> &'static str {
        "exchangerate-api"
    }

    async fn fetch_pair(&self, from: &str, to: &str) -> Result<Number, ProviderError> {
        let url = self.pair_url(from, to)?;
        tracing::debug!("[{}] requesting {from}/{to}", self.name());

        // strip the URL from errors, it carries the key
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Http(e.without_url()))?;

        // provider errors arrive in-body, status is not checked
        let payload = match serde_json::from_slice::<Value>(&body)? {
            Value::Object(map) => PairResponse::from_object(&map),
            other => {
                tracing::warn!(
                    "[{}] {from}/{to} answered with a non-object body (status {status}): {other}",
                    self.name()
                );
                return Err(ProviderError::Unsuccessful { error_type: None });
            }
        };

        if payload.result.as_deref() != Some("success") {
            tracing::warn!(
                "[{}] {from}/{to} unsuccessful (status {status}, result {:?}, error-type {:?})",
                self.name(),
                payload.result,
                payload.error_type
            );
            return Err(ProviderError::Unsuccessful {
                error_type: payload.error_type,
            });
        }

        payload.conversion_rate.ok_or_else(|| {
            tracing::warn!(
                "[{}] {from}/{to} reported success without a numeric conversion_rate",
                self.name()
            );
            ProviderError::Unsuccessful { error_type: None }
        })
    }
}
