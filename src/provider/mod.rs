use crate::errors::ProviderError;
use async_trait::async_trait;
use serde_json::Number;

pub mod exchangerate_api;

pub use exchangerate_api::ExchangeRateApi;

#[async_trait]
pub trait RateProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Asks the provider for the conversion rate of one unit of `from` in `to`,
    /// as the number it was sent. Every call goes out to the network.
    async fn fetch_pair(&self, from: &str, to: &str) -> Result<Number, ProviderError>;
}
