mod api;
mod config;
mod errors;
mod models;
mod provider;
mod relay;

use api::ApiServer;
use config::{Config, LogFormat};
use provider::ExchangeRateApi;
use relay::RateRelay;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        "Rate relay starting: provider {} on {}:{} (upstream timeout {:?})",
        config.provider_base_url,
        config.host,
        config.api_port,
        config.upstream_timeout
    );

    let provider = ExchangeRateApi::new(
        &config.provider_base_url,
        &config.api_key,
        config.upstream_timeout,
    )?;
    let relay = RateRelay::new(Arc::new(provider));

    ApiServer::new(relay).run(config).await
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
