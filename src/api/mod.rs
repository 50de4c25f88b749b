pub mod handlers;
pub mod models;
pub mod router;

use crate::config::Config;
use crate::relay::RateRelay;
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct ApiServer {
    relay: Arc<RateRelay>,
}

impl ApiServer {
    /// Wraps the relay in an Arc for shared handler access.
    pub fn new(relay: RateRelay) -> Self {
        Self {
            relay: Arc::new(relay),
        }
    }

    /// Binds the server to the configured address and serves until Ctrl+C or SIGTERM.
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        // installs the global metrics recorder
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

        let app = router::build(Arc::clone(&self.relay))
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
        let addr = SocketAddr::new(config.host, config.api_port);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("API server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down...");
}
