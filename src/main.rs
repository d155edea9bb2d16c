use std::process::ExitCode;
use std::sync::Arc;

use nylas_webhook_receiver::{http_server, AppState, Config, EventStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nylas_webhook_receiver=info,tower_http=info")),
        )
        .init();

    // Refuse to serve without a secret
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(timezone = %config.timezone, "display timezone resolved");

    let state = AppState::new(config.secret, config.timezone, Arc::new(EventStore::new()));

    if let Err(e) = http_server::start(config.bind_addr, state).await {
        tracing::error!(error = %e, "HTTP server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
