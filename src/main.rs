use std::sync::Arc;

use tracing::info;

mod auth;
mod config;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apikey_gate=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        addr = %config.addr,
        key_configured = config.api_key.is_some(),
        "configuration loaded"
    );

    let state = Arc::new(AppState::new(config.api_key));
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "apikey-gate listening");

    axum::serve(listener, app).await?;
    Ok(())
}
