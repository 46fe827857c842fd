// Claim chart web server entry point
//
// Usage: cargo run --bin claim_chart_server
// Reads API_KEY (and optional SERPAPI_BASE_URL, COMPANY_NAME, PORT,
// LOOKUP_TIMEOUT_SECS) from the environment or a .env file.

use claim_chart::{create_router, AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "claim_chart=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting claim chart server...");

    let config = AppConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  SERPAPI_BASE_URL: {}", config.search_base_url);
    tracing::info!("  COMPANY_NAME: {}", config.company_name);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  LOOKUP_TIMEOUT_SECS: {}", config.lookup_timeout.as_secs());

    let port = config.port;
    let state = AppState::new(config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
