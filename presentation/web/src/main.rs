use dotenvy::dotenv;

mod api;
mod config;
mod render;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Catalog manager entry point.
///
/// - config/: environment configuration (server, CORS, store, remote feeds)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, form DTOs and error mappers
/// - render/: markup for every panel
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open the key-value store
    let store = config.store.open();

    // 5. Wire dependencies (loads or seeds the catalog)
    let container = DependencyContainer::new(store, &config.feeds)?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
