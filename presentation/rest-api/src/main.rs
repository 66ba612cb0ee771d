use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Exposes the expiry estimation and suggestion engine over stateless JSON
/// endpoints:
/// - config/: Server, CORS and engine defaults from the environment
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (RUST_LOG may come from .env)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(
        suggestion_limit = config.engine.suggestion_limit,
        expiring_soon_threshold_days = config.engine.expiring_soon_threshold_days,
        "Engine configuration loaded"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.engine);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
