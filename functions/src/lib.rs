pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use tracing_subscriber::EnvFilter;

use infrastructure::{AppState, ServerConfig};
use shared::AppResult;

pub use infrastructure::create_router;

/// Start the callable function host and serve until shutdown
pub async fn run() -> AppResult<()> {
    let config = ServerConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(true)
        .init();

    tracing::info!("Emotion care functions starting...");
    tracing::debug!("Server config: {:?}", config);

    let state = AppState::new();
    infrastructure::serve(&config, state).await
}
