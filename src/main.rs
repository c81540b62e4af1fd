//! Vynn development backend
//!
//! Serves the profile API from memory so the dashboard can be developed offline.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vynn_dashboard::db::{demo_seed, Repository};
use vynn_dashboard::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vynn development backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if no token is configured
    if config.api_psk.is_none() {
        tracing::warn!("No API token configured (VYNN_API_PSK). Authentication is disabled!");
    }

    let seed = demo_seed();
    tracing::info!(
        "Seeded user {} with {} catalog badges",
        seed.user.username,
        seed.badges.len()
    );

    let state = AppState {
        repo: Arc::new(Repository::new(seed)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
