// ABOUTME: HTTP server startup
// ABOUTME: Opens the database, builds the router with CORS and serves until Ctrl-C

use anyhow::Context;
use laundry_api::{build_cors_layer, create_router, AppState};
use laundry_config::Config;
use laundry_providers::ProviderRegistry;
use laundry_storage::Database;
use tracing::{info, warn};

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let providers = ProviderRegistry::with_defaults(config.openai_api_key.clone());

    // Refuse to start with a provider nobody can resolve
    providers
        .resolve(&config.app.ml_provider)
        .with_context(|| format!("Invalid ml_provider in {}", config.config_file.display()))?;

    let db = Database::connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    let state = AppState::new(&db, providers, &config.app.ml_provider);
    let cors = build_cors_layer(&config.cors_origin)
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let app = create_router(state).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("Active suggestion provider: {}", config.app.ml_provider);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
