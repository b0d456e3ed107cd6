//! VidaMed Web Server - content service HTTP entry point.
//!
//! This binary serves:
//! - `POST /api/revalidate`: signed CMS change notifications
//! - `GET /api/revalidate`: reachability probe describing the POST contract
//! - `GET /sitemap.xml`: sitemap assembled from CMS slug listings
//! - `GET /health`: liveness probe

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidamed::web::{health, revalidate_info, revalidate_webhook, sitemap, AppState};
use vidamed::{Config, SanityClient, TagCache};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        site_url = %config.site_url,
        revalidate_secret_configured = config.revalidate_secret.is_some(),
        sanity_project_id = %config.sanity_project_id,
        sanity_dataset = %config.sanity_dataset,
        sanity_token_configured = config.sanity_token.is_some(),
        "config_loaded"
    );

    // Create the CMS client and the tag cache
    let content = SanityClient::new(&config).context("Failed to build content client")?;
    let cache = TagCache::new();

    // Create application state
    let state = AppState::new(config.clone(), cache, content);

    // Build the router
    let app = Router::new()
        .route("/health", get(health))
        .route("/api/revalidate", get(revalidate_info).post(revalidate_webhook))
        .route("/sitemap.xml", get(sitemap))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
