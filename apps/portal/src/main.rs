mod api_client;
mod config;
mod contact;
mod errors;
mod jobs;
mod market;
mod models;
mod portfolio;
mod presentation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::contact::submission::{SimulatedTransport, SUBMITTED_DISPLAY};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portal v{}", env!("CARGO_PKG_VERSION"));

    let api = ApiClient::new(config.api_base_url.clone(), config.upstream_timeout)?;
    info!(
        "Jobs API client initialized ({:?}: {}, timeout {:?})",
        config.mode,
        api.base_url(),
        config.upstream_timeout
    );

    if !config.resume_path.exists() {
        warn!(
            "Resume file {} not found; GET /resume will return 404",
            config.resume_path.display()
        );
    }

    let state = AppState {
        config: config.clone(),
        api,
        transport: Arc::new(SimulatedTransport::default()),
        contact_display: SUBMITTED_DISPLAY,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
