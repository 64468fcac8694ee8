mod accounts;
mod config;
mod errors;
mod payments;
mod reports;
mod routes;
mod scoring;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::accounts::UserStore;
use crate::config::Config;
use crate::payments::PaymentStore;
use crate::reports::ReportStore;
use crate::routes::build_router;
use crate::scoring::extract::UnavailableExtractor;
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

    info!("Starting Scam Shield API v{}", env!("CARGO_PKG_VERSION"));

    // File-backed stores under DATA_DIR; payment proofs under UPLOADS_DIR.
    tokio::fs::create_dir_all(&config.uploads_dir).await?;
    let users = UserStore::new(&config.data_dir);
    let payments = PaymentStore::new(&config.data_dir);
    let reports = ReportStore::new(&config.data_dir);
    reports.ensure_seeded().await?;
    info!("JSON stores ready in {}", config.data_dir.display());

    let state = AppState {
        users,
        payments,
        reports,
        // No OCR engine bundled; swap in a real backend here when one is.
        extractor: Arc::new(UnavailableExtractor),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
