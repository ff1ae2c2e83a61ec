mod builder;
mod config;
mod errors;
mod export;
mod forms;
mod layout;
mod models;
mod render;
mod routes;
mod state;
mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::rasterizer::BoxModelRasterizer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::templates::catalog;

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

    info!("Starting Resume Studio API v{}", env!("CARGO_PKG_VERSION"));
    info!("{} templates registered", catalog().len());

    // Artifact directory must exist before the first export
    std::fs::create_dir_all(&config.export_dir).with_context(|| {
        format!(
            "could not create export directory {}",
            config.export_dir.display()
        )
    })?;
    info!(
        "Export artifacts: {} (raster scale {}x)",
        config.export_dir.display(),
        config.raster_scale
    );

    // Default rasterization backend - swap here to plug a different engine
    let rasterizer = Arc::new(BoxModelRasterizer);

    let state = AppState::new(config.clone(), rasterizer);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
