use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::layout::rasterizer::MIN_RASTER_SCALE;

/// Application configuration loaded from environment variables.
/// Everything has a sensible default - the service runs with no environment
/// at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory PDF artifacts are written into (created at startup).
    pub export_dir: PathBuf,
    /// Export upscale factor; clamped to the print-sharpness floor.
    pub raster_scale: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let raster_scale = std::env::var("RASTER_SCALE")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u32>()
            .context("RASTER_SCALE must be a positive integer")?
            .max(MIN_RASTER_SCALE);

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            export_dir: std::env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("exports")),
            raster_scale,
        })
    }
}
