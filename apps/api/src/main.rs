mod config;
mod db;
mod errors;
mod genai;
mod registration;
mod routes;
mod scoring;
mod sections;
mod state;
mod store;
mod uploads;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::genai::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::pg::PgStore;
use crate::uploads::UploadStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (aborts on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    // Initialize the upload store
    let uploads = UploadStore::new(&config.upload_dir).await?;
    info!("Upload store ready at {}", config.upload_dir);

    // Initialize the GenAI client
    let model = GeminiClient::new(
        config.gemini_api_key.clone(),
        Duration::from_secs(config.genai_timeout_secs),
    );
    info!(
        "GenAI client initialized (models: {}, {})",
        genai::TEXT_MODEL,
        genai::VISION_MODEL
    );

    // Build app state
    let state = AppState {
        store: Arc::new(PgStore::new(pool)),
        uploads,
        model: Arc::new(model),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the browser frontend posts cross-origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
