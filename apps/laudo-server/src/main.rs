//! Laudo Server
//!
//! HTTP front end for the forensic drug-analysis report generator. The form
//! layer posts a structured seizure record; the server answers with the
//! assembled report as JSON blocks or as a `.docx` download.
//!
//! ## Endpoints
//!
//! - `GET /health`
//! - `GET /api/catalog`: material, packaging and colour codes
//! - `POST /api/laudo/preview`: report text as JSON blocks
//! - `POST /api/laudo`: report as `.docx`
//!
//! Generation runs on a blocking thread with a timeout; requests are rate
//! limited per IP via tower-governor.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use laudo_engine::ReportConfig;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{handle_catalog, handle_generate, handle_health, handle_preview};

/// Command-line arguments for the laudo server
#[derive(Parser, Debug)]
#[command(name = "laudo-server")]
#[command(about = "Forensic drug-analysis report generator")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "LAUDO_PORT", default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "LAUDO_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Generation timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Report configuration file (JSON); defaults apply when omitted
    #[arg(short, long, env = "LAUDO_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Generation timeout in milliseconds
    pub timeout_ms: u64,
    pub config: Arc<ReportConfig>,
}

/// Routes without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/catalog", get(handle_catalog))
        .route("/api/laudo/preview", post(handle_preview))
        .route("/api/laudo", post(handle_generate))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting laudo server on {}:{}", args.host, args.port);

    // Load report configuration
    let config = ReportConfig::load(args.config.as_deref())
        .context("Failed to load report configuration")?;

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .context("Failed to create rate limiter config")?,
    );

    let state = AppState {
        timeout_ms: args.timeout_ms,
        config: Arc::new(config),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router and apply middleware
    let app = router(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Generation timeout: {}ms", args.timeout_ms);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
