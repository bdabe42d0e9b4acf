//! KshetraServer - HTTP surface for the hazard-aware route planner.
//!
//! Serves the planning library over JSON:
//!
//! - `GET /` - liveness message
//! - `POST /path/generate` - plan a route across a hazard field
//!
//! Planning is synchronous and allocation-local per request; the shared
//! state is a single immutable planner, so requests run concurrently
//! without coordination.

mod config;
mod error;
mod routes;
mod state;

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use kshetra_plan::PathPlanner;

use config::ServerConfig;
use error::Result;
use state::AppState;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "kshetra-server", about = "Hazard-aware path planning service")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen address, e.g. 0.0.0.0:8080
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kshetra_server=info".parse().unwrap())
                .add_directive("kshetra_plan=info".parse().unwrap())
                .add_directive("tower_http=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            ServerConfig::load(path)?
        }
        None if Path::new("kshetra.toml").exists() => {
            info!("Loading configuration from kshetra.toml");
            ServerConfig::load(Path::new("kshetra.toml"))?
        }
        None => {
            info!("Using default configuration");
            ServerConfig::default()
        }
    };

    let address = args.bind.unwrap_or_else(|| config.address());

    info!("KshetraServer v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Planner: obstacle_threshold={} relaxation_factor={} demo_hazards={}",
        config.planner.obstacle_threshold,
        config.planner.relaxation_factor,
        config.planner.demo_hazard_count
    );

    let state = AppState::new(PathPlanner::new(config.planner.clone()));
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&address).await?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("KshetraServer finished");
    Ok(())
}

/// Resolve on ctrl-c so in-flight requests drain before exit.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
