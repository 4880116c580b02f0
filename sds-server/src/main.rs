//! SDS Server - Spine Directory Lookup Daemon
//!
//! A pure Rust HTTP server that:
//! - Resolves routing + reliability records on /endpoint
//! - Serves liveness and build metadata on /healthcheck and /version
//! - Provides admin cache control on /cache and /status
//!
//! Access via: http://localhost:9000

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod render;
mod router;
mod state;
#[cfg(test)]
mod test_helpers;

use sds_core::{build_directory_client, LookupService};
use state::AppState;

#[derive(Parser)]
#[command(name = "sds-server", version, about = "Spine Directory lookup HTTP service")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, env = "SDS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured listen port
    #[arg(long, env = "SDS_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        app_config.server.port = port;
    }

    info!("🚀 SDS server starting on port {}...", app_config.server.port);

    let directory = build_directory_client(&app_config.directory)
        .map_err(|e| anyhow::anyhow!("failed to build directory client: {e}"))?;
    let lookup = LookupService::new(directory, &app_config.cache);
    let state = AppState::new(lookup, app_config.clone());

    info!(
        "📖 Directory mode: {:?}, cache TTL {}s (negative {}s)",
        app_config.directory.mode, app_config.cache.ttl_secs, app_config.cache.negative_ttl_secs
    );

    let app = router::build_router(state);

    let addr: SocketAddr =
        format!("{}:{}", app_config.server.host, app_config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🔎 Lookup endpoint at http://{}/endpoint", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
