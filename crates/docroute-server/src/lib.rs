//! Preview server for docroute.
//!
//! Serves the built site directory over HTTP with request-time redirect
//! resolution: every request path is checked against the redirect table
//! before static-file resolution, and a hit answers with a permanent
//! redirect instead of content. This is the request-time deployment of the
//! same resolver the build bakes into static pages.
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (docroute-server)
//!                        │
//!                        ├─► /api/manifest (framework configuration)
//!                        │
//!                        └─► fallback handler
//!                                │
//!                                ├─► RedirectTable::resolve ──► 301
//!                                │
//!                                └─► static files from the output dir
//! ```

mod app;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use docroute_redirects::RedirectTable;
use docroute_site::SiteManifest;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Built site directory to serve.
    pub output_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            output_dir: PathBuf::from("dist"),
        }
    }
}

/// Server error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured host/port pair is not a valid socket address.
    #[error("Invalid bind address {addr}: {source}")]
    Addr {
        /// The address as configured.
        addr: String,
        /// Underlying parse error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// Bind or serve failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the server until ctrl-c.
///
/// The redirect table and manifest are constructed once by the caller and
/// shared read-only across all request handlers; no synchronization is
/// needed for lookups.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to
/// start.
pub async fn run_server(
    config: ServerConfig,
    manifest: SiteManifest,
    redirects: RedirectTable,
) -> Result<(), ServerError> {
    let state = Arc::new(AppState {
        manifest,
        redirects,
        output_dir: config.output_dir.clone(),
    });

    let app = app::create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&addr).map_err(|source| ServerError::Addr { addr, source })?;
    tracing::info!(address = %addr, "Starting preview server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from a loaded docroute config.
#[must_use]
pub fn server_config_from_config(config: &docroute_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        output_dir: config.build_resolved.output_dir.clone(),
    }
}
