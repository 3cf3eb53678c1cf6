//! # Valmark Server
//!
//! WebSocket streaming server for the Valmark swap valuation engine.
//!
//! Each connection carries a persistent bidirectional stream: one inbound
//! text frame holds one batch of JSON request items, one outbound frame
//! holds the matching batch of valuation results. Batches on a connection
//! are processed strictly serially; independent connections do not share
//! any mutable state.
//!
//! ## Usage
//!
//! ```ignore
//! use valmark_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod websocket;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;

/// The Valmark streaming server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Creates a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Builds the router.
    pub fn router(&self) -> Router {
        router()
    }

    /// Binds the configured address and serves until shutdown.
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.bind_address();
        let listener = TcpListener::bind(&addr).await?;
        info!("Valmark server listening on {addr}");
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// Builds the service router: a health probe plus the streaming endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ws", get(websocket::ws_handler))
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
async fn health() -> &'static str {
    "OK"
}
