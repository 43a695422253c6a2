//! # HTTP Server for Ticket Printing
//!
//! Exposes the renderer over HTTP: an order comes in as JSON, the
//! ticket is rendered, and the result is forwarded to the cloud relay.
//!
//! ## Usage
//!
//! ```bash
//! comanda serve --listen 0.0.0.0:8080
//! ```
//!
//! ## Routes
//!
//! | Route | Method | Description |
//! |-------|--------|-------------|
//! | `/print` | POST | Render an order ticket and forward it to the relay |
//! | `/health` | GET | Liveness probe |

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::ComandaError;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use comanda::server::{ServerConfig, serve};
///
/// # async fn example() -> Result<(), comanda::error::ComandaError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     relay_url: comanda::relay::DEFAULT_RELAY_URL.to_string(),
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ComandaError> {
    let app_state = Arc::new(AppState::new(config.clone())?);

    let app = Router::new()
        .route("/print", post(handlers::print::print))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    tracing::info!("Listening on: {}", config.listen_addr);
    tracing::info!("Relay endpoint: {}", config.relay_url);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            ComandaError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ComandaError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
