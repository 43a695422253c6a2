//! Server state and configuration.

use crate::error::ComandaError;
use crate::relay::RelayClient;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Cloud printing relay endpoint tickets are forwarded to
    pub relay_url: String,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Shared relay client; reqwest clients pool connections internally.
    pub relay: RelayClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, ComandaError> {
        let relay = RelayClient::new(&config.relay_url)?;
        Ok(Self { config, relay })
    }
}
