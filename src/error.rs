//! # Error Types
//!
//! This module defines error types used throughout the comanda library.

use thiserror::Error;

/// Main error type for comanda operations
#[derive(Debug, Error)]
pub enum ComandaError {
    /// Cloud relay errors (client construction, forwarding, bad response)
    #[error("Relay error: {0}")]
    Relay(String),

    /// Malformed or incomplete input
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
