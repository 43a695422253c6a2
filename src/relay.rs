//! # Cloud Relay Client
//!
//! The service never talks to printer hardware. Rendered tickets are
//! forwarded to a cloud printing relay that owns the physical printers,
//! addressed by the printer's MAC. Forwarding is one HTTP round trip
//! with no retry; a failed submission surfaces as a single error.

use serde::Serialize;

use crate::error::ComandaError;

/// Relay endpoint used when none is configured.
pub const DEFAULT_RELAY_URL: &str = "https://cloudprinter.onrender.com/orders";

/// Payload the relay expects: the destination printer and the rendered
/// ticket byte stream as a string.
#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    #[serde(rename = "printerMAC")]
    printer_mac: &'a str,
    data: &'a str,
}

/// Client for submitting rendered tickets to the cloud printing relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    relay_url: String,
}

impl RelayClient {
    /// Build a client targeting `relay_url`.
    pub fn new(relay_url: impl Into<String>) -> Result<Self, ComandaError> {
        let http = reqwest::Client::builder()
            .user_agent("comanda/0.1")
            .build()
            .map_err(|e| ComandaError::Relay(format!("HTTP client error: {}", e)))?;
        Ok(Self {
            http,
            relay_url: relay_url.into(),
        })
    }

    /// Address of the relay this client submits to.
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }

    /// Submit a rendered ticket for printing on `printer_mac`.
    ///
    /// Returns the relay's JSON response body verbatim on success. A
    /// transport failure or non-success status is a [`ComandaError::Relay`];
    /// the caller decides how to report it, nothing is retried here.
    pub async fn submit(
        &self,
        printer_mac: &str,
        data: &str,
    ) -> Result<serde_json::Value, ComandaError> {
        let response = self
            .http
            .post(&self.relay_url)
            .json(&RelayPayload { printer_mac, data })
            .send()
            .await
            .map_err(|e| ComandaError::Relay(format!("Relay request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ComandaError::Relay(format!(
                "Relay returned {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ComandaError::Relay(format!("Relay response was not JSON: {}", e)))
    }
}
