//! Ticket printing handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::order::OrderSummary;
use crate::ticket::{TicketMeta, build_ticket};

use super::super::state::AppState;

/// Request body for POST /print.
///
/// `printerMAC` and `orderSummary` are required; the remaining fields
/// override the [`TicketMeta`] defaults when present.
#[derive(Debug, Deserialize)]
pub struct PrintRequest {
    #[serde(rename = "printerMAC")]
    pub printer_mac: Option<String>,
    #[serde(rename = "orderSummary")]
    pub order_summary: Option<OrderSummary>,
    #[serde(flatten)]
    pub meta: TicketMeta,
}

/// Handle POST /print - render the order ticket and forward it to the
/// cloud relay for the addressed printer.
pub async fn print(State(state): State<Arc<AppState>>, Json(req): Json<PrintRequest>) -> Response {
    // Validate before rendering anything.
    let (printer_mac, order) = match (&req.printer_mac, &req.order_summary) {
        (Some(mac), Some(order)) if !mac.trim().is_empty() => (mac.as_str(), order),
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Missing printerMAC or orderSummary",
            );
        }
    };

    let data = build_ticket(order, &req.meta);
    tracing::info!(
        printer = printer_mac,
        order_id = %req.meta.order_id,
        bytes = data.len(),
        "forwarding ticket to relay"
    );

    match state.relay.submit(printer_mac, &data).await {
        Ok(body) => (
            StatusCode::OK,
            Json(json!({"ok": true, "cloudprinter": body})),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(printer = printer_mac, error = %e, "relay submission failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        }
    }
}

/// Generate error response JSON.
fn error_response(status: StatusCode, error_msg: &str) -> Response {
    (status, Json(json!({"ok": false, "error": error_msg}))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_overrides() {
        let req: PrintRequest = serde_json::from_value(json!({
            "printerMAC": "00:11:62:aa:bb:cc",
            "orderSummary": {"total_amount": "10"},
            "order_id": "CHT-1042",
            "payment_status": "Paid"
        }))
        .unwrap();
        assert_eq!(req.printer_mac.as_deref(), Some("00:11:62:aa:bb:cc"));
        assert_eq!(req.meta.order_id, "CHT-1042");
        assert_eq!(req.meta.payment_status, "Paid");
        // Untouched fields keep their defaults.
        assert_eq!(req.meta.restaurant_name, "Chesters Takeaway");
        assert_eq!(req.order_summary.unwrap().total_amount, 10.0);
    }

    #[test]
    fn test_request_missing_fields_deserializes() {
        // Validation happens in the handler, not in serde; a body with
        // neither required field still parses.
        let req: PrintRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.printer_mac.is_none());
        assert!(req.order_summary.is_none());
    }
}
