//! # Comanda - Takeaway Order Ticket Service
//!
//! Comanda renders takeaway orders into kitchen tickets for Star
//! MC-Print3 thermal printers and forwards them to a cloud printing
//! relay. It provides:
//!
//! - **Protocol implementation**: MC-Print3 escape command builders
//! - **Layout engine**: fixed-pitch word wrap and price-column alignment
//! - **Ticket renderer**: deterministic order-to-byte-stream assembly
//! - **Relay client**: one-shot forwarding to the cloud printer relay
//! - **HTTP server**: the `/print` endpoint the ordering frontend calls
//!
//! ## Quick Start
//!
//! ```
//! use comanda::{
//!     order::OrderSummary,
//!     ticket::{TicketMeta, build_ticket},
//! };
//!
//! let order: OrderSummary = serde_json::from_str(
//!     r#"{
//!         "order_breakdown": [{"name": "Chicken Burger", "quantity": 2, "price": 5.5}],
//!         "delivery_type": "Collect",
//!         "total_amount": "11.00"
//!     }"#,
//! )?;
//!
//! let ticket = build_ticket(&order, &TicketMeta::default());
//! assert!(ticket.contains("2 x Chicken Burger"));
//! assert!(ticket.contains("Total:         #11.00"));
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | MC-Print3 escape command builders |
//! | [`layout`] | Word wrap and column alignment |
//! | [`order`] | Inbound order data model |
//! | [`ticket`] | Ticket renderer |
//! | [`relay`] | Cloud relay client |
//! | [`server`] | HTTP surface |
//! | [`error`] | Error types |
//!
//! ## Rendering Guarantees
//!
//! The renderer never fails: every optional or malformed field degrades
//! to a documented default, and identical inputs (with identical order
//! timestamps) produce byte-identical output. Escape commands are
//! embedded at fixed positions because the printer firmware interprets
//! them positionally.

pub mod error;
pub mod layout;
pub mod order;
pub mod protocol;
pub mod relay;
pub mod server;
pub mod ticket;

// Re-exports for convenience
pub use error::ComandaError;
pub use order::OrderSummary;
pub use ticket::{TicketMeta, build_ticket};
