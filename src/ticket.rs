//! # Order Ticket Renderer
//!
//! Renders an [`OrderSummary`] into the MC-Print3 byte stream for a
//! kitchen ticket: fixed-width text with embedded escape commands for
//! alignment, emphasis, sizing, paper feed, and the final cut.
//!
//! The renderer is a pure function of its inputs (plus the current time
//! when the order carries no timestamp): no I/O, no shared state, and it
//! never fails. Missing or malformed fields degrade to documented
//! defaults upstream in [`crate::order`], so by the time data reaches
//! this module every value is renderable.
//!
//! The output is a `String` rather than `Vec<u8>` because the cloud
//! relay takes the ticket as a JSON string field; every command byte is
//! in the ASCII range, so commands embed losslessly as characters.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::layout::{ITEM_WIDTH, NOTES_WIDTH, label_value, wrap, wrap_priced};
use crate::order::{LineItem, OrderSummary};
use crate::protocol::commands::{self, Alignment};

/// Surcharge added to the total for delivery orders.
pub const DELIVERY_CHARGE: f64 = 1.50;

/// Order time format, pinned to the en-US shape the kitchen is used to
/// reading, e.g. `3/1/2026, 6:30:00 PM`.
const ORDER_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

const ITEMS_BANNER: &str = "******************* ITEMS ******************";
const ITEMS_HEADER: &str = "Description                   Amount";

/// Per-ticket metadata that is not part of the order itself.
///
/// Every field has a default so a bare `{printerMAC, orderSummary}`
/// request still renders a complete ticket.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TicketMeta {
    /// Header line, printed uppercased. Default: "Chesters Takeaway".
    pub restaurant_name: String,
    /// Second header line. Default: "153-155 Blackburn Road, Bolton, BL1 8HE".
    pub restaurant_address: String,
    /// Ticket reference. Default: "ORDER-NA".
    pub order_id: String,
    /// Printed uppercased in the payment banner. Default: "Not Paid".
    pub payment_status: String,
}

impl Default for TicketMeta {
    fn default() -> Self {
        Self {
            restaurant_name: "Chesters Takeaway".to_string(),
            restaurant_address: "153-155 Blackburn Road, Bolton, BL1 8HE".to_string(),
            order_id: "ORDER-NA".to_string(),
            payment_status: "Not Paid".to_string(),
        }
    }
}

/// Append-only accumulator interleaving text and command bytes.
///
/// The ticket is assembled strictly front to back; nothing is ever
/// edited in place. Command bytes are ASCII-range, so pushing them as
/// chars keeps the buffer a valid `String` with the exact wire bytes.
struct TicketBuilder {
    buf: String,
}

impl TicketBuilder {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Append raw command bytes.
    fn cmd(&mut self, bytes: Vec<u8>) {
        for b in bytes {
            self.buf.push(b as char);
        }
    }

    /// Append text verbatim, no newline.
    fn text(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Append a newline-terminated line.
    fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Append a horizontal rule of `width` dashes.
    fn rule(&mut self, width: usize) {
        self.line(&"-".repeat(width));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Format one item as its wrapped, price-aligned block.
fn item_block(item: &LineItem) -> String {
    let qty = match item.quantity {
        Some(q) if q > 0 => format!("{} x ", q),
        _ => "1 x ".to_string(),
    };
    let description = match item.notes.as_deref() {
        Some(notes) if !notes.is_empty() => format!("{}{} ({})", qty, item.name, notes),
        _ => format!("{}{}", qty, item.name),
    };
    let price = format!("#{:.2}", item.price);
    wrap_priced(&description, &price, ITEM_WIDTH)
}

/// Render the ticket using the current time for the order timestamp
/// fallback. See [`build_ticket_at`].
pub fn build_ticket(order: &OrderSummary, meta: &TicketMeta) -> String {
    build_ticket_at(order, meta, Utc::now())
}

/// Render the ticket with an explicit `now` for the timestamp fallback.
///
/// Deterministic: identical inputs produce byte-identical output. The
/// emission order is fixed because the printer interprets the embedded
/// commands positionally.
pub fn build_ticket_at(order: &OrderSummary, meta: &TicketMeta, now: DateTime<Utc>) -> String {
    let collect = order.is_collect();
    let delivery_type = order
        .delivery_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or("Collect");
    let special_notes = order
        .special_notes
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("None");
    let order_time = order.created_at.unwrap_or(now);
    let total = order.total_amount + if collect { 0.0 } else { DELIVERY_CHARGE };

    let items = order
        .order_breakdown
        .iter()
        .map(item_block)
        .collect::<Vec<_>>()
        .join("\n");

    let mut t = TicketBuilder::new();

    // Header: centered restaurant name in double-height bold, address
    // underneath, back to normal scale.
    t.cmd(commands::align(Alignment::Center));
    t.cmd(commands::size_double_height());
    t.cmd(commands::bold_on());
    t.line(&meta.restaurant_name.to_uppercase());
    t.cmd(commands::size_normal());
    t.line(&meta.restaurant_address);
    t.cmd(commands::bold_off());
    t.cmd(commands::magnify_normal());
    t.rule(36);

    t.line(&format!(
        "Order Time: {}",
        order_time.format(ORDER_TIME_FORMAT)
    ));
    t.line(&format!("Order ID: {}", meta.order_id));
    t.rule(36);

    t.cmd(commands::bold_on());
    t.line("Extra Notes:");
    t.line(&wrap(special_notes, NOTES_WIDTH));
    t.cmd(commands::bold_off());
    t.rule(36);

    t.line(&label_value("Type:", delivery_type));
    if !collect {
        t.line(&label_value(
            "To:",
            order.delivery_address.as_deref().unwrap_or(""),
        ));
        t.line(&label_value(
            "Postcode:",
            order.postcode.as_deref().unwrap_or(""),
        ));
    }
    t.line(&label_value(
        "Customer:",
        order.customer_name.as_deref().unwrap_or(""),
    ));
    t.line(&label_value(
        "Contact:",
        order.contact.as_deref().unwrap_or(""),
    ));
    t.text("\n");

    t.line(ITEMS_BANNER);
    t.cmd(commands::bold_on());
    t.line(ITEMS_HEADER);
    t.cmd(commands::bold_off());
    t.line(&items);
    t.rule(37);

    t.line(&format!("SubTotal:     #{:.2}", order.total_amount));
    if !collect {
        t.line(&format!("Delivery Charge: #{:.2}", DELIVERY_CHARGE));
    }
    t.cmd(commands::bold_on());
    t.rule(21);
    t.text("\n");
    t.line(&format!("Total:         #{:.2}", total));
    t.rule(21);
    t.cmd(commands::bold_off());

    t.cmd(commands::bold_on());
    t.cmd(commands::size_double_height());
    t.line(&format!("PAYMENT: {}", meta.payment_status.to_uppercase()));
    t.cmd(commands::size_normal());
    t.cmd(commands::bold_off());

    t.text("\n\n\n");
    t.cmd(commands::feed_lines(2));
    t.cmd(commands::cut());

    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 18, 30, 0).unwrap()
    }

    fn order(value: serde_json::Value) -> OrderSummary {
        serde_json::from_value(value).unwrap()
    }

    fn render(value: serde_json::Value) -> String {
        build_ticket_at(&order(value), &TicketMeta::default(), fixed_now())
    }

    #[test]
    fn test_deterministic_for_fixed_time() {
        let o = order(json!({"total_amount": "10", "delivery_type": "Delivery"}));
        let meta = TicketMeta::default();
        assert_eq!(
            build_ticket_at(&o, &meta, fixed_now()),
            build_ticket_at(&o, &meta, fixed_now())
        );
    }

    #[test]
    fn test_header_uses_defaults() {
        let ticket = render(json!({}));
        assert!(ticket.contains("CHESTERS TAKEAWAY\n"));
        assert!(ticket.contains("153-155 Blackburn Road, Bolton, BL1 8HE\n"));
        assert!(ticket.contains("Order ID: ORDER-NA\n"));
        assert!(ticket.contains("PAYMENT: NOT PAID\n"));
    }

    #[test]
    fn test_collect_omits_address_and_surcharge() {
        let ticket = render(json!({
            "delivery_type": "Collect",
            "delivery_address": "12 High Street",
            "postcode": "BL1 2AB",
            "total_amount": "10"
        }));
        assert!(!ticket.contains("To:"));
        assert!(!ticket.contains("Postcode:"));
        assert!(!ticket.contains("Delivery Charge"));
        assert!(ticket.contains("SubTotal:     #10.00\n"));
        assert!(ticket.contains("Total:         #10.00\n"));
    }

    #[test]
    fn test_collect_any_casing() {
        for casing in ["collect", "COLLECT", "cOlLeCt"] {
            let ticket = render(json!({"delivery_type": casing, "total_amount": 5}));
            assert!(!ticket.contains("Delivery Charge"), "casing {:?}", casing);
            assert!(ticket.contains("Total:         #5.00\n"));
        }
    }

    #[test]
    fn test_delivery_adds_surcharge() {
        let ticket = render(json!({
            "delivery_type": "Delivery",
            "delivery_address": "12 High Street",
            "postcode": "BL1 2AB",
            "total_amount": "10"
        }));
        assert!(ticket.contains("To:          12 High Street\n"));
        assert!(ticket.contains("Postcode:    BL1 2AB\n"));
        assert!(ticket.contains("Delivery Charge: #1.50\n"));
        assert!(ticket.contains("SubTotal:     #10.00\n"));
        assert!(ticket.contains("Total:         #11.50\n"));
    }

    #[test]
    fn test_missing_delivery_type_renders_collect_but_charges() {
        // An absent delivery_type shows "Collect" on the Type row yet
        // fails the collect comparison, so the surcharge applies. This
        // mirrors the behavior tickets have always printed with.
        let ticket = render(json!({"total_amount": 10}));
        assert!(ticket.contains("Type:        Collect\n"));
        assert!(ticket.contains("Delivery Charge: #1.50\n"));
        assert!(ticket.contains("Total:         #11.50\n"));
    }

    #[test]
    fn test_item_price_column() {
        let ticket = render(json!({"order_breakdown": [
            {"name": "Chicken Burger", "price": 5.5, "quantity": 2}
        ]}));
        let line = format!("2 x Chicken Burger{}#5.50", " ".repeat(19));
        assert_eq!(line.chars().count(), 42);
        assert!(ticket.contains(&line));
    }

    #[test]
    fn test_item_notes_and_default_quantity() {
        let ticket = render(json!({"order_breakdown": [
            {"name": "Doner Wrap", "notes": "no salad", "price": "7.95"},
            {"name": "Chips", "quantity": 0, "price": 2}
        ]}));
        assert!(ticket.contains("1 x Doner Wrap (no salad)"));
        assert!(ticket.contains("1 x Chips"));
        assert!(ticket.contains("#7.95"));
        assert!(ticket.contains("#2.00"));
    }

    #[test]
    fn test_malformed_price_renders_zero() {
        let ticket = render(json!({"order_breakdown": [
            {"name": "Mystery Box", "price": "abc"}
        ]}));
        assert!(ticket.contains("#0.00"));
    }

    #[test]
    fn test_missing_notes_render_none() {
        let ticket = render(json!({}));
        assert!(ticket.contains("Extra Notes:\nNone\n"));
    }

    #[test]
    fn test_long_notes_wrap_at_32() {
        let ticket = render(json!({
            "special_notes": "Ring the bell twice and wait by the gate"
        }));
        assert!(ticket.contains("Extra Notes:\nRing the bell twice and wait by\nthe gate\n"));
    }

    #[test]
    fn test_order_time_uses_created_at_when_present() {
        let ticket = render(json!({"createdAt": "2026-01-20T12:00:00Z"}));
        assert!(ticket.contains("Order Time: 1/20/2026, 12:00:00 PM\n"));
    }

    #[test]
    fn test_order_time_falls_back_to_now() {
        let ticket = render(json!({}));
        assert!(ticket.contains("Order Time: 3/1/2026, 6:30:00 PM\n"));
    }

    #[test]
    fn test_trailer_feeds_and_cuts() {
        let ticket = render(json!({}));
        assert!(ticket.ends_with("\n\n\n\x1b\x64\x02\x1b\x69"));
    }

    #[test]
    fn test_header_command_prefix() {
        let ticket = render(json!({}));
        // Center align, double height, bold, then the uppercased name.
        assert!(ticket.starts_with("\x1b\x1d\x61\x01\x1b\x69\x01\x00\x1b\x45CHESTERS TAKEAWAY\n"));
    }

    #[test]
    fn test_empty_breakdown_renders_blank_items_line() {
        let ticket = render(json!({}));
        let header_then_blank = format!("{}\n\x1b\x46\n", ITEMS_HEADER);
        assert!(ticket.contains(&header_then_blank));
    }
}
