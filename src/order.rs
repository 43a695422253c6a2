//! # Order Data Model
//!
//! Serde types for the inbound order document. Callers send loosely
//! typed JSON (amounts as numbers or numeric strings, timestamps as RFC
//! 3339 or epoch milliseconds, most fields optional), so deserialization
//! is deliberately lenient: every field has a safe default and malformed
//! values degrade instead of failing the request.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One item on the order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Item name as shown on the ticket.
    pub name: String,
    /// Positive quantity; absent, zero, or malformed renders as "1 x ".
    #[serde(deserialize_with = "lenient_quantity")]
    pub quantity: Option<u32>,
    /// Preparation notes, appended in parentheses when non-empty.
    pub notes: Option<String>,
    /// Unit-less price; number or numeric string, malformed becomes 0.
    #[serde(deserialize_with = "lenient_amount")]
    pub price: f64,
}

/// The order as submitted by the ordering frontend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderSummary {
    /// Items in the order, in submission order.
    pub order_breakdown: Vec<LineItem>,
    /// "collect" (any casing) selects pickup; anything else is delivery.
    pub delivery_type: Option<String>,
    pub delivery_address: Option<String>,
    pub postcode: Option<String>,
    pub customer_name: Option<String>,
    pub contact: Option<String>,
    /// Free-form notes for the kitchen; rendered as "None" when empty.
    pub special_notes: Option<String>,
    /// Order subtotal before the delivery surcharge.
    #[serde(deserialize_with = "lenient_amount")]
    pub total_amount: f64,
    /// Order creation time; render time is used when absent.
    #[serde(rename = "createdAt", deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl OrderSummary {
    /// Whether this is a pickup order. Case-insensitive; an absent or
    /// empty `delivery_type` counts as delivery for the surcharge but
    /// renders as "Collect" on the Type row.
    pub fn is_collect(&self) -> bool {
        self.delivery_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("collect"))
    }
}

/// Parse an amount that may arrive as a JSON number or a numeric
/// string. Anything else (including unparseable strings) is 0.
fn parse_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_amount(&value))
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let quantity = match &value {
        Value::Number(n) => n.as_u64().and_then(|q| u32::try_from(q).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(quantity)
}

/// Parse a timestamp that may arrive as an RFC 3339 string or as epoch
/// milliseconds. Anything else is treated as absent.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let timestamp = match &value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    };
    Ok(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(value: Value) -> OrderSummary {
        serde_json::from_value(value).expect("order should always deserialize")
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let o = order(json!({}));
        assert!(o.order_breakdown.is_empty());
        assert_eq!(o.total_amount, 0.0);
        assert!(o.created_at.is_none());
        assert!(o.special_notes.is_none());
        assert!(!o.is_collect());
    }

    #[test]
    fn test_amount_accepts_number_and_string() {
        assert_eq!(order(json!({"total_amount": 10})).total_amount, 10.0);
        assert_eq!(order(json!({"total_amount": "10"})).total_amount, 10.0);
        assert_eq!(order(json!({"total_amount": " 7.95 "})).total_amount, 7.95);
    }

    #[test]
    fn test_malformed_amount_is_zero() {
        assert_eq!(order(json!({"total_amount": "abc"})).total_amount, 0.0);
        assert_eq!(order(json!({"total_amount": null})).total_amount, 0.0);
        assert_eq!(order(json!({"total_amount": [1, 2]})).total_amount, 0.0);
    }

    #[test]
    fn test_item_price_lenient() {
        let o = order(json!({"order_breakdown": [{"name": "Chips", "price": "abc"}]}));
        assert_eq!(o.order_breakdown[0].price, 0.0);
    }

    #[test]
    fn test_quantity_lenient() {
        let items = order(json!({"order_breakdown": [
            {"name": "a", "quantity": 2},
            {"name": "b", "quantity": "3"},
            {"name": "c", "quantity": -1},
            {"name": "d", "quantity": "lots"},
            {"name": "e"}
        ]}))
        .order_breakdown;
        assert_eq!(items[0].quantity, Some(2));
        assert_eq!(items[1].quantity, Some(3));
        assert_eq!(items[2].quantity, None);
        assert_eq!(items[3].quantity, None);
        assert_eq!(items[4].quantity, None);
    }

    #[test]
    fn test_created_at_rfc3339() {
        let o = order(json!({"createdAt": "2026-03-01T18:30:00Z"}));
        assert_eq!(
            o.created_at,
            Some(Utc.with_ymd_and_hms(2026, 3, 1, 18, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_created_at_epoch_millis() {
        let o = order(json!({"createdAt": 1_767_292_200_000i64}));
        assert_eq!(
            o.created_at,
            Some(Utc.timestamp_millis_opt(1_767_292_200_000).unwrap())
        );
    }

    #[test]
    fn test_created_at_garbage_is_absent() {
        assert!(order(json!({"createdAt": "next tuesday"})).created_at.is_none());
        assert!(order(json!({"createdAt": {"y": 2026}})).created_at.is_none());
    }

    #[test]
    fn test_is_collect_case_insensitive() {
        assert!(order(json!({"delivery_type": "collect"})).is_collect());
        assert!(order(json!({"delivery_type": "Collect"})).is_collect());
        assert!(order(json!({"delivery_type": "COLLECT"})).is_collect());
        assert!(!order(json!({"delivery_type": "Delivery"})).is_collect());
        assert!(!order(json!({})).is_collect());
    }
}
