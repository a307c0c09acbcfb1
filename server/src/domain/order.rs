//! Order Entity
//!
//! A purchase paid from the user balance, plus its line items.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    /// Sum of quantity * price over all items, in rubles
    pub total: i64,
    pub status: OrderStatus,
    pub created_at: String,
    /// Number of line items, filled by listing queries
    #[serde(default)]
    pub items_count: u32,
}

impl Entity for Order {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A line of an order with the title and price captured at purchase time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub order_id: u32,
    pub product_id: u32,
    pub title: String,
    pub quantity: u32,
    pub price: i64,
}

/// Line requested by the client. `price` is informational; the catalogue
/// price is what gets charged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderLine {
    pub product_id: u32,
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<i64>,
}

/// Order with its items, as returned by the details endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Reject empty orders and zero quantities before touching the database
pub fn validate_lines(lines: &[OrderLine]) -> DomainResult<()> {
    if lines.is_empty() {
        return Err(DomainError::InvalidInput("No items in order".to_string()));
    }
    if let Some(line) = lines.iter().find(|l| l.quantity == 0) {
        return Err(DomainError::InvalidInput(format!(
            "Invalid quantity for product {}",
            line.product_id
        )));
    }
    Ok(())
}

/// Total of (quantity, unit price) pairs
pub fn order_total(priced: &[(u32, i64)]) -> i64 {
    priced.iter().map(|(qty, price)| i64::from(*qty) * price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: u32, quantity: u32) -> OrderLine {
        OrderLine { product_id, quantity, price: None }
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in [OrderStatus::Pending, OrderStatus::Completed, OrderStatus::Cancelled] {
            assert_eq!(OrderStatus::from_str(status.as_str()), status);
        }
        assert_eq!(OrderStatus::from_str("refunded"), OrderStatus::Pending);
    }

    #[test]
    fn test_validate_lines() {
        assert_eq!(
            validate_lines(&[]),
            Err(DomainError::InvalidInput("No items in order".to_string()))
        );
        assert!(validate_lines(&[line(1, 0)]).is_err());
        assert!(validate_lines(&[line(1, 2), line(3, 1)]).is_ok());
    }

    #[test]
    fn test_order_total() {
        assert_eq!(order_total(&[(2, 1999), (1, 899)]), 4897);
        assert_eq!(order_total(&[]), 0);
    }

    #[test]
    fn test_order_line_accepts_missing_price() {
        let parsed: OrderLine = serde_json::from_str(r#"{"product_id":4,"quantity":2}"#).unwrap();
        assert_eq!(parsed, line(4, 2));
    }
}
