use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Lifecycle status of an order on the loading dashboard.
///
/// Deliberately unconstrained: the dashboard may set any status at any time,
/// there are no transition guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Loaded,
    Delivered,
}

/// One product entry within a receipt.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderLineItem {
    pub product: String,
    pub quantity: u32,
    /// Currency-agnostic unit price. A line item that arrived without a
    /// price decodes as 0.0 and contributes nothing to totals.
    #[serde(default)]
    pub unit_price: f64,
}

/// Detailed contents of an order (line items, dates, invoice link).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Receipt {
    pub order_id: Uuid,
    pub customer_id: Uuid,
    pub order_date: DateTime<Utc>,
    pub shipment_date: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
    pub invoice_url: String,
    pub loading_instructions: Option<String>,
}

/// A customer purchase record with a lifecycle status and optional receipt.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Order {
    pub id: Uuid,
    pub name: String,
    pub status: OrderStatus,
    pub receipt: Option<Receipt>,
}

impl Order {
    /// Line items of this order's receipt, or an empty slice when the order
    /// has no receipt yet.
    pub fn line_items(&self) -> &[OrderLineItem] {
        self.receipt
            .as_ref()
            .map(|r| r.items.as_slice())
            .unwrap_or(&[])
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
