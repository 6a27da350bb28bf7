use std::collections::HashMap;

use serde::Serialize;

use crate::domain::order::Order;

// ============================================================================
// Aggregation Engine - per-product rollup for the master order sheet
// ============================================================================
//
// Consumes all orders for one customer and produces one row per distinct
// product name, in first-encountered order. Pure function; malformed or
// receipt-less orders contribute nothing and raise nothing (best-effort
// reporting, not a transactional system).
//
// Key rules:
// - The aggregation key is the product name string exactly as stored. No
//   case or whitespace normalization; "pallet" and "Pallet" are two rows.
// - Total value is the sum of quantity x price per contribution, NOT
//   total quantity x latest price. The two diverge when the same product
//   was ordered at different prices.
// - The displayed unit price is last-write-wins across contributions. A
//   divergence from an earlier contribution is logged at warn.
// - An order's name is attributed to a row at most once, even when the
//   order holds several line items for the same product.
//
// ============================================================================

/// A per-product rollup across all of a customer's orders.
///
/// Derived, never persisted; recomputed from the order list on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedItem {
    pub product: String,
    pub total_quantity: u64,
    /// Unit price of the last contributing line item. Can disagree with
    /// `total_value / total_quantity` when prices varied across orders.
    pub unit_price: f64,
    pub total_value: f64,
    /// Names of contributing orders, de-duplicated, in insertion order.
    pub order_names: Vec<String>,
}

/// Roll up every line item of every order into one row per distinct product.
pub fn aggregate(orders: &[Order]) -> Vec<AggregatedItem> {
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in orders {
        for line in order.line_items() {
            let slot = match index.get(line.product.as_str()) {
                Some(&i) => i,
                None => {
                    index.insert(line.product.clone(), items.len());
                    items.push(AggregatedItem {
                        product: line.product.clone(),
                        total_quantity: 0,
                        unit_price: line.unit_price,
                        total_value: 0.0,
                        order_names: Vec::new(),
                    });
                    items.len() - 1
                }
            };

            let item = &mut items[slot];
            if item.total_quantity > 0 && item.unit_price != line.unit_price {
                tracing::warn!(
                    product = %line.product,
                    previous_price = item.unit_price,
                    current_price = line.unit_price,
                    "Unit price differs across contributions; sheet shows the last-seen price"
                );
            }

            item.total_quantity += u64::from(line.quantity);
            item.total_value += f64::from(line.quantity) * line.unit_price;
            item.unit_price = line.unit_price;

            if !item.order_names.iter().any(|n| n == &order.name) {
                item.order_names.push(order.name.clone());
            }
        }
    }

    tracing::debug!(orders = orders.len(), rows = items.len(), "Aggregated master sheet");
    items
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderLineItem, OrderStatus, Receipt};
    use chrono::Utc;
    use uuid::Uuid;

    fn line(product: &str, quantity: u32, unit_price: f64) -> OrderLineItem {
        OrderLineItem {
            product: product.to_string(),
            quantity,
            unit_price,
        }
    }

    fn order(name: &str, items: Vec<OrderLineItem>) -> Order {
        let order_id = Uuid::new_v4();
        Order {
            id: order_id,
            name: name.to_string(),
            status: OrderStatus::Pending,
            receipt: Some(Receipt {
                order_id,
                customer_id: Uuid::new_v4(),
                order_date: Utc::now(),
                shipment_date: Utc::now(),
                items,
                invoice_url: "https://backend.test/invoices/1".to_string(),
                loading_instructions: None,
            }),
        }
    }

    fn receiptless(name: &str) -> Order {
        Order {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status: OrderStatus::Pending,
            receipt: None,
        }
    }

    #[test]
    fn test_worked_example_from_master_sheet() {
        // Order A: 2 Pallet @ 10.00, 1 Crate @ 5.00; Order B: 3 Pallet @ 10.00
        let orders = vec![
            order("Order A", vec![line("Pallet", 2, 10.0), line("Crate", 1, 5.0)]),
            order("Order B", vec![line("Pallet", 3, 10.0)]),
        ];

        let sheet = aggregate(&orders);
        assert_eq!(sheet.len(), 2);

        let pallet = &sheet[0];
        assert_eq!(pallet.product, "Pallet");
        assert_eq!(pallet.total_quantity, 5);
        assert_eq!(pallet.total_value, 50.0);
        assert_eq!(pallet.order_names, vec!["Order A", "Order B"]);

        let crate_row = &sheet[1];
        assert_eq!(crate_row.product, "Crate");
        assert_eq!(crate_row.total_quantity, 1);
        assert_eq!(crate_row.total_value, 5.0);
        assert_eq!(crate_row.order_names, vec!["Order A"]);
    }

    #[test]
    fn test_quantity_completeness() {
        let orders = vec![
            order("Order A", vec![line("Pallet", 2, 10.0), line("Crate", 4, 5.0)]),
            order("Order B", vec![line("Pallet", 3, 10.0), line("Drum", 7, 2.5)]),
            receiptless("Order C"),
        ];

        let line_total: u64 = orders
            .iter()
            .flat_map(|o| o.line_items())
            .map(|l| u64::from(l.quantity))
            .sum();
        let sheet_total: u64 = aggregate(&orders).iter().map(|i| i.total_quantity).sum();
        assert_eq!(sheet_total, line_total);
    }

    #[test]
    fn test_value_is_sum_of_contributions_not_final_price() {
        // Same product at two prices: value must be 2x10 + 3x12 = 56,
        // not 5 x 12 = 60.
        let orders = vec![
            order("Order A", vec![line("Pallet", 2, 10.0)]),
            order("Order B", vec![line("Pallet", 3, 12.0)]),
        ];

        let sheet = aggregate(&orders);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].total_value, 56.0);
        // Displayed price is last-write-wins.
        assert_eq!(sheet[0].unit_price, 12.0);
    }

    #[test]
    fn test_product_names_are_case_and_whitespace_sensitive() {
        let orders = vec![order(
            "Order A",
            vec![line("Pallet", 1, 1.0), line("pallet", 1, 1.0), line("Pallet ", 1, 1.0)],
        )];

        assert_eq!(aggregate(&orders).len(), 3);
    }

    #[test]
    fn test_order_attributed_once_despite_repeated_product() {
        let orders = vec![order(
            "Order A",
            vec![line("Pallet", 1, 10.0), line("Pallet", 2, 10.0)],
        )];

        let sheet = aggregate(&orders);
        assert_eq!(sheet[0].order_names, vec!["Order A"]);
        assert_eq!(sheet[0].total_quantity, 3);
    }

    #[test]
    fn test_rows_in_first_encountered_order() {
        let orders = vec![
            order("Order A", vec![line("Zinc Sheet", 1, 1.0), line("Anvil", 1, 1.0)]),
            order("Order B", vec![line("Anvil", 1, 1.0), line("Barrel", 1, 1.0)]),
        ];

        let aggregated = aggregate(&orders);
        let products: Vec<&str> = aggregated.iter().map(|i| i.product.as_str()).collect();
        assert_eq!(products, vec!["Zinc Sheet", "Anvil", "Barrel"]);
    }

    #[test]
    fn test_receiptless_and_empty_orders_are_skipped() {
        let orders = vec![receiptless("Order A"), order("Order B", vec![])];
        assert!(aggregate(&orders).is_empty());
    }

    #[test]
    fn test_priceless_line_contributes_zero_value() {
        let orders = vec![order(
            "Order A",
            vec![line("Pallet", 4, 0.0), line("Crate", 1, 5.0)],
        )];

        let sheet = aggregate(&orders);
        assert_eq!(sheet[0].total_quantity, 4);
        assert_eq!(sheet[0].total_value, 0.0);
        assert_eq!(sheet[1].total_value, 5.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
