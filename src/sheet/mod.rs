use crate::domain::order::Order;

pub mod aggregate;
pub mod export;
pub mod filter;

// Re-export for convenience
pub use aggregate::{aggregate, AggregatedItem};
pub use export::{export_filename, to_csv, ExportError};
pub use filter::{filter_and_sort, SortDirection, SortField};

// ============================================================================
// Master Sheet Pipeline
// ============================================================================
//
// Order Line-Item Store -> Aggregation Engine -> Filter/Sort -> render | CSV
//
// Synchronous, allocation-only, no suspension points; recomputed on every
// change to the customer's order list.
//
// ============================================================================

/// View parameters for one rendering of the master sheet.
#[derive(Debug, Clone)]
pub struct SheetQuery {
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for SheetQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::Product,
            sort_direction: SortDirection::Asc,
        }
    }
}

/// Run the full pipeline: aggregate the customer's orders, then apply the
/// query's filter and sort.
pub fn build_sheet(orders: &[Order], query: &SheetQuery) -> Vec<AggregatedItem> {
    let aggregated = aggregate(orders);
    filter_and_sort(
        &aggregated,
        &query.search_term,
        query.sort_field,
        query.sort_direction,
    )
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

    fn order(name: &str, items: Vec<(&str, u32, f64)>) -> Order {
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
                items: items
                    .into_iter()
                    .map(|(product, quantity, unit_price)| OrderLineItem {
                        product: product.to_string(),
                        quantity,
                        unit_price,
                    })
                    .collect(),
                invoice_url: "https://backend.test/invoices/1".to_string(),
                loading_instructions: None,
            }),
        }
    }

    #[test]
    fn test_default_query_shows_everything_sorted_by_product() {
        let orders = vec![
            order("Order A", vec![("Pallet", 2, 10.0), ("Crate", 1, 5.0)]),
            order("Order B", vec![("Pallet", 3, 10.0)]),
        ];

        let sheet = build_sheet(&orders, &SheetQuery::default());
        let products: Vec<&str> = sheet.iter().map(|i| i.product.as_str()).collect();
        assert_eq!(products, vec!["Crate", "Pallet"]);
    }

    #[test]
    fn test_search_narrows_and_sort_applies() {
        let orders = vec![
            order("Order A", vec![("Pallet", 2, 10.0), ("Crate", 1, 5.0)]),
            order("Order B", vec![("Pallet", 3, 10.0)]),
        ];

        let query = SheetQuery {
            search_term: "pallet".to_string(),
            sort_field: SortField::Value,
            sort_direction: SortDirection::Desc,
        };

        let sheet = build_sheet(&orders, &query);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].product, "Pallet");
        assert_eq!(sheet[0].total_quantity, 5);
        assert_eq!(sheet[0].total_value, 50.0);
    }

    #[test]
    fn test_pipeline_output_exports_cleanly() {
        let orders = vec![order("Order A", vec![("Pallet", 2, 10.0)])];
        let sheet = build_sheet(&orders, &SheetQuery::default());
        let csv_text = to_csv(&sheet).unwrap();
        assert_eq!(csv_text.lines().count(), 2);
    }
}
