use super::aggregate::AggregatedItem;

// ============================================================================
// Export Stage - CSV serialization of the master sheet
// ============================================================================
//
// Produces a complete CSV string (header + one row per item). Every field
// goes through the csv writer, so embedded commas and quotes in product or
// order names come out correctly quoted. The contributing order names are
// joined with ", " inside a single field.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize the sheet to CSV. Prices and values are rendered as currency
/// with two decimals.
pub fn to_csv(items: &[AggregatedItem]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Product", "Total Quantity", "Price", "Total Value", "Orders"])?;

    for item in items {
        writer.write_record([
            item.product.clone(),
            item.total_quantity.to_string(),
            format!("${:.2}", item.unit_price),
            format!("${:.2}", item.total_value),
            item.order_names.join(", "),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Download filename for one customer's sheet: spaces become underscores.
pub fn export_filename(customer_name: &str) -> String {
    format!("{}_order_sheet.csv", customer_name.replace(' ', "_"))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product: &str, quantity: u64, price: f64, orders: &[&str]) -> AggregatedItem {
        AggregatedItem {
            product: product.to_string(),
            total_quantity: quantity,
            unit_price: price,
            total_value: quantity as f64 * price,
            order_names: orders.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_header_plus_one_line_per_item() {
        let items = vec![
            item("Pallet", 5, 10.0, &["Order A", "Order B"]),
            item("Crate", 1, 5.0, &["Order A"]),
        ];

        let csv_text = to_csv(&items).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines.len(), items.len() + 1);
        assert_eq!(lines[0], "Product,Total Quantity,Price,Total Value,Orders");
    }

    #[test]
    fn test_currency_formatting() {
        let items = vec![item("Drum", 7, 2.5, &["Order C"])];
        let csv_text = to_csv(&items).unwrap();
        assert!(csv_text.contains("$2.50"));
        assert!(csv_text.contains("$17.50"));
    }

    #[test]
    fn test_multiple_orders_stay_in_one_field() {
        let items = vec![item("Pallet", 5, 10.0, &["Order A", "Order B"])];
        let csv_text = to_csv(&items).unwrap();

        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 5);
        assert_eq!(&record[4], "Order A, Order B");
    }

    #[test]
    fn test_embedded_commas_and_quotes_are_escaped() {
        let items = vec![item(
            "Pallet, reinforced \"EU\"",
            2,
            10.0,
            &["Order A, rush"],
        )];

        let csv_text = to_csv(&items).unwrap();
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();

        // Still exactly five top-level fields after quoting.
        assert_eq!(record.len(), 5);
        assert_eq!(&record[0], "Pallet, reinforced \"EU\"");
        assert_eq!(&record[4], "Order A, rush");
    }

    #[test]
    fn test_empty_sheet_is_header_only() {
        let csv_text = to_csv(&[]).unwrap();
        assert_eq!(csv_text.lines().count(), 1);
    }

    #[test]
    fn test_export_writes_to_disk_under_download_filename() {
        let dir = tempfile::tempdir().unwrap();
        let items = vec![item("Pallet", 5, 10.0, &["Order A"])];

        let path = dir.path().join(export_filename("Acme Freight"));
        std::fs::write(&path, to_csv(&items).unwrap()).unwrap();

        let read_back = std::fs::read_to_string(&path).unwrap();
        assert!(read_back.starts_with("Product,"));
        assert_eq!(read_back.lines().count(), 2);
    }

    #[test]
    fn test_export_filename_replaces_spaces() {
        assert_eq!(export_filename("Acme Freight"), "Acme_Freight_order_sheet.csv");
        assert_eq!(export_filename("Acme"), "Acme_order_sheet.csv");
    }
}
