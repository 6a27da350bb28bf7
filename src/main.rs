use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use loadsheet::client::{BackendClient, LoginRequest};
use loadsheet::config::AppConfig;
use loadsheet::domain::customer::{Customer, Email, PhoneNumber};
use loadsheet::domain::order::{Order, OrderLineItem, OrderStatus, Receipt};
use loadsheet::metrics::{start_metrics_server, Metrics};
use loadsheet::sheet::{build_sheet, export_filename, to_csv, SheetQuery, SortDirection, SortField};
use loadsheet::store::{CustomerRepository, InMemoryStore, OrderRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,loadsheet=debug")),
        )
        .init();

    tracing::info!("🚚 Starting loadsheet dashboard core demo");

    let config = AppConfig::from_env()?;
    tracing::info!(backend = %config.backend_base_url, "Loaded configuration");

    // === 1. Initialize Prometheus metrics ===
    let metrics = Arc::new(Metrics::new()?);

    // Start metrics HTTP server in background thread
    let metrics_registry = Arc::new(metrics.registry().clone());
    let metrics_port = config.metrics_port;
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("metrics runtime");
        rt.block_on(async {
            if let Err(e) = start_metrics_server(metrics_registry, metrics_port).await {
                tracing::error!("Metrics server error: {}", e);
            }
        });
    });

    // === 2. Seed the mock state container ===
    let store = InMemoryStore::with_metrics(metrics.clone());
    let customers = store.customers();
    let orders = store.orders();

    let customer = Customer {
        id: Uuid::new_v4(),
        name: "Acme Freight".to_string(),
        email: Email::new("dispatch@acme-freight.test"),
        phone: Some(PhoneNumber::new("+1-555-0100")),
        address: None,
    };
    customers.create(customer.clone()).await?;

    let order_a = demo_order(
        customer.id,
        "Order A",
        &[("Pallet", 2, 10.0), ("Crate", 1, 5.0)],
    );
    let order_b = demo_order(customer.id, "Order B", &[("Pallet", 3, 10.0)]);
    let first_order_id = order_a.id;
    orders.create(customer.id, order_a).await?;
    orders.create(customer.id, order_b).await?;
    tracing::info!(customer = %customer.name, "✅ Seeded demo customer and orders");

    // === 3. Walk an order through the (unguarded) status field ===
    orders.set_status(first_order_id, OrderStatus::Loaded).await?;
    orders.set_status(first_order_id, OrderStatus::Delivered).await?;

    // === 4. Build the master order sheet ===
    let customer_orders = orders.list(customer.id).await?;
    let query = SheetQuery {
        search_term: String::new(),
        sort_field: SortField::Value,
        sort_direction: SortDirection::Desc,
    };
    let sheet = build_sheet(&customer_orders, &query);
    metrics.record_sheet_built(sheet.len());

    for row in &sheet {
        tracing::info!(
            product = %row.product,
            quantity = row.total_quantity,
            value = %format!("${:.2}", row.total_value),
            orders = %row.order_names.join(", "),
            "Sheet row"
        );
    }

    // === 5. Demonstrate search ===
    let search = SheetQuery {
        search_term: "pallet".to_string(),
        ..SheetQuery::default()
    };
    let filtered = build_sheet(&customer_orders, &search);
    tracing::info!(matches = filtered.len(), "🔍 Search for 'pallet'");

    // === 6. Export to CSV ===
    let csv_text = to_csv(&sheet)?;
    metrics.csv_exports.inc();
    let filename = export_filename(&customer.name);
    std::fs::write(&filename, &csv_text)?;
    tracing::info!(file = %filename, lines = csv_text.lines().count(), "💾 Exported master sheet");

    // === 7. Probe the remote backend (auth is delegated; offline is fine) ===
    let backend = BackendClient::new(&config)?.with_metrics(metrics.clone());
    let login = LoginRequest {
        email: customer.email.as_str().to_string(),
        password: "demo".to_string(),
    };
    match backend.login(&login).await {
        Ok(session) => {
            tracing::info!(expires_at = %session.expires_at, "🔐 Authenticated against backend")
        }
        Err(e) => tracing::warn!("Backend not reachable, continuing offline: {}", e),
    }

    tracing::info!("🎉 Demo complete! Metrics remain available on /metrics");
    Ok(())
}

fn demo_order(customer_id: Uuid, name: &str, items: &[(&str, u32, f64)]) -> Order {
    let order_id = Uuid::new_v4();
    Order {
        id: order_id,
        name: name.to_string(),
        status: OrderStatus::Pending,
        receipt: Some(Receipt {
            order_id,
            customer_id,
            order_date: Utc::now(),
            shipment_date: Utc::now() + Duration::days(7),
            items: items
                .iter()
                .map(|(product, quantity, unit_price)| OrderLineItem {
                    product: product.to_string(),
                    quantity: *quantity,
                    unit_price: *unit_price,
                })
                .collect(),
            invoice_url: format!("https://backend.test/invoices/{}", order_id),
            loading_instructions: None,
        }),
    }
}
