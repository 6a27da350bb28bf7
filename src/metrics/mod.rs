// Private module declaration
mod server;

use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::start_metrics_server;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Master-sheet pipeline (builds, row counts, CSV exports)
// - Store operations by entity and operation
// - Backend client requests by endpoint and outcome
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    // Sheet Pipeline Metrics
    pub sheets_built: IntCounter,
    pub sheet_rows: Histogram,
    pub csv_exports: IntCounter,

    // Store Metrics
    pub store_operations: IntCounterVec,

    // Backend Client Metrics
    pub backend_requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // Sheet Pipeline Metrics
        let sheets_built = IntCounter::new(
            "sheets_built_total",
            "Total master order sheets built",
        )?;
        registry.register(Box::new(sheets_built.clone()))?;

        let sheet_rows = Histogram::with_opts(
            HistogramOpts::new("sheet_rows", "Row count of built master sheets")
                .buckets(vec![1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        )?;
        registry.register(Box::new(sheet_rows.clone()))?;

        let csv_exports = IntCounter::new(
            "csv_exports_total",
            "Total CSV exports produced",
        )?;
        registry.register(Box::new(csv_exports.clone()))?;

        // Store Metrics
        let store_operations = IntCounterVec::new(
            Opts::new("store_operations_total", "Repository operations"),
            &["entity", "op"],
        )?;
        registry.register(Box::new(store_operations.clone()))?;

        // Backend Client Metrics
        let backend_requests = IntCounterVec::new(
            Opts::new("backend_requests_total", "Requests to the remote backend"),
            &["endpoint", "outcome"],
        )?;
        registry.register(Box::new(backend_requests.clone()))?;

        Ok(Self {
            registry,
            sheets_built,
            sheet_rows,
            csv_exports,
            store_operations,
            backend_requests,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one pipeline run
    pub fn record_sheet_built(&self, rows: usize) {
        self.sheets_built.inc();
        self.sheet_rows.observe(rows as f64);
    }

    /// Helper to record a backend request outcome
    pub fn record_backend_request(&self, endpoint: &str, outcome: &str) {
        self.backend_requests.with_label_values(&[endpoint, outcome]).inc();
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}
