// ============================================================================
// loadsheet - data core of the truck-loading logistics dashboard
// ============================================================================
//
// Layers:
// - domain:  customer/order model + JSON decode boundary
// - store:   injectable repositories + in-memory mock state container
// - sheet:   master order-sheet pipeline (aggregate -> filter/sort -> CSV)
// - client:  thin REST wrappers for backend-delegated capabilities
// - metrics: Prometheus registry + scrape endpoint
// - config:  environment configuration
//
// ============================================================================

pub mod client;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod sheet;
pub mod store;
