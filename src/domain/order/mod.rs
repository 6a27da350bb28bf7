// ============================================================================
// Order Domain - the order/receipt/line-item model
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (Order, Receipt, OrderLineItem, OrderStatus)
//
// Status is a plain three-value field with no transition guards; the
// dashboard sets it directly. The master-sheet pipeline in `crate::sheet`
// consumes these types read-only.
//
// ============================================================================

pub mod value_objects;

// Re-export for convenience
pub use value_objects::*;
