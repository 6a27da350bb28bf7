// ============================================================================
// Customer Domain - the customer account model
// ============================================================================

pub mod value_objects;

// Re-export for convenience
pub use value_objects::*;
