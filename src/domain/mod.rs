// ============================================================================
// Domain Layer - customer/order model + decode boundary
// ============================================================================
//
// Each aggregate has its own subdirectory with its value objects. The
// `decode` module is the single place backend JSON is validated into the
// typed model.
//
// ============================================================================

pub mod customer;
pub mod decode;
pub mod order;
