// ============================================================================
// Backend Client Layer - REST wrappers for delegated capabilities
// ============================================================================
//
// Authentication, payments, notifications, and load planning all live on
// the remote backend. This layer only shapes requests, forwards them, and
// validates responses.
//
// ============================================================================

pub mod backend;
pub mod types;

// Re-export for convenience
pub use backend::{BackendClient, BackendError};
pub use types::*;
