use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

// ============================================================================
// Backend Payloads - typed request/response shapes
// ============================================================================
//
// Everything the remote backend computes (auth, billing, notifications,
// load planning) crosses this boundary as one of these shapes and is
// validated by serde on the way in.
//
// ============================================================================

// ---- Authentication --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ---- Payments --------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutSessionRequest {
    pub customer_id: Uuid,
    pub amount_cents: u64,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionResponse {
    pub session_id: String,
    pub checkout_url: String,
}

// ---- Notifications ---------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct NotificationRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationResponse {
    pub notification_id: Uuid,
    pub accepted: bool,
}

// ---- Load Planning ---------------------------------------------------------

/// Packing optimization is delegated to the backend; this only names the
/// order to plan and the trailer to plan it into.
#[derive(Debug, Clone, Serialize)]
pub struct LoadPlanRequest {
    pub order_id: Uuid,
    pub trailer_length_m: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoadPlanResponse {
    pub plan_id: Uuid,
    /// Fraction of trailer volume used, 0.0..=1.0.
    pub utilization: f64,
    pub status: String,
}

// ============================================================================
// Unit Tests
// ============================================================================
