use serde::de::DeserializeOwned;
use serde_json::Value;

use super::customer::Customer;
use super::order::Order;

// ============================================================================
// Decode Boundary - schema-validated deserialization of backend JSON
// ============================================================================
//
// Every payload that crosses in from the backend is parsed into the typed
// model here. A payload that does not match the schema fails fast with a
// descriptive error instead of leaking loose JSON into the pipeline.
//
// The one deliberate leniency: a line item without a price decodes as 0.0
// so it contributes nothing to sheet totals (best-effort reporting policy).
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid {entity} payload: {source}")]
    Schema {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode a JSON value into a typed model, tagging failures with the
/// entity name for diagnostics.
pub fn decode<T: DeserializeOwned>(entity: &'static str, value: Value) -> Result<T, DecodeError> {
    serde_json::from_value(value).map_err(|source| DecodeError::Schema { entity, source })
}

pub fn decode_orders(value: Value) -> Result<Vec<Order>, DecodeError> {
    decode("order list", value)
}

pub fn decode_order(value: Value) -> Result<Order, DecodeError> {
    decode("order", value)
}

pub fn decode_customer(value: Value) -> Result<Customer, DecodeError> {
    decode("customer", value)
}

// ============================================================================
// Unit Tests
// ============================================================================
