use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatus};

pub mod memory;

// Re-export for convenience
pub use memory::{InMemoryCustomers, InMemoryOrders, InMemoryStore};

// ============================================================================
// Repository Traits - injectable state store
// ============================================================================
//
// The dashboard screens and the master-sheet pipeline never touch storage
// directly; they work against these traits. Production wires them to the
// backend, tests and the prototype wire them to `InMemoryStore`.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),
}

/// Order persistence scoped by customer. `list` returns orders in the order
/// they were created, which is the order the aggregation engine consumes
/// them in.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self, customer_id: Uuid) -> Result<Vec<Order>, StoreError>;
    async fn get(&self, order_id: Uuid) -> Result<Order, StoreError>;
    async fn create(&self, customer_id: Uuid, order: Order) -> Result<(), StoreError>;
    async fn update(&self, customer_id: Uuid, order: Order) -> Result<(), StoreError>;
    async fn delete(&self, order_id: Uuid) -> Result<(), StoreError>;

    /// Set the lifecycle status. Any status may be written at any time;
    /// there is no transition validation.
    async fn set_status(&self, order_id: Uuid, status: OrderStatus) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Customer>, StoreError>;
    async fn get(&self, customer_id: Uuid) -> Result<Customer, StoreError>;
    async fn create(&self, customer: Customer) -> Result<(), StoreError>;
    async fn update(&self, customer: Customer) -> Result<(), StoreError>;
    async fn delete(&self, customer_id: Uuid) -> Result<(), StoreError>;
}
