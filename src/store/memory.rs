use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::customer::Customer;
use crate::domain::order::{Order, OrderStatus};
use crate::metrics::Metrics;
use super::{CustomerRepository, OrderRepository, StoreError};

// ============================================================================
// In-Memory Store - mock state container for the dashboard prototype
// ============================================================================
//
// Backs both repository traits with a shared tokio RwLock state. Orders are
// kept as a Vec per customer so `list` preserves creation order, which the
// sheet pipeline depends on for first-encountered aggregation order.
//
// The two repositories are separate handles over the same state so each
// trait keeps the plain `list`/`get`/`create`/`update`/`delete` names.
//
// ============================================================================

#[derive(Default)]
struct State {
    customers: Vec<Customer>,
    orders: HashMap<Uuid, Vec<Order>>, // customer id -> orders in creation order
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
    metrics: Option<Arc<Metrics>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: Arc<Metrics>) -> Self {
        Self {
            state: Arc::default(),
            metrics: Some(metrics),
        }
    }

    /// Order repository handle sharing this store's state.
    pub fn orders(&self) -> InMemoryOrders {
        InMemoryOrders { store: self.clone() }
    }

    /// Customer repository handle sharing this store's state.
    pub fn customers(&self) -> InMemoryCustomers {
        InMemoryCustomers { store: self.clone() }
    }

    fn record(&self, entity: &str, op: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.store_operations.with_label_values(&[entity, op]).inc();
        }
    }
}

#[derive(Clone)]
pub struct InMemoryOrders {
    store: InMemoryStore,
}

#[derive(Clone)]
pub struct InMemoryCustomers {
    store: InMemoryStore,
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn list(&self, customer_id: Uuid) -> Result<Vec<Order>, StoreError> {
        self.store.record("order", "list");
        let state = self.store.state.read().await;
        Ok(state.orders.get(&customer_id).cloned().unwrap_or_default())
    }

    async fn get(&self, order_id: Uuid) -> Result<Order, StoreError> {
        self.store.record("order", "get");
        let state = self.store.state.read().await;
        state
            .orders
            .values()
            .flatten()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or(StoreError::OrderNotFound(order_id))
    }

    async fn create(&self, customer_id: Uuid, order: Order) -> Result<(), StoreError> {
        self.store.record("order", "create");
        let mut state = self.store.state.write().await;
        tracing::debug!(customer_id = %customer_id, order_id = %order.id, "Creating order");
        state.orders.entry(customer_id).or_default().push(order);
        Ok(())
    }

    async fn update(&self, customer_id: Uuid, order: Order) -> Result<(), StoreError> {
        self.store.record("order", "update");
        let mut state = self.store.state.write().await;
        let orders = state
            .orders
            .get_mut(&customer_id)
            .ok_or(StoreError::OrderNotFound(order.id))?;
        let slot = orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or(StoreError::OrderNotFound(order.id))?;
        *slot = order;
        Ok(())
    }

    async fn delete(&self, order_id: Uuid) -> Result<(), StoreError> {
        self.store.record("order", "delete");
        let mut state = self.store.state.write().await;
        for orders in state.orders.values_mut() {
            if let Some(pos) = orders.iter().position(|o| o.id == order_id) {
                orders.remove(pos);
                return Ok(());
            }
        }
        Err(StoreError::OrderNotFound(order_id))
    }

    async fn set_status(&self, order_id: Uuid, status: OrderStatus) -> Result<(), StoreError> {
        self.store.record("order", "set_status");
        let mut state = self.store.state.write().await;
        for orders in state.orders.values_mut() {
            if let Some(order) = orders.iter_mut().find(|o| o.id == order_id) {
                tracing::debug!(order_id = %order_id, status = ?status, "Setting order status");
                order.status = status;
                return Ok(());
            }
        }
        Err(StoreError::OrderNotFound(order_id))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        self.store.record("customer", "list");
        let state = self.store.state.read().await;
        Ok(state.customers.clone())
    }

    async fn get(&self, customer_id: Uuid) -> Result<Customer, StoreError> {
        self.store.record("customer", "get");
        let state = self.store.state.read().await;
        state
            .customers
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
            .ok_or(StoreError::CustomerNotFound(customer_id))
    }

    async fn create(&self, customer: Customer) -> Result<(), StoreError> {
        self.store.record("customer", "create");
        let mut state = self.store.state.write().await;
        state.customers.push(customer);
        Ok(())
    }

    async fn update(&self, customer: Customer) -> Result<(), StoreError> {
        self.store.record("customer", "update");
        let mut state = self.store.state.write().await;
        let slot = state
            .customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or(StoreError::CustomerNotFound(customer.id))?;
        *slot = customer;
        Ok(())
    }

    async fn delete(&self, customer_id: Uuid) -> Result<(), StoreError> {
        self.store.record("customer", "delete");
        let mut state = self.store.state.write().await;
        let pos = state
            .customers
            .iter()
            .position(|c| c.id == customer_id)
            .ok_or(StoreError::CustomerNotFound(customer_id))?;
        state.customers.remove(pos);
        state.orders.remove(&customer_id);
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
