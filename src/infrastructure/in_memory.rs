use crate::domain::order::{PaymentOrder, PaymentStatus};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payment orders, addressable by the
/// system-assigned order id and by the caller-supplied external id.
///
/// A single `RwLock` guards both the primary map and the external-id index,
/// so no reader can observe one without the other and the
/// check-then-insert of [`InMemoryOrderStore::create_if_absent`] is
/// indivisible. Clones share the same underlying maps.
#[derive(Default, Clone)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<OrderIndexes>>,
}

#[derive(Default)]
struct OrderIndexes {
    /// order id -> order
    orders: HashMap<String, PaymentOrder>,
    /// external id -> order id
    external_ids: HashMap<String, String>,
}

impl InMemoryOrderStore {
    /// Creates a new, empty order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the order under its order id and (re)registers
    /// the external-id mapping.
    pub async fn save(&self, order: PaymentOrder) -> PaymentOrder {
        let mut inner = self.inner.write().await;
        inner
            .external_ids
            .insert(order.external_id.clone(), order.order_id.clone());
        inner.orders.insert(order.order_id.clone(), order.clone());
        order
    }

    /// Stores the order unless another order is already registered under the
    /// same external id, in which case the stored order wins and `order` is
    /// discarded.
    ///
    /// The index check and both inserts happen under one write lock: two
    /// racing calls with the same new external id can never both insert.
    pub async fn create_if_absent(&self, order: PaymentOrder) -> PaymentOrder {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner
            .external_ids
            .get(&order.external_id)
            .and_then(|order_id| inner.orders.get(order_id))
        {
            return existing.clone();
        }
        inner
            .external_ids
            .insert(order.external_id.clone(), order.order_id.clone());
        inner.orders.insert(order.order_id.clone(), order.clone());
        order
    }

    pub async fn find_by_id(&self, order_id: &str) -> Option<PaymentOrder> {
        let inner = self.inner.read().await;
        inner.orders.get(order_id).cloned()
    }

    /// Resolves through the external-id index, then looks up the order
    /// itself. A dangling index entry reads as not-found, never as a fault.
    pub async fn find_by_external_id(&self, external_id: &str) -> Option<PaymentOrder> {
        let inner = self.inner.read().await;
        let order_id = inner.external_ids.get(external_id)?;
        inner.orders.get(order_id).cloned()
    }

    /// Applies a status change to the stored order and refreshes its
    /// `last_update`. Unknown order ids are a no-op, not an error.
    pub async fn update_status(&self, order_id: &str, new_status: PaymentStatus) {
        let mut inner = self.inner.write().await;
        if let Some(order) = inner.orders.get_mut(order_id) {
            order.update_status(new_status);
        }
    }
}
