use crate::domain::order::{NewPaymentOrder, PaymentOrder};
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryOrderStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Prefix carried by every system-assigned order id.
pub const ORDER_ID_PREFIX: &str = "PO";

/// The payment-initiation workflow.
///
/// Owns the idempotency check, validation, id generation, and persistence of
/// new orders, plus the two lookups. One instance is shared by all callers;
/// the injected store is the single source of truth.
pub struct PaymentService {
    store: Arc<InMemoryOrderStore>,
}

impl PaymentService {
    pub fn new(store: Arc<InMemoryOrderStore>) -> Self {
        Self { store }
    }

    /// Creates a payment order, idempotently keyed by the caller-supplied
    /// external id.
    ///
    /// Resubmitting a known external id returns the stored order unchanged
    /// without re-validating the candidate, even when its other fields
    /// differ from the original submission. A validation failure leaves the
    /// store untouched. A duplicate external id is never an error.
    pub async fn initiate_payment(&self, candidate: NewPaymentOrder) -> Result<PaymentOrder> {
        if let Some(existing) = self.store.find_by_external_id(&candidate.external_id).await {
            debug!(
                external_id = %existing.external_id,
                order_id = %existing.order_id,
                "duplicate submission, returning stored order"
            );
            return Ok(existing);
        }

        let order = candidate.initiate(generate_order_id())?;
        let order_id = order.order_id.clone();
        let saved = self.store.create_if_absent(order).await;
        if saved.order_id == order_id {
            info!(
                order_id = %saved.order_id,
                external_id = %saved.external_id,
                "payment order initiated"
            );
        } else {
            // a concurrent submission with the same external id won the insert
            debug!(
                external_id = %saved.external_id,
                order_id = %saved.order_id,
                "lost creation race, returning stored order"
            );
        }
        Ok(saved)
    }

    /// Looks up the full order; `None` when absent, never an error.
    pub async fn get_payment_order(&self, order_id: &str) -> Option<PaymentOrder> {
        self.store.find_by_id(order_id).await
    }

    /// Looks up the order for a status read; `None` when absent, never an
    /// error.
    pub async fn get_payment_status(&self, order_id: &str) -> Option<PaymentOrder> {
        self.store.find_by_id(order_id).await
    }
}

/// `PO-<date>-<random suffix>`.
///
/// Only the prefix and the uniqueness of the whole id are contractual; the
/// date in the middle is for humans reading logs.
fn generate_order_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{ORDER_ID_PREFIX}-{}-{}",
        Utc::now().date_naive(),
        &suffix[..12]
    )
}
