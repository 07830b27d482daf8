use chrono::{Days, Utc};
use payment_initiation::application::service::PaymentService;
use payment_initiation::domain::order::NewPaymentOrder;
use payment_initiation::infrastructure::in_memory::InMemoryOrderStore;
use rust_decimal_macros::dec;
use std::sync::Arc;

pub fn service_with_store() -> (PaymentService, Arc<InMemoryOrderStore>) {
    let store = Arc::new(InMemoryOrderStore::new());
    (PaymentService::new(store.clone()), store)
}

pub fn candidate(external_id: &str) -> NewPaymentOrder {
    NewPaymentOrder {
        external_id: external_id.to_string(),
        debtor_account: "ES9121000418450200051332".to_string(),
        creditor_account: "ES7921000813610123456789".to_string(),
        amount: Some(dec!(1500.50)),
        currency: "EUR".to_string(),
        remittance_info: Some("Test payment".to_string()),
        requested_execution_date: Utc::now().date_naive().checked_add_days(Days::new(1)),
    }
}
