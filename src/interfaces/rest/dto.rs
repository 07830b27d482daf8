use crate::domain::order::{NewPaymentOrder, PaymentOrder, PaymentStatus};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /payment-initiation/payment-orders`.
///
/// `amount` travels as a decimal string so clients never touch binary
/// floating point. Absent `amount` or `requestedExecutionDate` deserialize
/// to `None` and are rejected by domain validation, not by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderRequest {
    pub external_id: String,
    pub debtor_account: String,
    pub creditor_account: String,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub currency: String,
    #[serde(default)]
    pub remittance_info: Option<String>,
    #[serde(default)]
    pub requested_execution_date: Option<NaiveDate>,
}

impl From<PaymentOrderRequest> for NewPaymentOrder {
    fn from(request: PaymentOrderRequest) -> Self {
        Self {
            external_id: request.external_id,
            debtor_account: request.debtor_account,
            creditor_account: request.creditor_account,
            amount: request.amount,
            currency: request.currency,
            remittance_info: request.remittance_info,
            requested_execution_date: request.requested_execution_date,
        }
    }
}

/// Summary returned on creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderResponse {
    pub payment_order_id: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentOrder> for PaymentOrderResponse {
    fn from(order: PaymentOrder) -> Self {
        Self {
            payment_order_id: order.order_id,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

/// Full detail view of a stored order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderDetailsResponse {
    pub payment_order_id: String,
    pub external_id: String,
    pub debtor_account: String,
    pub creditor_account: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remittance_info: Option<String>,
    pub requested_execution_date: NaiveDate,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

impl From<PaymentOrder> for PaymentOrderDetailsResponse {
    fn from(order: PaymentOrder) -> Self {
        Self {
            payment_order_id: order.order_id,
            external_id: order.external_id,
            debtor_account: order.debtor_account,
            creditor_account: order.creditor_account,
            amount: order.amount,
            currency: order.currency,
            remittance_info: order.remittance_info,
            requested_execution_date: order.requested_execution_date,
            status: order.status,
            created_at: order.created_at,
            last_update: order.last_update,
        }
    }
}

/// Status-only view of a stored order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderStatusResponse {
    pub status: PaymentStatus,
    pub last_update: DateTime<Utc>,
}

impl From<PaymentOrder> for PaymentOrderStatusResponse {
    fn from(order: PaymentOrder) -> Self {
        Self {
            status: order.status,
            last_update: order.last_update,
        }
    }
}
