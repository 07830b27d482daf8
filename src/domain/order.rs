use crate::error::{PaymentError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle marker of a persisted payment order.
///
/// `Initiated` is the only status this service ever assigns itself. The
/// remaining values are written by downstream processing through the store's
/// status update and are consumed as-is; no transition rules apply among
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Initiated,
    Pending,
    Executed,
    Rejected,
    Cancelled,
    Failed,
}

/// A payment order as submitted by the caller, before validation and
/// persistence.
///
/// Carries no order id, status, or timestamps; those exist only on
/// [`PaymentOrder`], which can be obtained exclusively through
/// [`NewPaymentOrder::initiate`]. `amount` and `requested_execution_date`
/// are optional because a missing field is a validation failure, not a
/// malformed request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentOrder {
    pub external_id: String,
    pub debtor_account: String,
    pub creditor_account: String,
    pub amount: Option<Decimal>,
    pub currency: String,
    pub remittance_info: Option<String>,
    pub requested_execution_date: Option<NaiveDate>,
}

impl NewPaymentOrder {
    /// The amount must be present and strictly positive.
    pub fn amount_is_valid(&self) -> bool {
        self.amount.is_some_and(|amount| amount > Decimal::ZERO)
    }

    /// The execution date must be present and not before the current date.
    pub fn execution_date_is_valid(&self) -> bool {
        self.requested_execution_date
            .is_some_and(|date| date >= Utc::now().date_naive())
    }

    /// Validates the candidate and moves it into its initial persisted
    /// state under the given order id.
    ///
    /// `created_at` and `last_update` come from a single clock reading, so
    /// both are equal at initiation. On failure the candidate is dropped and
    /// the error carries the offending value.
    pub fn initiate(self, order_id: String) -> Result<PaymentOrder> {
        if !self.amount_is_valid() {
            return Err(PaymentError::InvalidAmount(self.amount));
        }
        if !self.execution_date_is_valid() {
            return Err(PaymentError::InvalidExecutionDate(
                self.requested_execution_date,
            ));
        }
        let now = Utc::now();
        Ok(PaymentOrder {
            order_id,
            external_id: self.external_id,
            debtor_account: self.debtor_account,
            creditor_account: self.creditor_account,
            // both checked above, the fallbacks are unreachable
            amount: self.amount.unwrap_or_default(),
            currency: self.currency,
            remittance_info: self.remittance_info,
            requested_execution_date: self.requested_execution_date.unwrap_or_default(),
            status: PaymentStatus::Initiated,
            created_at: now,
            last_update: now,
        })
    }
}

/// A persisted payment order.
///
/// `order_id` is assigned exactly once at initiation and never reused;
/// `external_id` is the caller's idempotency key and is immutable;
/// `created_at` never changes after initiation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrder {
    pub order_id: String,
    pub external_id: String,
    pub debtor_account: String,
    pub creditor_account: String,
    pub amount: Decimal,
    pub currency: String,
    pub remittance_info: Option<String>,
    pub requested_execution_date: NaiveDate,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

impl PaymentOrder {
    /// Applies a status change and refreshes `last_update`.
    ///
    /// `last_update` never goes backwards, even if the clock does.
    pub fn update_status(&mut self, new_status: PaymentStatus) {
        self.status = new_status;
        self.last_update = Utc::now().max(self.last_update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal_macros::dec;

    fn candidate() -> NewPaymentOrder {
        NewPaymentOrder {
            external_id: "EXT-001".to_string(),
            debtor_account: "ES9121000418450200051332".to_string(),
            creditor_account: "ES7921000813610123456789".to_string(),
            amount: Some(dec!(1500.50)),
            currency: "EUR".to_string(),
            remittance_info: Some("Invoice 42".to_string()),
            requested_execution_date: Utc::now().date_naive().checked_add_days(Days::new(1)),
        }
    }

    #[test]
    fn test_amount_validation() {
        let mut order = candidate();
        assert!(order.amount_is_valid());

        order.amount = Some(dec!(0));
        assert!(!order.amount_is_valid());

        order.amount = Some(dec!(-100.00));
        assert!(!order.amount_is_valid());

        order.amount = None;
        assert!(!order.amount_is_valid());
    }

    #[test]
    fn test_execution_date_validation() {
        let mut order = candidate();
        assert!(order.execution_date_is_valid());

        order.requested_execution_date = Some(Utc::now().date_naive());
        assert!(order.execution_date_is_valid());

        order.requested_execution_date = Utc::now().date_naive().checked_sub_days(Days::new(1));
        assert!(!order.execution_date_is_valid());

        order.requested_execution_date = None;
        assert!(!order.execution_date_is_valid());
    }

    #[test]
    fn test_initiate_assigns_initial_state() {
        let order = candidate().initiate("PO-TEST-1".to_string()).unwrap();

        assert_eq!(order.order_id, "PO-TEST-1");
        assert_eq!(order.status, PaymentStatus::Initiated);
        assert_eq!(order.created_at, order.last_update);
        assert_eq!(order.amount, dec!(1500.50));
    }

    #[test]
    fn test_initiate_rejects_invalid_amount() {
        let mut invalid = candidate();
        invalid.amount = Some(dec!(-1));

        let result = invalid.initiate("PO-TEST-2".to_string());
        assert_eq!(result, Err(PaymentError::InvalidAmount(Some(dec!(-1)))));
    }

    #[test]
    fn test_initiate_rejects_past_date() {
        let mut invalid = candidate();
        let yesterday = Utc::now().date_naive().checked_sub_days(Days::new(1));
        invalid.requested_execution_date = yesterday;

        let result = invalid.initiate("PO-TEST-3".to_string());
        assert_eq!(result, Err(PaymentError::InvalidExecutionDate(yesterday)));
    }

    #[test]
    fn test_update_status_refreshes_last_update_only() {
        let mut order = candidate().initiate("PO-TEST-4".to_string()).unwrap();
        let created_at = order.created_at;
        let previous = order.last_update;

        order.update_status(PaymentStatus::Executed);

        assert_eq!(order.status, PaymentStatus::Executed);
        assert!(order.last_update >= previous);
        assert_eq!(order.created_at, created_at);
    }

    #[test]
    fn test_update_status_never_goes_backwards() {
        let mut order = candidate().initiate("PO-TEST-5".to_string()).unwrap();
        // force a last_update far in the future of the wall clock
        order.last_update = Utc::now() + chrono::Duration::hours(1);
        let pinned = order.last_update;

        order.update_status(PaymentStatus::Cancelled);

        assert_eq!(order.last_update, pinned);
    }
}
