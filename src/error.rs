use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

/// Reasons a candidate order is rejected before anything is persisted.
///
/// Callers branch on the variant, never on the message text. Each variant
/// carries the offending value as submitted, `None` when the field was
/// absent altogether.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("amount must be greater than zero: {}", display_or_missing(.0))]
    InvalidAmount(Option<Decimal>),
    #[error("requested execution date must be today or in the future: {}", display_or_missing(.0))]
    InvalidExecutionDate(Option<NaiveDate>),
}

fn display_or_missing<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "missing".to_string(), T::to_string)
}
