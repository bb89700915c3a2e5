use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}
