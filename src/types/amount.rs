use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use std::str::FromStr;

const THOUSANDS_SEPARATOR: char = ',';

/// A currency amount as exported by the fund administrator, e.g. `"1,234.56"` or `"-4.71"`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Amount(Decimal);

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        let stripped: String = value.chars()
            .filter(|c| *c != THOUSANDS_SEPARATOR)
            .collect();

        if !stripped.chars().any(|c| c.is_ascii_digit()) {
            return Err(AmountError::InvalidFormat(format!("Value [{value}] has no digits")));
        }

        if stripped.chars().any(|c| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+')) {
            return Err(AmountError::InvalidFormat(format!("Value [{value}] has invalid characters")));
        }

        Ok(Amount(Decimal::from_str(&stripped)?))
    }
}
