mod amount;
mod errors;
mod quarter;
#[cfg(test)]
mod tests;

use rust_decimal::Decimal;

pub use amount::Amount;
pub use errors::AmountError;
pub use quarter::QuarterKey;

pub type InvestorName = String;

/// Number of quarters used for simple (non-compounded) annualization.
pub const QUARTERS_PER_YEAR: u32 = 4;

/// Annualizes a quarterly rate as `rate * 4`. Compounding is deliberately not applied.
///
/// Saturates at the decimal range.
pub fn annualize(quarterly_rate: Decimal) -> Decimal {
    quarterly_rate.saturating_mul(Decimal::from(QUARTERS_PER_YEAR))
}
