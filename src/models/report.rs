use crate::models::{AggregatedRow, SummaryStats, TransactionError};
use crate::types::InvestorName;

const DEFAULT_GREETING: &str = "Investor";

/// Everything the dashboard needs for one investor.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestorReport {
    pub investor: InvestorName,
    pub greeting_name: String,
    pub rows: Vec<AggregatedRow>,
    pub summary: SummaryStats,
    /// Records left out of the aggregation, in input order.
    pub diagnostics: Vec<TransactionError>
}

/// Picks the name used to greet an investor.
///
/// Investor names are exported as e.g. `"Stelck Boeger 1998 Revocable Trust (i2)"`, so the
/// second token is preferred, then the first.
pub fn greeting_name(investor: &str) -> String {
    let mut tokens = investor.split_whitespace();
    let first = tokens.next();
    let second = tokens.next();

    second.or(first).unwrap_or(DEFAULT_GREETING).to_string()
}
