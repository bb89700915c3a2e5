use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Action;
use crate::types::{annualize, QuarterKey};

/// Balances, flows and returns of one populated quarter.
///
/// Rows are produced in chronological order and chain into each other: the ending
/// GAAP and NAV balances of a row are the beginning balances of the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    /// 1-based position in the series.
    pub period: u32,
    pub label: String,
    pub year: i32,
    pub quarter: u8,
    pub beginning_gaap: Decimal,
    pub beginning_nav: Decimal,
    pub contribution_dollar: Decimal,
    pub redemption_gaap_dollar: Decimal,
    pub redemption_nav_dollar: Decimal,
    pub income_paid_dollar: Decimal,
    pub income_reinvested_dollar: Decimal,
    /// Paid plus reinvested income.
    pub income_realized_dollar: Decimal,
    pub unrealized_dollar: Decimal,
    /// Realized income plus unrealized gain or loss.
    pub total_return_dollar: Decimal,
    pub tax_dollar: Decimal,
    pub unclassified_dollar: Decimal,
    pub gaap_end: Decimal,
    pub nav_end: Decimal,
    pub realized_rate: Decimal,
    pub total_return_rate: Decimal,
    pub action: Action,
    /// Change of the GAAP balance over the quarter.
    pub net_flow: Decimal,
    /// Contributions net of GAAP redemptions.
    pub capital_flow: Decimal
}

impl AggregatedRow {
    pub fn key(&self) -> QuarterKey {
        QuarterKey { year: self.year, quarter: self.quarter }
    }

    pub fn realized_rate_annualized(&self) -> Decimal {
        annualize(self.realized_rate)
    }

    pub fn total_return_rate_annualized(&self) -> Decimal {
        annualize(self.total_return_rate)
    }
}
