use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::QuarterKey;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatUnit {
    Currency,
    Percent
}

/// A labeled headline figure. Formatting is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub unit: StatUnit,
    pub value: Decimal
}

/// Headline statistics derived from a full series of aggregated rows.
///
/// Every field is zero (and `current_quarter` is `None`) for an empty series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub current_quarter: Option<QuarterKey>,
    pub latest_realized_rate_annualized: Decimal,
    pub latest_realized_dollar: Decimal,
    pub latest_total_return_rate_annualized: Decimal,
    pub latest_total_return_dollar: Decimal,
    pub latest_gaap_balance: Decimal,
    pub latest_nav_balance: Decimal,
    pub lifetime_realized_dollar: Decimal,
    pub lifetime_total_return_dollar: Decimal,
    pub beginning_balance: Decimal,
    pub ending_gaap_balance: Decimal,
    pub ending_nav_balance: Decimal
}

impl SummaryStats {
    /// The fixed list of stat-card figures, latest quarter first and lifetime figures after.
    pub fn labeled(&self) -> Vec<Stat> {
        vec![
            Stat { label: "Realized Return (%)", unit: StatUnit::Percent, value: self.latest_realized_rate_annualized },
            Stat { label: "Realized Return ($)", unit: StatUnit::Currency, value: self.latest_realized_dollar },
            Stat { label: "Total Return (%)", unit: StatUnit::Percent, value: self.latest_total_return_rate_annualized },
            Stat { label: "Total Return ($)", unit: StatUnit::Currency, value: self.latest_total_return_dollar },
            Stat { label: "Current GAAP Balance", unit: StatUnit::Currency, value: self.latest_gaap_balance },
            Stat { label: "Current NAV Balance", unit: StatUnit::Currency, value: self.latest_nav_balance },
            Stat { label: "Beginning Balance", unit: StatUnit::Currency, value: self.beginning_balance },
            Stat { label: "Lifetime Realized Return", unit: StatUnit::Currency, value: self.lifetime_realized_dollar },
            Stat { label: "Lifetime Total Return", unit: StatUnit::Currency, value: self.lifetime_total_return_dollar },
            Stat { label: "Ending GAAP Balance", unit: StatUnit::Currency, value: self.ending_gaap_balance },
            Stat { label: "Ending NAV Balance", unit: StatUnit::Currency, value: self.ending_nav_balance },
        ]
    }
}
