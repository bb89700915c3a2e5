use rust_decimal::Decimal;

use crate::models::{AggregatedRow, SummaryStats};

/// Derives the headline statistics of a row series. An empty series yields zeroed defaults.
///
/// Lifetime totals saturate at the decimal range. Rows from [`aggregate`](super::aggregate)
/// never reach it.
pub fn summarize(rows: &[AggregatedRow]) -> SummaryStats {
    let (Some(first), Some(latest)) = (rows.first(), rows.last()) else {
        return SummaryStats::default();
    };

    let (lifetime_realized, lifetime_total_return) = rows.iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(realized, total), row| {
            (realized.saturating_add(row.income_realized_dollar), total.saturating_add(row.total_return_dollar))
        });

    SummaryStats {
        current_quarter: Some(latest.key()),
        latest_realized_rate_annualized: latest.realized_rate_annualized(),
        latest_realized_dollar: latest.income_realized_dollar,
        latest_total_return_rate_annualized: latest.total_return_rate_annualized(),
        latest_total_return_dollar: latest.total_return_dollar,
        latest_gaap_balance: latest.gaap_end,
        latest_nav_balance: latest.nav_end,
        lifetime_realized_dollar: lifetime_realized,
        lifetime_total_return_dollar: lifetime_total_return,
        beginning_balance: first.beginning_gaap,
        ending_gaap_balance: latest.gaap_end,
        ending_nav_balance: latest.nav_end
    }
}
