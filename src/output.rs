//! CSV rendering of investor reports for the command line.

use std::io::Write;

use anyhow::Result;
use csv::Writer;
use rust_decimal::Decimal;

use crate::models::{InvestorReport, StatUnit};

const MONEY_DECIMAL_PLACES: u32 = 2;
const RATE_DECIMAL_PLACES: u32 = 6;

const ROW_HEADER: [&str; 25] = [
    "investor", "period", "label", "beginning_gaap", "beginning_nav", "contribution_dollar",
    "redemption_gaap_dollar", "redemption_nav_dollar", "income_paid_dollar", "income_reinvested_dollar",
    "income_realized_dollar", "unrealized_dollar", "total_return_dollar", "tax_dollar", "unclassified_dollar",
    "gaap_end", "nav_end", "realized_rate", "total_return_rate", "realized_rate_annualized",
    "total_return_rate_annualized", "action", "net_flow", "capital_flow", "skipped_records",
];

fn money(value: Decimal) -> String {
    value.round_dp(MONEY_DECIMAL_PLACES).to_string()
}

fn rate(value: Decimal) -> String {
    value.round_dp(RATE_DECIMAL_PLACES).normalize().to_string()
}

/// Writes one line per investor-quarter.
pub fn write_rows<W: Write>(output: W, reports: &[InvestorReport]) -> Result<()> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(ROW_HEADER)?;

    for report in reports {
        let skipped = report.diagnostics.len().to_string();

        for row in &report.rows {
            writer.write_record([
                report.investor.clone(),
                row.period.to_string(),
                row.label.clone(),
                money(row.beginning_gaap),
                money(row.beginning_nav),
                money(row.contribution_dollar),
                money(row.redemption_gaap_dollar),
                money(row.redemption_nav_dollar),
                money(row.income_paid_dollar),
                money(row.income_reinvested_dollar),
                money(row.income_realized_dollar),
                money(row.unrealized_dollar),
                money(row.total_return_dollar),
                money(row.tax_dollar),
                money(row.unclassified_dollar),
                money(row.gaap_end),
                money(row.nav_end),
                rate(row.realized_rate),
                rate(row.total_return_rate),
                rate(row.realized_rate_annualized()),
                rate(row.total_return_rate_annualized()),
                format!("{:?}", row.action),
                money(row.net_flow),
                money(row.capital_flow),
                skipped.clone(),
            ])?;
        }
    }

    writer.flush()?;

    Ok(())
}

/// Writes the greeting, the current quarter and every labeled statistic of each investor.
pub fn write_summary<W: Write>(output: W, reports: &[InvestorReport]) -> Result<()> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(["investor", "label", "unit", "value"])?;

    for report in reports {
        let current_quarter = report.summary.current_quarter
            .map(|key| key.label())
            .unwrap_or_default();

        writer.write_record([report.investor.as_str(), "greeting", "text", report.greeting_name.as_str()])?;
        writer.write_record([report.investor.as_str(), "current_quarter", "text", current_quarter.as_str()])?;

        for stat in report.summary.labeled() {
            let (unit, value) = match stat.unit {
                StatUnit::Currency => ("currency", money(stat.value)),
                StatUnit::Percent => ("percent", rate(stat.value))
            };

            writer.write_record([report.investor.as_str(), stat.label, unit, value.as_str()])?;
        }
    }

    writer.flush()?;

    Ok(())
}
