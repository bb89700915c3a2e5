use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{Action, AggregatedRow, Transaction, TransactionCategory, TransactionError};
use crate::pipeline::bucketer::QuarterBuckets;
use crate::types::{QuarterKey, QUARTERS_PER_YEAR};

/// Categorized sums of a single quarter.
#[derive(Debug, Default, Clone, Copy)]
struct QuarterTotals {
    contribution: Decimal,
    redemption_gaap: Decimal,
    redemption_nav: Decimal,
    income_paid: Decimal,
    income_reinvested: Decimal,
    unrealized: Decimal,
    tax: Decimal,
    unclassified: Decimal,
    has_reinvestment: bool
}

impl QuarterTotals {
    /// The totals with `transaction` included, `None` if its sum leaves the decimal range.
    fn with(self, transaction: &Transaction) -> Option<Self> {
        let mut totals = self;
        let amount = transaction.amount;

        match transaction.category {
            TransactionCategory::Contribution => totals.contribution = totals.contribution.checked_add(amount)?,
            TransactionCategory::RedemptionGaap => totals.redemption_gaap = totals.redemption_gaap.checked_add(amount)?,
            TransactionCategory::RedemptionNav => totals.redemption_nav = totals.redemption_nav.checked_add(amount)?,
            TransactionCategory::IncomePaid => totals.income_paid = totals.income_paid.checked_add(amount)?,
            TransactionCategory::IncomeReinvestment => {
                totals.income_reinvested = totals.income_reinvested.checked_add(amount)?;
                totals.has_reinvestment = true;
            }
            TransactionCategory::Unrealized => totals.unrealized = totals.unrealized.checked_add(amount)?,
            TransactionCategory::Tax => totals.tax = totals.tax.checked_add(amount)?,
            TransactionCategory::Unclassified => totals.unclassified = totals.unclassified.checked_add(amount)?
        }

        Some(totals)
    }
}

/// Derived dollar figures of a quarter, including the state carried into the next one.
#[derive(Debug, Clone, Copy)]
struct QuarterFigures {
    income_realized: Decimal,
    total_return: Decimal,
    gaap_end: Decimal,
    cumulative_unrealized: Decimal,
    nav_end: Decimal,
    net_flow: Decimal,
    capital_flow: Decimal,
    lifetime_realized: Decimal,
    lifetime_total_return: Decimal
}

/// Left-to-right scan over chronologically ordered quarters.
///
/// Carries the GAAP balance and the cumulative unrealized gain from one quarter to the
/// next, which is what chains every row's beginning balances to the previous row's
/// ending balances.
///
/// A transaction that would push any sum, balance or lifetime total outside the decimal
/// range is left out of its quarter and reported by [`Aggregator::into_rejected`].
#[derive(Debug, Default)]
pub struct Aggregator {
    gaap_balance: Decimal,
    cumulative_unrealized: Decimal,
    nav_balance: Decimal,
    lifetime_realized: Decimal,
    lifetime_total_return: Decimal,
    period: u32,
    rejected: Vec<TransactionError>
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one quarter into the running state and returns its row.
    ///
    /// Quarters must be pushed in ascending order.
    pub fn push(&mut self, key: QuarterKey, transactions: &[Transaction]) -> AggregatedRow {
        let mut totals = QuarterTotals::default();
        let mut figures = self.carried();

        for transaction in transactions {
            let candidate = totals.with(transaction)
                .and_then(|candidate| Some((candidate, self.figures(&candidate)?)));

            match candidate {
                Some((candidate_totals, candidate_figures)) => {
                    totals = candidate_totals;
                    figures = candidate_figures;
                }
                None => {
                    let error = TransactionError::overflow(transaction);
                    warn!("Skipping record: {error}");
                    self.rejected.push(error);
                }
            }
        }

        let beginning_gaap = self.gaap_balance;
        let beginning_nav = self.nav_balance;

        let realized_rate = rate_of(figures.income_realized, beginning_gaap).unwrap_or_else(|| {
            warn!("Realized rate of [{key}] is out of range ({} / {beginning_gaap}), reported as 0", figures.income_realized);
            Decimal::ZERO
        });

        let total_return_rate = rate_of(figures.total_return, beginning_gaap).unwrap_or_else(|| {
            warn!("Total return rate of [{key}] is out of range ({} / {beginning_gaap}), reported as 0", figures.total_return);
            Decimal::ZERO
        });

        let action = if totals.has_reinvestment { Action::Reinvested } else { Action::Distributed };

        self.period += 1;
        self.gaap_balance = figures.gaap_end;
        self.cumulative_unrealized = figures.cumulative_unrealized;
        self.nav_balance = figures.nav_end;
        self.lifetime_realized = figures.lifetime_realized;
        self.lifetime_total_return = figures.lifetime_total_return;

        debug!(
            "Aggregated [{key}] from {} transactions: GAAP {beginning_gaap} -> {}, NAV {beginning_nav} -> {}",
            transactions.len(), figures.gaap_end, figures.nav_end
        );

        AggregatedRow {
            period: self.period,
            label: key.label(),
            year: key.year,
            quarter: key.quarter,
            beginning_gaap,
            beginning_nav,
            contribution_dollar: totals.contribution,
            redemption_gaap_dollar: totals.redemption_gaap,
            redemption_nav_dollar: totals.redemption_nav,
            income_paid_dollar: totals.income_paid,
            income_reinvested_dollar: totals.income_reinvested,
            income_realized_dollar: figures.income_realized,
            unrealized_dollar: totals.unrealized,
            total_return_dollar: figures.total_return,
            tax_dollar: totals.tax,
            unclassified_dollar: totals.unclassified,
            gaap_end: figures.gaap_end,
            nav_end: figures.nav_end,
            realized_rate,
            total_return_rate,
            action,
            net_flow: figures.net_flow,
            capital_flow: figures.capital_flow
        }
    }

    /// Transactions left out because they overflowed, in the order they were met.
    pub fn into_rejected(self) -> Vec<TransactionError> {
        self.rejected
    }

    /// Figures of a quarter without transactions.
    fn carried(&self) -> QuarterFigures {
        QuarterFigures {
            income_realized: Decimal::ZERO,
            total_return: Decimal::ZERO,
            gaap_end: self.gaap_balance,
            cumulative_unrealized: self.cumulative_unrealized,
            nav_end: self.nav_balance,
            net_flow: Decimal::ZERO,
            capital_flow: Decimal::ZERO,
            lifetime_realized: self.lifetime_realized,
            lifetime_total_return: self.lifetime_total_return
        }
    }

    fn figures(&self, totals: &QuarterTotals) -> Option<QuarterFigures> {
        let income_realized = totals.income_paid.checked_add(totals.income_reinvested)?;
        let total_return = income_realized.checked_add(totals.unrealized)?;

        let gaap_end = self.gaap_balance
            .checked_add(totals.contribution)?
            .checked_add(totals.income_reinvested)?
            .checked_sub(totals.redemption_gaap)?;

        let cumulative_unrealized = self.cumulative_unrealized
            .checked_add(totals.unrealized)?
            .checked_sub(totals.redemption_nav)?;

        Some(QuarterFigures {
            income_realized,
            total_return,
            gaap_end,
            cumulative_unrealized,
            nav_end: gaap_end.checked_add(cumulative_unrealized)?,
            net_flow: gaap_end.checked_sub(self.gaap_balance)?,
            capital_flow: totals.contribution.checked_sub(totals.redemption_gaap)?,
            lifetime_realized: self.lifetime_realized.checked_add(income_realized)?,
            lifetime_total_return: self.lifetime_total_return.checked_add(total_return)?
        })
    }
}

/// Return rate against the opening balance, zero while there is no positive opening balance.
///
/// `None` when the rate, or its annualized value, is outside the decimal range.
fn rate_of(dollars: Decimal, opening_balance: Decimal) -> Option<Decimal> {
    if opening_balance <= Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    dollars.checked_div(opening_balance)
        .filter(|rate| rate.checked_mul(Decimal::from(QUARTERS_PER_YEAR)).is_some())
}

/// Produces one row per populated quarter, in chronological order, and the transactions
/// that had to be left out.
pub fn aggregate(buckets: &QuarterBuckets) -> (Vec<AggregatedRow>, Vec<TransactionError>) {
    let mut aggregator = Aggregator::new();

    let rows = buckets.iter()
        .map(|(key, transactions)| aggregator.push(*key, transactions))
        .collect();

    (rows, aggregator.into_rejected())
}
