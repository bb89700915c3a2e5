use std::collections::BTreeMap;

use chrono::Datelike;

use crate::models::Transaction;
use crate::pipeline::config::{CutoverScope, PipelineConfig};
use crate::types::QuarterKey;

/// Transactions grouped by effective quarter. Keys iterate in chronological order.
pub type QuarterBuckets = BTreeMap<QuarterKey, Vec<Transaction>>;

/// The quarter a transaction is accounted in, after applying the cutover rule.
pub fn effective_quarter(transaction: &Transaction, config: &PipelineConfig) -> QuarterKey {
    let calendar_quarter = QuarterKey::from_date(transaction.date);

    if is_cut_over(transaction, config) {
        calendar_quarter.previous()
    } else {
        calendar_quarter
    }
}

pub fn bucket(transactions: Vec<Transaction>, config: &PipelineConfig) -> QuarterBuckets {
    let mut buckets = QuarterBuckets::new();

    for transaction in transactions {
        buckets.entry(effective_quarter(&transaction, config))
            .or_default()
            .push(transaction);
    }

    buckets
}

fn is_cut_over(transaction: &Transaction, config: &PipelineConfig) -> bool {
    if !transaction.category.is_earnings() || transaction.date.day() > config.cutover_day {
        return false;
    }

    match config.cutover_scope {
        CutoverScope::AnyMonth => true,
        CutoverScope::QuarterStartMonth => transaction.date.month0() % 3 == 0
    }
}
