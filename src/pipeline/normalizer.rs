use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{RawTransaction, Transaction, TransactionCategory, TransactionError};
use crate::pipeline::config::{PipelineConfig, UnclassifiedTreatment};
use crate::types::Amount;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses the amount, date and category of a single record.
///
/// # Errors
/// Returns `TransactionError` if:
/// - The amount is not a decimal (after removing thousands separators).
/// - None of the configured date fields holds a parseable date.
pub fn normalize(index: usize, raw: &RawTransaction, config: &PipelineConfig) -> Result<Transaction, TransactionError> {
    let amount: Decimal = Amount::from_str(&raw.amount)
        .map_err(|error| TransactionError::malformed_amount(index, raw, error))?
        .into();

    let date = config.date_precedence.iter()
        .filter_map(|field| field.value(raw))
        .find_map(parse_date)
        .ok_or_else(|| TransactionError::unparseable_date(index, raw))?;

    Ok(Transaction {
        index,
        amount,
        date,
        transaction_type: raw.transaction_type.trim().to_string(),
        category: categorize(index, raw, config)
    })
}

/// Normalizes a whole dataset, setting aside the records that fail.
pub fn normalize_all(raw: &[RawTransaction], config: &PipelineConfig) -> (Vec<Transaction>, Vec<TransactionError>) {
    let mut transactions = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();

    for (index, record) in raw.iter().enumerate() {
        match normalize(index, record, config) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => {
                warn!("Skipping record: {error}");
                rejected.push(error);
            }
        }
    }

    (transactions, rejected)
}

/// Reduces any of the accepted date notations to a UTC calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc2822(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS.iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|timestamp| timestamp.date())
        })
}

fn categorize(index: usize, raw: &RawTransaction, config: &PipelineConfig) -> TransactionCategory {
    match TransactionCategory::classify(&raw.transaction_type) {
        TransactionCategory::Unclassified => {
            warn!(
                "Unclassified transaction type [{}] for transaction [{}], treated as {:?}",
                raw.transaction_type, index, config.unclassified
            );

            match config.unclassified {
                UnclassifiedTreatment::Track => TransactionCategory::Unclassified,
                UnclassifiedTreatment::RealizedIncome => TransactionCategory::IncomePaid
            }
        }
        category => category
    }
}
