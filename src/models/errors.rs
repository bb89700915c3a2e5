use crate::models::{RawTransaction, Transaction};
use crate::types::AmountError;
use thiserror::Error;

/// A record that could not be normalized and was left out of the aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionError {
    #[error("Malformed amount [{amount}] for transaction [{index}]:[{transaction_type}] | {source}")]
    MalformedAmount {
        index: usize,
        transaction_type: String,
        amount: String,
        source: AmountError
    },
    #[error("No parseable date for transaction [{index}]:[{transaction_type}] (effective: {effective_date:?}, tran: {tran_date:?})")]
    UnparseableDate {
        index: usize,
        transaction_type: String,
        effective_date: Option<String>,
        tran_date: Option<String>
    },
    #[error("Amount [{amount}] of transaction [{index}]:[{transaction_type}] overflows the quarter's totals")]
    Overflow {
        index: usize,
        transaction_type: String,
        amount: String
    }
}

impl TransactionError {
    pub fn malformed_amount(index: usize, raw: &RawTransaction, source: AmountError) -> Self {
        Self::MalformedAmount {
            index,
            transaction_type: raw.transaction_type.clone(),
            amount: raw.amount.clone(),
            source
        }
    }

    pub fn unparseable_date(index: usize, raw: &RawTransaction) -> Self {
        Self::UnparseableDate {
            index,
            transaction_type: raw.transaction_type.clone(),
            effective_date: raw.effective_date.clone(),
            tran_date: raw.tran_date.clone()
        }
    }

    pub fn overflow(transaction: &Transaction) -> Self {
        Self::Overflow {
            index: transaction.index,
            transaction_type: transaction.transaction_type.clone(),
            amount: transaction.amount.to_string()
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::MalformedAmount { index, .. } | Self::UnparseableDate { index, .. } | Self::Overflow { index, .. } => *index
        }
    }
}
