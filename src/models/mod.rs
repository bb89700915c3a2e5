mod category;
mod errors;
mod report;
mod row;
mod summary;
mod transaction;

use serde::Serialize;

pub use category::TransactionCategory;
pub use errors::TransactionError;
pub use report::{greeting_name, InvestorReport};
pub use row::AggregatedRow;
pub use summary::{Stat, StatUnit, SummaryStats};
pub use transaction::{RawTransaction, Transaction};

/// Whether a quarter's income stayed in the account.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Action {
    Reinvested,
    Distributed
}
