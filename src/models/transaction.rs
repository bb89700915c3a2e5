use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TransactionCategory;
use crate::types::InvestorName;

/// Represents a single record of the investor transaction export.
///
/// Every field is kept as exported text. Parsing happens during normalization so that a
/// malformed record can be skipped on its own, with a diagnostic, instead of failing the
/// whole dataset. A missing amount or type is kept as an empty string for the same reason.
/// Columns of the export that the returns calculation does not need (`Control`, `Shares`,
/// `Post_Month`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Currency amount with thousands separators, e.g. `"2,551.71"`.
    #[serde(rename = "Actual_Transaction_Amount", default)]
    pub amount: String,
    /// Prefix-structured label such as `"Income Reinvestment - Adj"`.
    #[serde(rename = "Transaction_Type", default)]
    pub transaction_type: String,
    #[serde(rename = "Effective_Date", default)]
    pub effective_date: Option<String>,
    #[serde(rename = "Tran_Date", default)]
    pub tran_date: Option<String>,
    #[serde(rename = "Investor", default)]
    pub investor: InvestorName
}

/// A transaction with typed amount and date, ready to be bucketed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Position of the source record within its dataset.
    pub index: usize,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub transaction_type: String,
    pub category: TransactionCategory
}
