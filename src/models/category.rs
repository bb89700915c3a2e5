use serde::Serialize;

/// Accounting treatment of a transaction within a quarter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum TransactionCategory {
    /// Increases the GAAP balance. Includes transfers in and equity conversions from notes.
    Contribution,
    /// Decreases the GAAP balance. Includes transfers out.
    RedemptionGaap,
    /// Decreases cumulative unrealized gains only.
    RedemptionNav,
    /// Realized income distributed in cash.
    IncomePaid,
    /// Realized income retained in the account.
    IncomeReinvestment,
    /// Mark-to-market gain or loss.
    Unrealized,
    /// Excluded from returns.
    Tax,
    Unclassified
}

// Checked in order, first matching prefix wins.
const CLASSIFICATION_RULES: &[(&str, TransactionCategory)] = &[
    ("Contribution", TransactionCategory::Contribution),
    ("Transfer In", TransactionCategory::Contribution),
    ("Equity Conversion - from", TransactionCategory::Contribution),
    ("Transfer Out", TransactionCategory::RedemptionGaap),
    ("Redemption - GAAP", TransactionCategory::RedemptionGaap),
    ("Redemption - NAV", TransactionCategory::RedemptionNav),
    ("Income Paid", TransactionCategory::IncomePaid),
    ("Income Reinvestment", TransactionCategory::IncomeReinvestment),
    ("Unrealized Gains/Losses", TransactionCategory::Unrealized),
    ("Tax Increase/Decrease", TransactionCategory::Tax),
];

impl TransactionCategory {
    /// Maps an exported transaction label onto its category.
    ///
    /// Labels that match no known prefix are returned as [`TransactionCategory::Unclassified`];
    /// the pipeline configuration decides what happens to them.
    pub fn classify(transaction_type: &str) -> Self {
        let transaction_type = transaction_type.trim();

        CLASSIFICATION_RULES.iter()
            .find(|(prefix, _)| transaction_type.starts_with(prefix))
            .map(|(_, category)| *category)
            .unwrap_or(TransactionCategory::Unclassified)
    }

    /// Earnings postings are subject to the quarter cutover rule, capital movements are not.
    pub fn is_earnings(self) -> bool {
        matches!(
            self,
            TransactionCategory::IncomePaid | TransactionCategory::IncomeReinvestment | TransactionCategory::Unrealized
        )
    }
}
