//! The quarterly returns pipeline: normalize, bucket, aggregate, summarize.
//!
//! Everything in here is a pure function of its input. Running the pipeline twice on
//! the same records yields identical reports.

mod aggregator;
mod bucketer;
mod config;
mod normalizer;
mod summary;

use tracing::debug;

use crate::models::{greeting_name, InvestorReport, RawTransaction, TransactionError};

pub use aggregator::{aggregate, Aggregator};
pub use bucketer::{bucket, effective_quarter, QuarterBuckets};
pub use config::{CutoverScope, DateField, PipelineConfig, UnclassifiedTreatment, CUTOVER_DAY, DEFAULT_DATE_PRECEDENCE};
pub use normalizer::{normalize, normalize_all, parse_date};
pub use summary::summarize;

/// Runs the full pipeline over one investor's records.
///
/// The investor is taken from the first record, the way the export lists one investor
/// per dataset. Records that cannot be normalized, or whose amounts overflow the quarter's
/// totals, are reported in `diagnostics` ordered by their position in `raw`.
pub fn run(raw: &[RawTransaction], config: &PipelineConfig) -> InvestorReport {
    let investor = raw.first()
        .map(|record| record.investor.trim().to_string())
        .unwrap_or_default();

    let (transactions, mut diagnostics) = normalize_all(raw, config);
    let buckets = bucket(transactions, config);
    let (rows, overflowed) = aggregate(&buckets);
    let summary = summarize(&rows);

    diagnostics.extend(overflowed);
    diagnostics.sort_by_key(TransactionError::index);

    debug!("Investor [{investor}]: {} records, {} quarters, {} skipped", raw.len(), rows.len(), diagnostics.len());

    InvestorReport {
        greeting_name: greeting_name(&investor),
        investor,
        rows,
        summary,
        diagnostics
    }
}
