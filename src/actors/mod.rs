mod investor_actor;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use moka::future::Cache;

use crate::models::InvestorReport;

pub use investor_actor::{fingerprint, InvestorActor};

/// Finished reports keyed by the fingerprint of the records and configuration they came from.
pub type ReportMemo = Cache<u64, Arc<InvestorReport>>;
