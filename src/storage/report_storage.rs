use crate::models::InvestorReport;
use crate::storage::Storage;
use crate::types::InvestorName;
use dashmap::iter::Iter;
use dashmap::DashMap;
use std::sync::Arc;

/// Latest report per investor, shared between the engine's actors and the caller.
#[derive(Default)]
pub struct ReportStorage {
    reports: Arc<DashMap<InvestorName, InvestorReport>>
}

impl ReportStorage {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(DashMap::new())
        }
    }

    pub fn iter(&self) -> Iter<'_, InvestorName, InvestorReport> {
        self.reports.iter()
    }

    /// All stored reports ordered by investor name.
    pub fn sorted(&self) -> Vec<InvestorReport> {
        let mut reports: Vec<_> = self.reports.iter().map(|item| item.value().clone()).collect();
        reports.sort_by(|left, right| left.investor.cmp(&right.investor));
        reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl Storage for ReportStorage {
    fn load(&self, investor: &str) -> Option<InvestorReport> {
        self.reports.get(investor).map(|report| report.value().clone())
    }

    fn save(&self, investor: &str, report: InvestorReport) {
        self.reports.insert(investor.to_string(), report);
    }
}
