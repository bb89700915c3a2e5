mod report_storage;
#[cfg(test)]
mod tests;

use crate::models::InvestorReport;

pub use report_storage::ReportStorage;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, investor: &str) -> Option<InvestorReport>;
    fn save(&self, investor: &str, report: InvestorReport);
}
