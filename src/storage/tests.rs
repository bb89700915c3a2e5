use super::{ReportStorage, Storage};
use crate::models::{InvestorReport, SummaryStats};
use anyhow::{anyhow, Result};

fn create_report(investor: &str) -> InvestorReport {
    InvestorReport {
        investor: investor.to_string(),
        greeting_name: investor.to_string(),
        rows: Vec::new(),
        summary: SummaryStats::default(),
        diagnostics: Vec::new()
    }
}

#[test]
fn test_storage_basic_load_and_save_operations() -> Result<()> {
    let storage = ReportStorage::new();

    assert!(storage.load("Nobody").is_none());

    storage.save("Brian Schmidt", create_report("Brian Schmidt"));

    let retrieved_report = storage.load("Brian Schmidt").ok_or_else(|| anyhow!("Report not found in storage"))?;

    assert_eq!(retrieved_report.investor, "Brian Schmidt");
    assert!(storage.load("Brian Schmidt").is_some());

    Ok(())
}

#[test]
fn test_storage_sorted_orders_reports_by_investor() {
    let storage = ReportStorage::new();
    storage.save("Charlie", create_report("Charlie"));
    storage.save("Alice", create_report("Alice"));
    storage.save("Bob", create_report("Bob"));

    let investors: Vec<_> = storage.sorted().into_iter().map(|report| report.investor).collect();

    assert_eq!(storage.iter().count(), 3);
    assert_eq!(storage.len(), 3);
    assert_eq!(investors, vec!["Alice", "Bob", "Charlie"]);
}

#[test]
fn test_storage_enforces_correct_overwrite_semantics() -> Result<()> {
    let storage = ReportStorage::new();
    assert!(storage.is_empty());

    storage.save("Alice", create_report("Alice"));

    let mut report_version_2 = storage.load("Alice").ok_or_else(|| anyhow!("Report v1 missing"))?;
    report_version_2.greeting_name = "Ally".to_string();
    storage.save("Alice", report_version_2);

    let final_report = storage.load("Alice").ok_or_else(|| anyhow!("Final report version missing"))?;

    assert_eq!(final_report.greeting_name, "Ally");
    assert_eq!(storage.len(), 1);

    Ok(())
}
