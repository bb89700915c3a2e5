use super::{fingerprint, InvestorActor, ReportMemo};
use crate::models::RawTransaction;
use crate::pipeline::{PipelineConfig, UnclassifiedTreatment};
use crate::storage::{ReportStorage, Storage};
use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::sync::Arc;

fn create_transaction(investor: &str, transaction_type: &str, amount: &str, date: &str) -> RawTransaction {
    RawTransaction {
        amount: amount.to_string(),
        transaction_type: transaction_type.to_string(),
        effective_date: Some(date.to_string()),
        tran_date: None,
        investor: investor.to_string()
    }
}

fn create_actor(investor: &str, storage: &Arc<ReportStorage>, memo: &ReportMemo) -> InvestorActor {
    InvestorActor::new(investor.to_string(), storage.clone(), memo.clone(), Arc::new(PipelineConfig::default()))
}

#[tokio::test]
async fn test_actor_isolation_and_storage_persistence() -> Result<()> {
    let storage = Arc::new(ReportStorage::new());
    let memo = ReportMemo::new(16);

    let actor_brian = create_actor("Brian Schmidt", &storage, &memo);
    let actor_bennett = create_actor("Bennett Williamson", &storage, &memo);

    actor_brian.accept(create_transaction("Brian Schmidt", "Contribution - Equity", "100,000", "2015-01-01"));
    actor_bennett.accept(create_transaction("Bennett Williamson", "Contribution - Equity", "200,000", "2015-01-01"));
    actor_brian.accept(create_transaction("Brian Schmidt", "Income Paid", "6,000", "2015-06-30"));

    actor_brian.despawn().await?;
    actor_bennett.despawn().await?;

    let brian = storage.load("Brian Schmidt").ok_or_else(|| anyhow!("Brian missing from storage"))?;
    let bennett = storage.load("Bennett Williamson").ok_or_else(|| anyhow!("Bennett missing from storage"))?;

    assert_eq!(brian.rows.len(), 2);
    assert_eq!(brian.summary.latest_realized_dollar, Decimal::from(6000));
    assert_eq!(bennett.rows.len(), 1);
    assert_eq!(bennett.summary.ending_gaap_balance, Decimal::from(200_000));

    Ok(())
}

#[tokio::test]
async fn test_actor_keeps_going_past_malformed_records() -> Result<()> {
    let storage = Arc::new(ReportStorage::new());
    let memo = ReportMemo::new(16);
    let actor = create_actor("Brian Schmidt", &storage, &memo);

    actor.accept(create_transaction("Brian Schmidt", "Contribution - Equity", "10", "2015-01-01"));
    actor.accept(create_transaction("Brian Schmidt", "Contribution - Equity", "ten", "2015-01-01"));
    actor.accept(create_transaction("Brian Schmidt", "Contribution - Equity", "20", "2015-02-01"));

    actor.despawn().await?;

    let report = storage.load("Brian Schmidt").ok_or_else(|| anyhow!("Report missing from storage"))?;

    assert_eq!(report.summary.ending_gaap_balance, Decimal::from(30));
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].index(), 1);

    Ok(())
}

#[tokio::test]
async fn test_actor_memoizes_reports_by_input_fingerprint() -> Result<()> {
    let storage = Arc::new(ReportStorage::new());
    let memo = ReportMemo::new(16);
    let records = vec![
        create_transaction("Brian Schmidt", "Contribution - Equity", "100,000", "2015-01-01"),
        create_transaction("Brian Schmidt", "Income Paid", "6,000", "2015-06-30"),
    ];

    let actor = create_actor("Brian Schmidt", &storage, &memo);
    records.iter().cloned().for_each(|record| { actor.accept(record); });
    actor.despawn().await?;

    let key = fingerprint(&records, &PipelineConfig::default());
    let cached = memo.get(&key).await.ok_or_else(|| anyhow!("Report was not memoized"))?;
    let stored = storage.load("Brian Schmidt").ok_or_else(|| anyhow!("Report missing from storage"))?;

    assert_eq!(*cached, stored);

    Ok(())
}

#[test]
fn test_fingerprint_depends_on_records_and_configuration() {
    let records = vec![create_transaction("Brian Schmidt", "Income Paid", "1", "2015-06-30")];
    let other_records = vec![create_transaction("Brian Schmidt", "Income Paid", "2", "2015-06-30")];
    let config = PipelineConfig::default();
    let other_config = PipelineConfig { unclassified: UnclassifiedTreatment::RealizedIncome, ..PipelineConfig::default() };

    assert_eq!(fingerprint(&records, &config), fingerprint(&records.clone(), &config));
    assert_ne!(fingerprint(&records, &config), fingerprint(&other_records, &config));
    assert_ne!(fingerprint(&records, &config), fingerprint(&records, &other_config));
}
