use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::actors::ReportMemo;
use crate::models::RawTransaction;
use crate::pipeline::{self, PipelineConfig};
use crate::storage::Storage;
use crate::types::InvestorName;

/// Collects one investor's records and computes the report once its input is closed.
///
/// The pipeline needs the complete record set (bucketing is by date, not arrival order),
/// so nothing is computed until [`InvestorActor::despawn`] closes the channel.
pub struct InvestorActor {
    sender: mpsc::UnboundedSender<RawTransaction>,
    handle: JoinHandle<()>
}

impl InvestorActor {
    /// Spawns a new actor that saves its report into `storage` when it finishes.
    pub fn new<S: Storage>(investor: InvestorName, storage: Arc<S>, memo: ReportMemo, config: Arc<PipelineConfig>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<RawTransaction>();

        let handle = spawn(async move {
            let mut records = Vec::new();

            while let Some(record) = receiver.recv().await {
                records.push(record);
            }

            let key = fingerprint(&records, &config);

            let report = match memo.get(&key).await {
                Some(report) => {
                    debug!("Investor [{investor}]: reusing report for {} records", records.len());
                    report.as_ref().clone()
                }
                None => {
                    let report = pipeline::run(&records, &config);
                    memo.insert(key, Arc::new(report.clone())).await;
                    report
                }
            };

            storage.save(&investor, report);
        });

        Self { sender, handle }
    }

    /// Queues a record. Returns `false` if the actor is no longer running.
    pub fn accept(&self, record: RawTransaction) -> bool {
        self.sender.send(record).is_ok()
    }

    /// Closes the input and waits for the report to be saved.
    pub async fn despawn(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }
}

/// Identity of a pipeline input: the records in order plus the configuration.
pub fn fingerprint(records: &[RawTransaction], config: &PipelineConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    records.hash(&mut hasher);
    config.hash(&mut hasher);
    hasher.finish()
}
