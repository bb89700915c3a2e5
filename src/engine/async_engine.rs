use crate::actors::{InvestorActor, ReportMemo};
use crate::dataset::read_records;
use crate::models::RawTransaction;
use crate::pipeline::PipelineConfig;
use crate::storage::ReportStorage;
use crate::types::InvestorName;
use futures::future::join_all;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error};

const DEFAULT_CACHE_CAPACITY: u64 = 1_024;

/// Reads a transaction export and produces one report per investor.
///
/// Records are partitioned by investor and each investor's pipeline runs in its own
/// actor. Finished reports are memoized, so re-running an unchanged dataset reuses them.
pub struct AsyncEngine {
    storage: Arc<ReportStorage>,
    config: Arc<PipelineConfig>,
    memo: ReportMemo,
    backpressure: usize,
    cache_capacity: u64,
    cache_timeout: Option<Duration>
}

impl AsyncEngine {
    /// Creates a new engine instance with the provided storage and the default pipeline configuration.
    pub fn new(storage: Arc<ReportStorage>) -> Self {
        Self {
            storage,
            config: Arc::new(PipelineConfig::default()),
            memo: build_memo(DEFAULT_CACHE_CAPACITY, None),
            backpressure: 256,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_timeout: None
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Limits how many finished reports are memoized.
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self.memo = build_memo(self.cache_capacity, self.cache_timeout);
        self
    }

    /// Expires memoized reports after `timeout`.
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = Some(timeout);
        self.memo = build_memo(self.cache_capacity, self.cache_timeout);
        self
    }

    /// Number of memoized reports, after pending evictions are applied.
    pub async fn cached_reports(&self) -> u64 {
        self.memo.run_pending_tasks().await;
        self.memo.entry_count()
    }

    /// Orchestrates the end-to-end processing of a dataset file.
    ///
    /// A dataset that cannot be read is logged and leaves the storage untouched.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<RawTransaction>(self.backpressure);
        let reader_handle = self.spawn_dataset_reader(PathBuf::from(path), sender);
        let processing_result = self.process_transactions(receiver).await;

        if let Err(error) = reader_handle.await {
            error!("Dataset ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_dataset_reader(&self, path: PathBuf, sender: mpsc::Sender<RawTransaction>) -> JoinHandle<()> {
        spawn_blocking(move || {
            match read_records(&path, |record| sender.blocking_send(record).is_ok()) {
                Ok(count) => debug!("Read {count} records from {}", path.display()),
                Err(error) => error!("Error reading dataset at path: {} | {error:#}", path.display())
            }
        })
    }

    async fn process_transactions(&self, mut receiver: mpsc::Receiver<RawTransaction>) -> anyhow::Result<()> {
        let mut actors = HashMap::<InvestorName, InvestorActor>::new();

        while let Some(record) = receiver.recv().await {
            let investor = record.investor.trim().to_string();

            let actor = actors.entry(investor.clone()).or_insert_with(|| {
                InvestorActor::new(investor.clone(), self.storage.clone(), self.memo.clone(), self.config.clone())
            });

            if !actor.accept(record) {
                error!("Investor actor for [{investor}] could not accept a record");
            }
        }

        let despawns = actors.into_values().map(|actor| actor.despawn());

        for result in join_all(despawns).await {
            if let Err(error) = result {
                error!("An investor actor did not despawn gracefully: {error:?}");
            }
        }

        Ok(())
    }
}

fn build_memo(capacity: u64, timeout: Option<Duration>) -> ReportMemo {
    let builder = ReportMemo::builder().max_capacity(capacity);

    match timeout {
        Some(timeout) => builder.time_to_live(timeout).build(),
        None => builder.build()
    }
}
