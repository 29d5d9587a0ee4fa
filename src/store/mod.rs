use crate::domain::aggregation::RankedApp;
use crate::domain::log_record::LogRecord;
use anyhow::Result;
use chrono::{DateTime, Utc};

pub mod memory;
pub mod postgres;

/// Read side of the log record storage.
#[async_trait::async_trait]
pub trait LogStore: Send + Sync {
    fn name(&self) -> &'static str;

    /// Per-app record counts, highest count first and ties by app name.
    /// Bounds are inclusive and apply to `ts`.
    async fn find_top_apps_by_count(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankedApp>>;

    /// Error-level records of one app, in no particular order.
    async fn find_error_logs_by_app(&self, app: &str) -> Result<Vec<LogRecord>>;

    async fn ping(&self) -> Result<()>;
}
