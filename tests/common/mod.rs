#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use log_aggregations::domain::aggregation::RankedApp;
use log_aggregations::domain::log_record::LogRecord;
use log_aggregations::store::memory::MemoryLogStore;
use log_aggregations::store::LogStore;
use uuid::Uuid;

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap()
}

pub fn record(app: &str, level: &str, ts: Option<DateTime<Utc>>) -> LogRecord {
    LogRecord {
        id: Uuid::new_v4(),
        app: app.to_string(),
        level: level.to_string(),
        ts,
        message: format!("{level} from {app}"),
    }
}

/// app1: 10 records (3 errors), app2: 5 records (2 errors), app3: 3 info
/// records, one minute apart from `base_time()`.
pub fn seeded_store() -> MemoryLogStore {
    let mut records = Vec::new();
    for (app, total, errors) in [("app1", 10, 3), ("app2", 5, 2), ("app3", 3, 0)] {
        for i in 0..total {
            let level = if i < errors { "ERROR" } else { "INFO" };
            records.push(record(app, level, Some(base_time() + Duration::seconds(i * 60))));
        }
    }
    MemoryLogStore::new(records)
}

/// Store whose every call fails, as an unreachable database would.
pub struct FailingStore;

#[async_trait::async_trait]
impl LogStore for FailingStore {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn find_top_apps_by_count(
        &self,
        _from: Option<DateTime<Utc>>,
        _to: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankedApp>> {
        anyhow::bail!("connection refused")
    }

    async fn find_error_logs_by_app(&self, _app: &str) -> Result<Vec<LogRecord>> {
        anyhow::bail!("connection refused")
    }

    async fn ping(&self) -> Result<()> {
        anyhow::bail!("connection refused")
    }
}
