use crate::domain::aggregation::RankedApp;
use crate::domain::log_record::{is_error_level, LogRecord};
use crate::store::LogStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store with the same query semantics as `PgLogStore`.
#[derive(Clone, Default)]
pub struct MemoryLogStore {
    records: Arc<RwLock<Vec<LogRecord>>>,
}

impl MemoryLogStore {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

fn in_range(
    ts: Option<DateTime<Utc>>,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    match ts {
        Some(ts) => from.map_or(true, |f| ts >= f) && to.map_or(true, |t| ts <= t),
        None => false,
    }
}

#[async_trait::async_trait]
impl LogStore for MemoryLogStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn find_top_apps_by_count(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankedApp>> {
        let records = self.records.read().await;
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for r in records.iter().filter(|r| in_range(r.ts, from, to)) {
            *counts.entry(r.app.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<RankedApp> = counts
            .into_iter()
            .map(|(app, count)| RankedApp {
                app: app.to_string(),
                count,
            })
            .collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.app.cmp(&b.app)));
        Ok(ranked)
    }

    async fn find_error_logs_by_app(&self, app: &str) -> Result<Vec<LogRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.app == app && is_error_level(&r.level))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
