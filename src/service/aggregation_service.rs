use crate::aggregation::error_rate::{bucketize, validate_app};
use crate::aggregation::instant::parse_instant;
use crate::aggregation::top_apps::{parse_k, take_top};
use crate::aggregation::window::WindowDuration;
use crate::domain::aggregation::{ErrorRateBucket, RankedApp};
use crate::domain::error::AggregationError;
use crate::store::LogStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AggregationService {
    pub store: Arc<dyn LogStore>,
}

impl AggregationService {
    pub fn new(store: Arc<dyn LogStore>) -> Self {
        Self { store }
    }

    /// Error counts of `app` per fixed window, oldest window first.
    pub async fn error_rate(
        &self,
        app: Option<&str>,
        window: &str,
    ) -> Result<Vec<ErrorRateBucket>, AggregationError> {
        let app = validate_app(app)?;
        let window: WindowDuration = window.parse()?;

        let records = self.store.find_error_logs_by_app(app).await.map_err(|e| {
            tracing::error!(store = self.store.name(), app, error = %e, "error log fetch failed");
            AggregationError::Storage(e)
        })?;

        let buckets = bucketize(&records, window);
        tracing::debug!(
            app,
            window = %window,
            records = records.len(),
            buckets = buckets.len(),
            "computed error rate"
        );
        Ok(buckets)
    }

    pub async fn top_apps(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        k: Option<&str>,
    ) -> Result<Vec<RankedApp>, AggregationError> {
        let k = parse_k(k)?;
        let from = parse_instant("from", from)?;
        let to = parse_instant("to", to)?;

        let ranked = self
            .store
            .find_top_apps_by_count(from, to)
            .await
            .map_err(|e| {
                tracing::error!(store = self.store.name(), error = %e, "top apps fetch failed");
                AggregationError::Storage(e)
            })?;

        let total = ranked.len();
        let top = take_top(ranked, k);
        tracing::debug!(k, apps = total, returned = top.len(), "computed top apps");
        Ok(top)
    }
}
