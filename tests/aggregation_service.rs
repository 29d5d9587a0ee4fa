mod common;

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use log_aggregations::domain::aggregation::RankedApp;
use log_aggregations::domain::error::AggregationError;
use log_aggregations::domain::log_record::LogRecord;
use log_aggregations::service::aggregation_service::AggregationService;
use log_aggregations::store::memory::MemoryLogStore;
use log_aggregations::store::LogStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingStore {
    inner: MemoryLogStore,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl LogStore for CountingStore {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn find_top_apps_by_count(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankedApp>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_top_apps_by_count(from, to).await
    }

    async fn find_error_logs_by_app(&self, app: &str) -> Result<Vec<LogRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_error_logs_by_app(app).await
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn validation_failures_never_reach_the_store() {
    let store = Arc::new(CountingStore::default());
    let svc = AggregationService::new(store.clone());

    assert!(matches!(
        svc.error_rate(None, "5m").await,
        Err(AggregationError::MissingParameter("app"))
    ));
    assert!(matches!(
        svc.error_rate(Some("  "), "5m").await,
        Err(AggregationError::MissingParameter(_))
    ));
    assert!(matches!(
        svc.error_rate(Some("app1"), "-5m").await,
        Err(AggregationError::InvalidWindow(_))
    ));
    assert!(matches!(
        svc.top_apps(Some("2025-13-01"), None, Some("3")).await,
        Err(AggregationError::InvalidInstant { name: "from", .. })
    ));
    assert!(matches!(
        svc.top_apps(None, None, Some("many")).await,
        Err(AggregationError::InvalidParameter { name: "k", .. })
    ));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);

    svc.error_rate(Some("app1"), "5m").await.unwrap();
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn storage_failures_surface_as_processing_errors() {
    let svc = AggregationService::new(Arc::new(common::FailingStore));

    let err = svc.error_rate(Some("app1"), "5m").await.unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(err.code(), "PROCESSING_ERROR");
    assert!(err.to_string().contains("connection refused"));

    let err = svc.top_apps(None, None, Some("5")).await.unwrap_err();
    assert!(matches!(err, AggregationError::Storage(_)));
}

#[tokio::test]
async fn error_rate_ignores_untimed_and_non_error_records() {
    let base = common::base_time();
    let store = MemoryLogStore::new(vec![
        common::record("svc", "ERROR", Some(base)),
        common::record("svc", "ERROR", None),
        common::record("svc", "WARN", Some(base)),
        common::record("svc", "FATAL", Some(base + Duration::hours(2))),
        common::record("other", "ERROR", Some(base)),
    ]);
    let svc = AggregationService::new(Arc::new(store));

    let buckets = svc.error_rate(Some("svc"), "1h").await.unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].window_start, base);
    assert_eq!(buckets[0].error_count, 1);
    assert_eq!(buckets[1].window_start, base + Duration::hours(2));
    assert_eq!(buckets[1].error_count, 1);
}

#[tokio::test]
async fn top_apps_truncates_ranked_results() {
    let svc = AggregationService::new(Arc::new(common::seeded_store()));

    let top = svc.top_apps(None, None, Some("2")).await.unwrap();
    assert_eq!(
        top,
        vec![
            RankedApp { app: "app1".to_string(), count: 10 },
            RankedApp { app: "app2".to_string(), count: 5 },
        ]
    );
    assert_eq!(svc.top_apps(None, None, Some("10")).await.unwrap().len(), 3);
    assert!(svc.top_apps(Some(""), Some(""), Some("-1")).await.unwrap().is_empty());
    assert_eq!(svc.top_apps(None, None, Some("")).await.unwrap().len(), 3);
}
