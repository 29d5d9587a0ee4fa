use crate::aggregation::bucket::truncate;
use crate::aggregation::window::WindowDuration;
use crate::domain::aggregation::ErrorRateBucket;
use crate::domain::error::AggregationError;
use crate::domain::log_record::LogRecord;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

pub const MAX_APP_LEN: usize = 100;

pub fn validate_app(app: Option<&str>) -> Result<&str, AggregationError> {
    let app = match app {
        Some(a) if !a.trim().is_empty() => a,
        _ => return Err(AggregationError::MissingParameter("app")),
    };
    if app.chars().count() > MAX_APP_LEN {
        return Err(AggregationError::ParameterTooLong("app"));
    }
    Ok(app)
}

/// Counts records per window, oldest window first. Records without a
/// timestamp, or whose window start is not representable, are not counted.
pub fn bucketize(records: &[LogRecord], window: WindowDuration) -> Vec<ErrorRateBucket> {
    let mut counts: BTreeMap<DateTime<Utc>, u64> = BTreeMap::new();
    for start in records.iter().filter_map(|r| r.ts).filter_map(|ts| truncate(ts, window)) {
        *counts.entry(start).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(window_start, error_count)| ErrorRateBucket {
            window_start,
            error_count,
        })
        .collect()
}
