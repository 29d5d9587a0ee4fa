use crate::aggregation::window::WindowDuration;
use chrono::{DateTime, Utc};

/// Epoch second at which the window containing `ts` starts.
pub fn bucket_start_epoch(ts: DateTime<Utc>, window: WindowDuration) -> i64 {
    let w = window.seconds();
    ts.timestamp().div_euclid(w) * w
}

/// Start of the window containing `ts`, or `None` when that start falls
/// before the earliest instant chrono can represent.
pub fn truncate(ts: DateTime<Utc>, window: WindowDuration) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(bucket_start_epoch(ts, window), 0)
}
