use crate::domain::error::AggregationError;
use chrono::{DateTime, Utc};

/// Parses an optional RFC 3339 query value. Absent and empty values mean
/// "no bound".
pub fn parse_instant(
    name: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, AggregationError> {
    match value {
        None | Some("") => Ok(None),
        Some(v) => DateTime::parse_from_rfc3339(v)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|_| AggregationError::InvalidInstant {
                name,
                value: v.to_string(),
            }),
    }
}
