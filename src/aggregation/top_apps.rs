use crate::domain::aggregation::RankedApp;
use crate::domain::error::AggregationError;

pub const DEFAULT_TOP_K: i64 = 5;

/// Reads the `k` query value. Absent and empty both mean `DEFAULT_TOP_K`.
pub fn parse_k(value: Option<&str>) -> Result<i64, AggregationError> {
    match value {
        None | Some("") => Ok(DEFAULT_TOP_K),
        Some(v) => v.parse::<i64>().map_err(|_| AggregationError::InvalidParameter {
            name: "k",
            value: v.to_string(),
        }),
    }
}

/// Keeps the first `k` entries of an already ranked list.
pub fn take_top(ranked: Vec<RankedApp>, k: i64) -> Vec<RankedApp> {
    let k = usize::try_from(k).unwrap_or(0);
    ranked.into_iter().take(k).collect()
}
