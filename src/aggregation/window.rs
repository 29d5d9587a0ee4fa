use crate::domain::error::AggregationError;
use std::fmt;
use std::str::FromStr;

/// Width of an error-rate bucket, always a positive number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowDuration(i64);

impl WindowDuration {
    pub fn from_seconds(seconds: i64) -> Option<Self> {
        (seconds > 0).then_some(Self(seconds))
    }

    /// Parses `"30s"`, `"5m"`, `"1h"` or a bare number of seconds.
    pub fn parse(window: &str) -> Result<Self, AggregationError> {
        let invalid = || AggregationError::InvalidWindow(window.to_string());

        let (digits, unit) = match window.char_indices().last() {
            None => return Err(invalid()),
            Some((idx, 's')) => (&window[..idx], 1),
            Some((idx, 'm')) => (&window[..idx], 60),
            Some((idx, 'h')) => (&window[..idx], 3600),
            Some(_) => (window, 1),
        };
        if digits.is_empty() {
            return Err(invalid());
        }

        let seconds = digits
            .parse::<i64>()
            .ok()
            .and_then(|n| n.checked_mul(unit))
            .ok_or_else(invalid)?;

        Self::from_seconds(seconds).ok_or_else(invalid)
    }

    pub fn seconds(self) -> i64 {
        self.0
    }
}

impl FromStr for WindowDuration {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WindowDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
