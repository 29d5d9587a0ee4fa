use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ERROR_LEVELS: [&str; 2] = ["ERROR", "FATAL"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: Uuid,
    pub app: String,
    pub level: String,
    pub ts: Option<DateTime<Utc>>,
    pub message: String,
}

pub fn is_error_level(level: &str) -> bool {
    ERROR_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level))
}
