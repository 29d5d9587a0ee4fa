use serde::Serialize;

/// Failure of a single aggregation request.
///
/// Everything except `Storage` is a request-validation failure and is
/// reported back to the caller as a client error.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("{} parameter is required", capitalized(.0))]
    MissingParameter(&'static str),
    #[error("{} parameter is too long", capitalized(.0))]
    ParameterTooLong(&'static str),
    #[error("Invalid {name} parameter: {value}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("Invalid window format: {0}. Expected format: number followed by s/m/h (e.g., 5m, 60s, 1h)")]
    InvalidWindow(String),
    #[error("Invalid {name} instant: {value}")]
    InvalidInstant { name: &'static str, value: String },
    #[error("Error processing request: {0}")]
    Storage(#[source] anyhow::Error),
}

impl AggregationError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, AggregationError::Storage(_))
    }

    pub fn code(&self) -> &'static str {
        match self {
            AggregationError::MissingParameter(_) => "MISSING_PARAMETER",
            AggregationError::ParameterTooLong(_) => "PARAMETER_TOO_LONG",
            AggregationError::InvalidParameter { .. } => "INVALID_PARAMETER",
            AggregationError::InvalidWindow(_) => "INVALID_WINDOW",
            AggregationError::InvalidInstant { .. } => "INVALID_INSTANT",
            AggregationError::Storage(_) => "PROCESSING_ERROR",
        }
    }

    pub fn to_envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorPayload {
                code: self.code().to_string(),
                message: self.to_string(),
                details: match self {
                    AggregationError::InvalidWindow(input) => Some(input.clone()),
                    AggregationError::InvalidInstant { value, .. }
                    | AggregationError::InvalidParameter { value, .. } => Some(value.clone()),
                    _ => None,
                },
            },
        }
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorPayload,
}

#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}
