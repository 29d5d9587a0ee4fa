use crate::domain::error::AggregationError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

pub const DEFAULT_WINDOW: &str = "5m";

#[derive(Debug, Deserialize)]
pub struct TopAppsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub k: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorRateQuery {
    pub app: Option<String>,
    pub window: Option<String>,
}

pub async fn top_apps(
    State(state): State<AppState>,
    Query(query): Query<TopAppsQuery>,
) -> impl IntoResponse {
    match state
        .aggregation_service
        .top_apps(
            query.from.as_deref(),
            query.to.as_deref(),
            query.k.as_deref(),
        )
        .await
    {
        Ok(items) => (axum::http::StatusCode::OK, Json(items)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn error_rate(
    State(state): State<AppState>,
    Query(query): Query<ErrorRateQuery>,
) -> impl IntoResponse {
    match state
        .aggregation_service
        .error_rate(
            query.app.as_deref(),
            query
                .window
                .as_deref()
                .filter(|w| !w.is_empty())
                .unwrap_or(DEFAULT_WINDOW),
        )
        .await
    {
        Ok(buckets) => (axum::http::StatusCode::OK, Json(buckets)).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: AggregationError) -> Response {
    let status = if e.is_validation() {
        axum::http::StatusCode::BAD_REQUEST
    } else {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(e.to_envelope())).into_response()
}
