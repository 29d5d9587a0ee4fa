use crate::http::handlers::{aggregations, ops};
use crate::AppState;
use axum::routing::get;
use axum::Router;

pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .route("/aggregations/top-apps", get(aggregations::top_apps))
        .route("/aggregations/error-rate", get(aggregations::error_rate))
        .with_state(state)
}
