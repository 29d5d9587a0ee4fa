use log_aggregations::config::{AppConfig, StoreBackend};
use log_aggregations::service::aggregation_service::AggregationService;
use log_aggregations::store::memory::MemoryLogStore;
use log_aggregations::store::postgres::PgLogStore;
use log_aggregations::store::LogStore;
use log_aggregations::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let store: Arc<dyn LogStore> = match cfg.store_backend {
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(cfg.db_max_connections)
                .connect(&cfg.database_url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            Arc::new(PgLogStore { pool })
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory log store; records are not persisted");
            Arc::new(MemoryLogStore::default())
        }
    };

    let state = AppState {
        aggregation_service: AggregationService::new(store),
    };
    let app = log_aggregations::http::router::build(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
