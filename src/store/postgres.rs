use crate::domain::aggregation::RankedApp;
use crate::domain::log_record::{LogRecord, ERROR_LEVELS};
use crate::store::LogStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PgLogStore {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl LogStore for PgLogStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn find_top_apps_by_count(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<RankedApp>> {
        let rows = sqlx::query(
            r#"
            SELECT app, COUNT(*) AS count
            FROM log_records
            WHERE ($1::timestamptz IS NULL OR ts >= $1)
              AND ($2::timestamptz IS NULL OR ts <= $2)
            GROUP BY app
            ORDER BY count DESC, app ASC
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| RankedApp {
                app: r.get("app"),
                count: r.get("count"),
            })
            .collect())
    }

    async fn find_error_logs_by_app(&self, app: &str) -> Result<Vec<LogRecord>> {
        let levels: Vec<String> = ERROR_LEVELS.iter().map(|l| l.to_string()).collect();
        let rows = sqlx::query(
            "SELECT id, app, level, ts, message FROM log_records WHERE app = $1 AND upper(level) = ANY($2)",
        )
        .bind(app)
        .bind(levels)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LogRecord {
                id: r.get("id"),
                app: r.get("app"),
                level: r.get("level"),
                ts: r.get("ts"),
                message: r.get("message"),
            })
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
