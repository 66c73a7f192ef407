//! System repository - readiness ping and store status

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use super::DbError;

/// Store-reported time and version
#[derive(Debug, Clone)]
pub struct StoreStatus {
    pub time: DateTime<Utc>,
    pub version: String,
}

/// System repository
pub struct SystemRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SystemRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Trivial no-op query; used by the readiness probe.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(self.pool).await?;
        Ok(())
    }

    /// Current store time and version string.
    pub async fn status(&self) -> Result<StoreStatus, DbError> {
        let row = sqlx::query("SELECT NOW() AS time, version() AS version")
            .fetch_one(self.pool)
            .await?;

        Ok(StoreStatus {
            time: row.get("time"),
            version: row.get("version"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_and_status() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("pool creation failed");

        let repo = SystemRepo::new(&pool);
        repo.ping().await.expect("ping failed");

        let status = repo.status().await.expect("status failed");
        assert!(status.version.contains("PostgreSQL"));
    }
}
