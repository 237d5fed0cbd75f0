use crate::domain::{models::booth::Booth, ports::BoothRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresBoothRepo {
    pool: PgPool,
}

impl PostgresBoothRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoothRepository for PostgresBoothRepo {
    async fn list_by_fair(&self, fair_id: &str) -> Result<Vec<Booth>, AppError> {
        sqlx::query_as::<_, Booth>(
            "SELECT * FROM booths WHERE fair_id = $1 ORDER BY created_at ASC"
        )
            .bind(fair_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_fair_and_company(&self, fair_id: &str, company_id: &str) -> Result<Option<Booth>, AppError> {
        sqlx::query_as::<_, Booth>(
            "SELECT * FROM booths WHERE fair_id = $1 AND company_id = $2"
        )
            .bind(fair_id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
