use crate::domain::{models::fair::Fair, ports::FairRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresFairRepo {
    pool: PgPool,
}

impl PostgresFairRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FairRepository for PostgresFairRepo {
    async fn create(&self, fair: &Fair) -> Result<Fair, AppError> {
        sqlx::query_as::<_, Fair>(
            "INSERT INTO fairs (id, name, description, start_time, end_time, is_live, invite_code, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *"
        )
            .bind(&fair.id)
            .bind(&fair.name)
            .bind(&fair.description)
            .bind(fair.start_time)
            .bind(fair.end_time)
            .bind(fair.is_live)
            .bind(&fair.invite_code)
            .bind(fair.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Fair>, AppError> {
        sqlx::query_as::<_, Fair>("SELECT * FROM fairs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_invite_code(&self, code: &str) -> Result<Option<Fair>, AppError> {
        sqlx::query_as::<_, Fair>("SELECT * FROM fairs WHERE invite_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Fair>, AppError> {
        sqlx::query_as::<_, Fair>("SELECT * FROM fairs ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, fair: &Fair) -> Result<Fair, AppError> {
        sqlx::query_as::<_, Fair>(
            "UPDATE fairs SET name=$1, description=$2, start_time=$3, end_time=$4 WHERE id=$5 RETURNING *"
        )
            .bind(&fair.name)
            .bind(&fair.description)
            .bind(fair.start_time)
            .bind(fair.end_time)
            .bind(&fair.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn toggle_live(&self, id: &str) -> Result<Option<Fair>, AppError> {
        sqlx::query_as::<_, Fair>(
            "UPDATE fairs SET is_live = NOT is_live WHERE id = $1 RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_invite_code(&self, id: &str, code: &str) -> Result<Option<Fair>, AppError> {
        sqlx::query_as::<_, Fair>(
            "UPDATE fairs SET invite_code = $1 WHERE id = $2 RETURNING *"
        )
            .bind(code)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
