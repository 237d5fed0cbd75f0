use crate::domain::{models::fair::Fair, ports::FairRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFairRepo {
    pool: SqlitePool,
}

impl SqliteFairRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FairRepository for SqliteFairRepo {
    async fn create(&self, fair: &Fair) -> Result<Fair, AppError> {
        sqlx::query_as::<_, Fair>(
            "INSERT INTO fairs (id, name, description, start_time, end_time, is_live, invite_code, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"
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
        sqlx::query_as::<_, Fair>("SELECT * FROM fairs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_invite_code(&self, code: &str) -> Result<Option<Fair>, AppError> {
        sqlx::query_as::<_, Fair>("SELECT * FROM fairs WHERE invite_code = ?")
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
            "UPDATE fairs SET name=?, description=?, start_time=?, end_time=? WHERE id=? RETURNING *"
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
            "UPDATE fairs SET is_live = NOT is_live WHERE id = ? RETURNING *"
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_invite_code(&self, id: &str, code: &str) -> Result<Option<Fair>, AppError> {
        sqlx::query_as::<_, Fair>(
            "UPDATE fairs SET invite_code = ? WHERE id = ? RETURNING *"
        )
            .bind(code)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
