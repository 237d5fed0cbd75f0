use crate::domain::{
    models::{booth::Booth, enrollment::Enrollment},
    ports::EnrollmentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEnrollmentRepo {
    pool: SqlitePool,
}

impl SqliteEnrollmentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for SqliteEnrollmentRepo {
    async fn create_with_booth(&self, enrollment: &Enrollment, booth: &Booth) -> Result<Enrollment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("INSERT INTO booths (id, fair_id, company_id, created_at) VALUES (?, ?, ?, ?)")
            .bind(&booth.id)
            .bind(&booth.fair_id)
            .bind(&booth.company_id)
            .bind(booth.created_at)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Enrollment>(
            "INSERT INTO enrollments (fair_id, company_id, booth_id, method, enrolled_at) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&enrollment.fair_id)
            .bind(&enrollment.company_id)
            .bind(&enrollment.booth_id)
            .bind(&enrollment.method)
            .bind(enrollment.enrolled_at)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find(&self, fair_id: &str, company_id: &str) -> Result<Option<Enrollment>, AppError> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE fair_id = ? AND company_id = ?"
        )
            .bind(fair_id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_fair(&self, fair_id: &str) -> Result<Vec<Enrollment>, AppError> {
        sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE fair_id = ? ORDER BY enrolled_at ASC"
        )
            .bind(fair_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn remove_cascade(&self, enrollment: &Enrollment) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM enrollments WHERE fair_id = ? AND company_id = ?")
            .bind(&enrollment.fair_id)
            .bind(&enrollment.company_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Enrollment not found".into()));
        }

        sqlx::query("DELETE FROM booths WHERE id = ?")
            .bind(&enrollment.booth_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM applications WHERE fair_id = ? AND company_id = ?")
            .bind(&enrollment.fair_id)
            .bind(&enrollment.company_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM jobs WHERE fair_id = ? AND company_id = ?")
            .bind(&enrollment.fair_id)
            .bind(&enrollment.company_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)
    }
}
