use crate::domain::{
    models::job::{JobApplication, JobPosting},
    ports::JobRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

pub struct PostgresJobRepo {
    pool: PgPool,
}

impl PostgresJobRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepo {
    async fn create(&self, job: &JobPosting) -> Result<JobPosting, AppError> {
        sqlx::query_as::<_, JobPosting>(
            "INSERT INTO jobs (id, fair_id, company_id, title, description, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
        )
            .bind(&job.id)
            .bind(&job.fair_id)
            .bind(&job.company_id)
            .bind(&job.title)
            .bind(&job.description)
            .bind(job.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<JobPosting>, AppError> {
        sqlx::query_as::<_, JobPosting>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_fair(&self, fair_id: &str) -> Result<Vec<JobPosting>, AppError> {
        sqlx::query_as::<_, JobPosting>(
            "SELECT * FROM jobs WHERE fair_id = $1 ORDER BY created_at ASC"
        )
            .bind(fair_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_fair_and_company(&self, fair_id: &str, company_id: &str) -> Result<Vec<JobPosting>, AppError> {
        sqlx::query_as::<_, JobPosting>(
            "SELECT * FROM jobs WHERE fair_id = $1 AND company_id = $2 ORDER BY created_at ASC"
        )
            .bind(fair_id)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_application(&self, application: &JobApplication) -> Result<JobApplication, AppError> {
        sqlx::query_as::<_, JobApplication>(
            "INSERT INTO applications (id, job_id, fair_id, company_id, student_id, status, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *"
        )
            .bind(&application.id)
            .bind(&application.job_id)
            .bind(&application.fair_id)
            .bind(&application.company_id)
            .bind(&application.student_id)
            .bind(&application.status)
            .bind(application.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_open_applications_since(
        &self,
        fair_id: &str,
        company_id: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let result = sqlx::query(
            "SELECT COUNT(*) as count FROM applications WHERE fair_id = $1 AND company_id = $2 AND status = 'OPEN' AND created_at > $3"
        )
            .bind(fair_id)
            .bind(company_id)
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
