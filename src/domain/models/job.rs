use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub fair_id: String,
    pub company_id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn new(fair_id: String, company_id: String, title: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fair_id,
            company_id,
            title,
            description,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: String,
    pub job_id: String,
    pub fair_id: String,
    pub company_id: String,
    pub student_id: String,
    pub status: String, // OPEN, WITHDRAWN
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    pub fn new(job: &JobPosting, student_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            job_id: job.id.clone(),
            fair_id: job.fair_id.clone(),
            company_id: job.company_id.clone(),
            student_id,
            status: "OPEN".to_string(),
            created_at: Utc::now(),
        }
    }
}
