use crate::domain::models::{
    fair::Fair, company::Company, booth::Booth, enrollment::Enrollment,
    job::{JobPosting, JobApplication}
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait FairRepository: Send + Sync {
    async fn create(&self, fair: &Fair) -> Result<Fair, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Fair>, AppError>;
    async fn find_by_invite_code(&self, code: &str) -> Result<Option<Fair>, AppError>;
    async fn list(&self) -> Result<Vec<Fair>, AppError>;
    async fn update(&self, fair: &Fair) -> Result<Fair, AppError>;
    /// Atomic single-statement flip of `is_live`. Concurrent calls serialize
    /// at the store; no read-modify-write from the caller.
    async fn toggle_live(&self, id: &str) -> Result<Option<Fair>, AppError>;
    /// Atomic replacement of the invite code. Once committed the previous
    /// code can no longer resolve.
    async fn update_invite_code(&self, id: &str, code: &str) -> Result<Option<Fair>, AppError>;
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: &Company) -> Result<Company, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Company>, AppError>;
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Inserts the booth and the enrollment row in one transaction. The
    /// `(fair_id, company_id)` primary key resolves concurrent duplicate
    /// enrollments; the loser surfaces as a conflict.
    async fn create_with_booth(&self, enrollment: &Enrollment, booth: &Booth) -> Result<Enrollment, AppError>;
    async fn find(&self, fair_id: &str, company_id: &str) -> Result<Option<Enrollment>, AppError>;
    async fn list_by_fair(&self, fair_id: &str) -> Result<Vec<Enrollment>, AppError>;
    /// Deletes the enrollment, its booth, and the company's job postings
    /// (with their applications) scoped to the fair, all-or-nothing.
    async fn remove_cascade(&self, enrollment: &Enrollment) -> Result<(), AppError>;
}

#[async_trait]
pub trait BoothRepository: Send + Sync {
    async fn list_by_fair(&self, fair_id: &str) -> Result<Vec<Booth>, AppError>;
    async fn find_by_fair_and_company(&self, fair_id: &str, company_id: &str) -> Result<Option<Booth>, AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &JobPosting) -> Result<JobPosting, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<JobPosting>, AppError>;
    async fn list_by_fair(&self, fair_id: &str) -> Result<Vec<JobPosting>, AppError>;
    async fn list_by_fair_and_company(&self, fair_id: &str, company_id: &str) -> Result<Vec<JobPosting>, AppError>;
    async fn create_application(&self, application: &JobApplication) -> Result<JobApplication, AppError>;
    async fn count_open_applications_since(
        &self,
        fair_id: &str,
        company_id: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError>;
}
