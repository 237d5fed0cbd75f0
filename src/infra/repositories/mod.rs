pub mod postgres_booth_repo;
pub mod postgres_company_repo;
pub mod postgres_enrollment_repo;
pub mod postgres_fair_repo;
pub mod postgres_job_repo;
pub mod sqlite_booth_repo;
pub mod sqlite_company_repo;
pub mod sqlite_enrollment_repo;
pub mod sqlite_fair_repo;
pub mod sqlite_job_repo;
