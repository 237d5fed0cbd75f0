use std::sync::Arc;
use crate::domain::ports::{
    BoothRepository, CompanyRepository, EnrollmentRepository, FairRepository, JobRepository,
};
use crate::domain::services::fair_lifecycle::FairLifecycleService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub fair_repo: Arc<dyn FairRepository>,
    pub company_repo: Arc<dyn CompanyRepository>,
    pub enrollment_repo: Arc<dyn EnrollmentRepository>,
    pub booth_repo: Arc<dyn BoothRepository>,
    pub job_repo: Arc<dyn JobRepository>,
    pub lifecycle: Arc<FairLifecycleService>,
}
