use std::sync::Arc;
use crate::domain::{
    models::{
        booth::Booth,
        enrollment::{Enrollment, EnrollmentMethod},
        fair::Fair,
        identity::Identity,
    },
    ports::{CompanyRepository, EnrollmentRepository, FairRepository, JobRepository},
    services::invite_code::InviteCodeAuthority,
};
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use tracing::info;

pub struct NewFairParams {
    pub name: String,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Default)]
pub struct FairPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// The two enrollment entry paths as a tagged command. Both dispatch into the
/// same invariant checks; only authorization and code validation differ.
pub enum EnrollCommand {
    Admin { company_id: String },
    Invite { code: String },
}

/// Orchestrates the fair lifecycle: creation, schedule edits, the live flag,
/// invite-code rotation, and enrollment entry/exit with its cascade. All
/// mutation of fairs and enrollments goes through here.
pub struct FairLifecycleService {
    fairs: Arc<dyn FairRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
    companies: Arc<dyn CompanyRepository>,
    jobs: Arc<dyn JobRepository>,
    invite_codes: InviteCodeAuthority,
    leave_lock: Duration,
}

impl FairLifecycleService {
    pub fn new(
        fairs: Arc<dyn FairRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        companies: Arc<dyn CompanyRepository>,
        jobs: Arc<dyn JobRepository>,
        leave_lock_hours: i64,
    ) -> Self {
        let invite_codes = InviteCodeAuthority::new(fairs.clone());
        Self {
            fairs,
            enrollments,
            companies,
            jobs,
            invite_codes,
            leave_lock: Duration::hours(leave_lock_hours),
        }
    }

    pub async fn create_fair(&self, ident: &Identity, params: NewFairParams) -> Result<Fair, AppError> {
        require_admin(ident)?;

        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Fair name must not be empty".into()));
        }
        validate_schedule(params.start_time, params.end_time)?;

        let code = self.invite_codes.issue().await?;
        let fair = Fair::new(name, params.description, params.start_time, params.end_time, code);
        let created = self.fairs.create(&fair).await?;

        info!("Fair created: {}", created.id);
        Ok(created)
    }

    pub async fn edit_fair(&self, ident: &Identity, fair_id: &str, patch: FairPatch) -> Result<Fair, AppError> {
        require_admin(ident)?;

        let mut fair = self.fairs.find_by_id(fair_id).await?
            .ok_or(AppError::NotFound("Fair not found".into()))?;

        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::Validation("Fair name must not be empty".into()));
            }
            fair.name = name;
        }
        if let Some(description) = patch.description {
            fair.description = Some(description);
        }
        if let Some(start) = patch.start_time {
            fair.start_time = Some(start);
        }
        if let Some(end) = patch.end_time {
            fair.end_time = Some(end);
        }

        // The schedule invariant holds over the merged result, not just the
        // fields touched by this patch.
        validate_schedule(fair.start_time, fair.end_time)?;

        let updated = self.fairs.update(&fair).await?;
        info!("Fair updated: {}", fair_id);
        Ok(updated)
    }

    /// Flips `is_live`. The flag is an explicit administrator override, never
    /// derived from the schedule, and this is its only mutator.
    pub async fn toggle_live(&self, ident: &Identity, fair_id: &str) -> Result<Fair, AppError> {
        require_admin(ident)?;

        let fair = self.fairs.toggle_live(fair_id).await?
            .ok_or(AppError::NotFound("Fair not found".into()))?;

        info!("Fair {} is now {}", fair_id, if fair.is_live { "live" } else { "offline" });
        Ok(fair)
    }

    pub async fn rotate_invite_code(&self, ident: &Identity, fair_id: &str) -> Result<String, AppError> {
        require_admin(ident)?;

        if self.fairs.find_by_id(fair_id).await?.is_none() {
            return Err(AppError::NotFound("Fair not found".into()));
        }

        let code = self.invite_codes.issue().await?;
        self.fairs.update_invite_code(fair_id, &code).await?
            .ok_or(AppError::NotFound("Fair not found".into()))?;

        info!("Invite code rotated for fair {}", fair_id);
        Ok(code)
    }

    pub async fn enroll_company(
        &self,
        ident: &Identity,
        fair_id: &str,
        command: EnrollCommand,
    ) -> Result<Enrollment, AppError> {
        let (company_id, method) = match command {
            EnrollCommand::Admin { company_id } => {
                require_admin(ident)?;
                if self.fairs.find_by_id(fair_id).await?.is_none() {
                    return Err(AppError::NotFound("Fair not found".into()));
                }
                if self.companies.find_by_id(&company_id).await?.is_none() {
                    return Err(AppError::NotFound("Company not found".into()));
                }
                (company_id, EnrollmentMethod::Admin)
            }
            EnrollCommand::Invite { code } => {
                let company_id = ident.company_id.clone()
                    .filter(|_| ident.role.is_company_role())
                    .ok_or(AppError::Forbidden("Caller is not linked to a company".into()))?;

                // Unknown fair and wrong code answer identically.
                let fair = self.fairs.find_by_id(fair_id).await?
                    .ok_or(AppError::InvalidInviteCode)?;
                if !InviteCodeAuthority::validate(&fair.invite_code, &code) {
                    return Err(AppError::InvalidInviteCode);
                }
                (company_id, EnrollmentMethod::Invite)
            }
        };

        if self.enrollments.find(fair_id, &company_id).await?.is_some() {
            return Err(AppError::Conflict("Company is already enrolled in this fair".into()));
        }

        let booth = Booth::new(fair_id.to_string(), company_id.clone());
        let enrollment = Enrollment::new(
            fair_id.to_string(),
            company_id.clone(),
            booth.id.clone(),
            method,
        );

        // Booth and enrollment commit together; a concurrent duplicate loses
        // on the primary key and rolls the booth back with it.
        let created = self.enrollments.create_with_booth(&enrollment, &booth).await?;

        info!("Company {} enrolled in fair {} ({})", company_id, fair_id, created.method);
        Ok(created)
    }

    pub async fn remove_company(&self, ident: &Identity, fair_id: &str, company_id: &str) -> Result<(), AppError> {
        require_admin(ident)?;

        let enrollment = self.enrollments.find(fair_id, company_id).await?
            .ok_or(AppError::NotFound("Enrollment not found".into()))?;

        self.enrollments.remove_cascade(&enrollment).await?;
        info!("Company {} removed from fair {}", company_id, fair_id);
        Ok(())
    }

    pub async fn leave_fair(&self, ident: &Identity, fair_id: &str) -> Result<(), AppError> {
        let company_id = ident.company_id.clone()
            .filter(|_| ident.role.is_company_role())
            .ok_or(AppError::Forbidden("Caller is not linked to a company".into()))?;

        let fair = self.fairs.find_by_id(fair_id).await?
            .ok_or(AppError::NotFound("Fair not found".into()))?;
        let enrollment = self.enrollments.find(fair_id, &company_id).await?
            .ok_or(AppError::NotFound("Enrollment not found".into()))?;

        if fair.is_live {
            let since = Utc::now() - self.leave_lock;
            let recent = self.jobs
                .count_open_applications_since(fair_id, &company_id, since)
                .await?;
            if recent > 0 {
                return Err(AppError::Conflict(
                    "Cannot leave a live fair with recent open applications".into(),
                ));
            }
        }

        self.enrollments.remove_cascade(&enrollment).await?;
        info!("Company {} left fair {}", company_id, fair_id);
        Ok(())
    }

    pub async fn list_enrollments(&self, ident: &Identity, fair_id: &str) -> Result<Vec<Enrollment>, AppError> {
        require_admin(ident)?;

        if self.fairs.find_by_id(fair_id).await?.is_none() {
            return Err(AppError::NotFound("Fair not found".into()));
        }
        self.enrollments.list_by_fair(fair_id).await
    }
}

fn require_admin(ident: &Identity) -> Result<(), AppError> {
    use crate::domain::models::identity::Role;
    if ident.role == Role::Administrator {
        Ok(())
    } else {
        Err(AppError::Forbidden("Administrator role required".into()))
    }
}

fn validate_schedule(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(AppError::Validation("startTime must not be after endTime".into()));
        }
    }
    Ok(())
}
