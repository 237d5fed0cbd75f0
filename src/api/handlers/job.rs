use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CreateJobRequest, responses::JobsResponse};
use crate::api::extractors::{auth::AuthUser, maybe_auth::MaybeAuthUser};
use crate::domain::models::job::{JobApplication, JobPosting};
use crate::domain::services::visibility::{can_view_fair_content, Denial};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_job(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    let company_id = ident.company_id.clone()
        .filter(|_| ident.role.is_company_role())
        .ok_or(AppError::Forbidden("Caller is not linked to a company".into()))?;

    if state.fair_repo.find_by_id(&fair_id).await?.is_none() {
        return Err(AppError::NotFound("Fair not found".into()));
    }
    if state.enrollment_repo.find(&fair_id, &company_id).await?.is_none() {
        return Err(AppError::Forbidden("Company is not enrolled in this fair".into()));
    }

    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("Job title must not be empty".into()));
    }

    let job = JobPosting::new(fair_id.clone(), company_id, title, payload.description);
    let created = state.job_repo.create(&job).await?;

    info!("Job {} posted for fair {}", created.id, fair_id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(ident): MaybeAuthUser,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let fair = state.fair_repo.find_by_id(&fair_id).await?
        .ok_or(AppError::NotFound("Fair not found".into()))?;

    match can_view_fair_content(fair.is_live, ident.as_ref(), None) {
        Ok(()) => {
            let jobs = state.job_repo.list_by_fair(&fair_id).await?;
            Ok(Json(JobsResponse { jobs }))
        }
        Err(Denial::FairNotLive) => {
            let own_company = ident.as_ref().and_then(|i| i.company_id.as_deref());
            if let Some(company_id) = own_company {
                if can_view_fair_content(fair.is_live, ident.as_ref(), Some(company_id)).is_ok() {
                    let jobs = state.job_repo
                        .list_by_fair_and_company(&fair_id, company_id)
                        .await?;
                    return Ok(Json(JobsResponse { jobs }));
                }
            }
            Err(Denial::FairNotLive.into())
        }
        Err(denial) => Err(denial.into()),
    }
}

pub async fn apply_to_job(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    use crate::domain::models::identity::Role;
    if ident.role != Role::Student {
        return Err(AppError::Forbidden("Student role required".into()));
    }

    let job = state.job_repo.find_by_id(&job_id).await?
        .ok_or(AppError::NotFound("Job not found".into()))?;

    let fair = state.fair_repo.find_by_id(&job.fair_id).await?
        .ok_or(AppError::NotFound("Fair not found".into()))?;
    can_view_fair_content(fair.is_live, Some(&ident), None)
        .map_err(AppError::from)?;

    let application = JobApplication::new(&job, ident.user_id.clone());
    let created = state.job_repo.create_application(&application).await?;

    info!("Application {} submitted for job {}", created.id, job_id);
    Ok((StatusCode::CREATED, Json(created)))
}
