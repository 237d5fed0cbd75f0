use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::EnrollRequest,
    responses::{EnrollmentCreatedResponse, EnrollmentsResponse},
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::fair_lifecycle::EnrollCommand;
use crate::error::AppError;
use std::sync::Arc;

pub async fn enroll(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
    Json(payload): Json<EnrollRequest>,
) -> Result<impl IntoResponse, AppError> {
    let command = match (payload.company_id, payload.invite_code) {
        (Some(company_id), None) => EnrollCommand::Admin { company_id },
        (None, Some(code)) => EnrollCommand::Invite { code },
        _ => {
            return Err(AppError::Validation(
                "Provide either companyId or inviteCode".into(),
            ))
        }
    };

    let enrollment = state.lifecycle.enroll_company(&ident, &fair_id, command).await?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentCreatedResponse {
            fair_id: enrollment.fair_id,
            company_id: enrollment.company_id,
            booth_id: enrollment.booth_id,
        }),
    ))
}

pub async fn list_enrollments(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let enrollments = state.lifecycle.list_enrollments(&ident, &fair_id).await?;
    Ok(Json(EnrollmentsResponse { enrollments }))
}

pub async fn remove_company(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path((fair_id, company_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.lifecycle.remove_company(&ident, &fair_id, &company_id).await?;
    Ok(Json(serde_json::json!({"status": "removed"})))
}

pub async fn leave_fair(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.lifecycle.leave_fair(&ident, &fair_id).await?;
    Ok(Json(serde_json::json!({"status": "left"})))
}
