use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreateFairRequest, UpdateFairRequest},
    responses::{FairCreatedResponse, FairStatusResponse, FairsResponse, InviteCodeResponse},
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::fair_lifecycle::{FairPatch, NewFairParams};
use crate::error::AppError;
use std::sync::Arc;

pub async fn create_fair(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Json(payload): Json<CreateFairRequest>,
) -> Result<impl IntoResponse, AppError> {
    let fair = state.lifecycle.create_fair(&ident, NewFairParams {
        name: payload.name,
        description: payload.description,
        start_time: payload.start_time,
        end_time: payload.end_time,
    }).await?;

    let invite_code = fair.invite_code.clone();
    Ok((StatusCode::CREATED, Json(FairCreatedResponse { fair, invite_code })))
}

pub async fn list_fairs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let fairs = state.fair_repo.list().await?;
    Ok(Json(FairsResponse { fairs }))
}

pub async fn get_fair(
    State(state): State<Arc<AppState>>,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let fair = state.fair_repo.find_by_id(&fair_id).await?
        .ok_or(AppError::NotFound("Fair not found".into()))?;
    Ok(Json(fair))
}

pub async fn get_fair_status(
    State(state): State<Arc<AppState>>,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let fair = state.fair_repo.find_by_id(&fair_id).await?
        .ok_or(AppError::NotFound("Fair not found".into()))?;
    Ok(Json(FairStatusResponse { is_live: fair.is_live }))
}

pub async fn update_fair(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
    Json(payload): Json<UpdateFairRequest>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.lifecycle.edit_fair(&ident, &fair_id, FairPatch {
        name: payload.name,
        description: payload.description,
        start_time: payload.start_time,
        end_time: payload.end_time,
    }).await?;

    Ok(Json(updated))
}

pub async fn toggle_status(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    // The updated fair is the response; clients are not expected to refetch.
    let fair = state.lifecycle.toggle_live(&ident, &fair_id).await?;
    Ok(Json(fair))
}

pub async fn refresh_invite_code(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invite_code = state.lifecycle.rotate_invite_code(&ident, &fair_id).await?;
    Ok(Json(InviteCodeResponse { invite_code }))
}
