use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateCompanyRequest;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::{company::Company, identity::Role};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_company(
    State(state): State<Arc<AppState>>,
    AuthUser(ident): AuthUser,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if ident.role != Role::Administrator {
        return Err(AppError::Forbidden("Administrator role required".into()));
    }

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Company name must not be empty".into()));
    }

    let company = Company::new(name, payload.website);
    let created = state.company_repo.create(&company).await?;

    info!("Company registered: {}", created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_company(
    State(state): State<Arc<AppState>>,
    _ident: AuthUser,
    Path(company_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let company = state.company_repo.find_by_id(&company_id).await?
        .ok_or(AppError::NotFound("Company not found".into()))?;
    Ok(Json(company))
}
