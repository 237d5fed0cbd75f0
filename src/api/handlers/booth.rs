use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::BoothsResponse;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::domain::services::visibility::{can_view_fair_content, Denial};
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_booths(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(ident): MaybeAuthUser,
    Path(fair_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let fair = state.fair_repo.find_by_id(&fair_id).await?
        .ok_or(AppError::NotFound("Fair not found".into()))?;

    match can_view_fair_content(fair.is_live, ident.as_ref(), None) {
        Ok(()) => {
            let booths = state.booth_repo.list_by_fair(&fair_id).await?;
            Ok(Json(BoothsResponse { booths }))
        }
        // A company caller on a non-live fair still sees its own booth (the
        // own-company policy row, applied per item).
        Err(Denial::FairNotLive) => {
            let own_company = ident.as_ref().and_then(|i| i.company_id.as_deref());
            if let Some(company_id) = own_company {
                if can_view_fair_content(fair.is_live, ident.as_ref(), Some(company_id)).is_ok() {
                    let booths = state.booth_repo
                        .find_by_fair_and_company(&fair_id, company_id)
                        .await?
                        .into_iter()
                        .collect();
                    return Ok(Json(BoothsResponse { booths }));
                }
            }
            Err(Denial::FairNotLive.into())
        }
        Err(denial) => Err(denial.into()),
    }
}
