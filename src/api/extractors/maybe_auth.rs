use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts, StatusCode},
};
use crate::state::AppState;
use crate::domain::models::identity::{Claims, Identity};
use std::sync::Arc;
use jsonwebtoken::{decode, DecodingKey, Validation, Algorithm};
use tracing::debug;

/// Identity extraction that degrades to anonymous instead of rejecting. The
/// visibility gate distinguishes unauthenticated callers, so gated endpoints
/// must see `None` rather than a 401 from the extractor.
pub struct MaybeAuthUser(pub Option<Identity>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let bearer = match parts.headers.get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(token) => token,
            None => return Ok(MaybeAuthUser(None)),
        };

        let decoding_key = match DecodingKey::from_ed_pem(app_state.config.jwt_public_key.as_bytes()) {
            Ok(key) => key,
            Err(_) => {
                debug!("MaybeAuth: Invalid public key config");
                return Ok(MaybeAuthUser(None));
            }
        };

        let mut validation = Validation::new(Algorithm::EdDSA);
        validation.set_audience(&[app_state.config.auth_audience.as_str()]);

        let token_data = match decode::<Claims>(bearer, &decoding_key, &validation) {
            Ok(data) => data,
            Err(_) => {
                // Expired or malformed token, treat as guest
                return Ok(MaybeAuthUser(None));
            }
        };

        Ok(MaybeAuthUser(Some(Identity {
            user_id: token_data.claims.sub,
            role: token_data.claims.role,
            company_id: token_data.claims.company_id,
        })))
    }
}
