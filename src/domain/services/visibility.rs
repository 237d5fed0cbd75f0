use crate::domain::models::identity::{Identity, Role};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    FairNotLive,
    Unauthenticated,
}

impl From<Denial> for AppError {
    fn from(denial: Denial) -> Self {
        match denial {
            Denial::FairNotLive => AppError::Forbidden("FairNotLive".to_string()),
            Denial::Unauthenticated => AppError::Unauthorized,
        }
    }
}

/// The single enforcement point for booth/job visibility. Every listing and
/// detail endpoint consults this before returning fair-scoped content.
///
/// Policy, first match wins:
/// - administrators see everything
/// - company owners/representatives always see their own company
/// - everyone else (including company users looking at other companies)
///   requires the fair to be live
/// - unauthenticated requests are rejected outright
pub fn can_view_fair_content(
    fair_is_live: bool,
    requester: Option<&Identity>,
    target_company_id: Option<&str>,
) -> Result<(), Denial> {
    let Some(identity) = requester else {
        return Err(Denial::Unauthenticated);
    };

    match identity.role {
        Role::Administrator => Ok(()),
        Role::CompanyOwner | Role::Representative => {
            let own_company = target_company_id.is_some_and(|target| identity.owns_company(target));
            if own_company || fair_is_live {
                Ok(())
            } else {
                Err(Denial::FairNotLive)
            }
        }
        Role::Student => {
            if fair_is_live {
                Ok(())
            } else {
                Err(Denial::FairNotLive)
            }
        }
    }
}
