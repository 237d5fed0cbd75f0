use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Administrator,
    CompanyOwner,
    Representative,
    Student,
}

impl Role {
    pub fn is_company_role(&self) -> bool {
        matches!(self, Role::CompanyOwner | Role::Representative)
    }
}

/// Verified caller identity, decoded once from the bearer token and passed by
/// value into every lifecycle operation. The core never reads ambient auth
/// state.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
    pub company_id: Option<String>,
}

impl Identity {
    pub fn owns_company(&self, company_id: &str) -> bool {
        self.role.is_company_role() && self.company_id.as_deref() == Some(company_id)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,

    #[serde(rename = "https://careerfair.app/claims/role")]
    pub role: Role,

    #[serde(rename = "https://careerfair.app/claims/company_id")]
    pub company_id: Option<String>,
}
