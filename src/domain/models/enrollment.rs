use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// How a company entered the fair. The two entry paths converge on one
/// invariant-checking core in the lifecycle service; only the tag differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentMethod {
    Admin,
    Invite,
}

impl EnrollmentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentMethod::Admin => "ADMIN",
            EnrollmentMethod::Invite => "INVITE",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub fair_id: String,
    pub company_id: String,
    pub booth_id: String,
    pub method: String, // ADMIN, INVITE
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(fair_id: String, company_id: String, booth_id: String, method: EnrollmentMethod) -> Self {
        Self {
            fair_id,
            company_id,
            booth_id,
            method: method.as_str().to_string(),
            enrolled_at: Utc::now(),
        }
    }
}
