use crate::domain::models::{booth::Booth, enrollment::Enrollment, fair::Fair, job::JobPosting};
use serde::Serialize;

/// Creation is the one place the invite code travels with the fair; public
/// fair payloads never carry it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairCreatedResponse {
    #[serde(flatten)]
    pub fair: Fair,
    pub invite_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairsResponse {
    pub fairs: Vec<Fair>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairStatusResponse {
    pub is_live: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteCodeResponse {
    pub invite_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentsResponse {
    pub enrollments: Vec<Enrollment>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentCreatedResponse {
    pub fair_id: String,
    pub company_id: String,
    pub booth_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoothsResponse {
    pub booths: Vec<Booth>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsResponse {
    pub jobs: Vec<JobPosting>,
}
