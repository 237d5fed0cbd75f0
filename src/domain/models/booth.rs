use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A company's presence within one fair. Owned by the enrollment that created
/// it; removed by the same cascade.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booth {
    pub id: String,
    pub fair_id: String,
    pub company_id: String,
    pub created_at: DateTime<Utc>,
}

impl Booth {
    pub fn new(fair_id: String, company_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            fair_id,
            company_id,
            created_at: Utc::now(),
        }
    }
}
