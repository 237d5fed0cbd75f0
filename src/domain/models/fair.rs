use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Fair {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_live: bool,
    #[serde(skip_serializing)]
    pub invite_code: String,
    pub created_at: DateTime<Utc>,
}

impl Fair {
    pub fn new(
        name: String,
        description: Option<String>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        invite_code: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            start_time,
            end_time,
            is_live: false,
            invite_code,
            created_at: Utc::now(),
        }
    }
}
