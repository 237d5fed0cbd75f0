use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    pub fn new(name: String, website: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            website,
            created_at: Utc::now(),
        }
    }
}
