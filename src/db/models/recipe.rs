use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
}

/// One feed row: a recipe joined with its author.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub user_id: String,
    pub user_name: String,
}

impl Recipe {
    pub fn new(title: String, description: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            created_at: Utc::now(),
            user_id,
        }
    }
}
