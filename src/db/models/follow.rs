use serde::{Deserialize, Serialize};

/// Directed follow edge: `follower_id` sees `followed_id`'s recipes.
/// Nothing deduplicates edges or blocks self-follows.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Follow {
    pub follower_id: String,
    pub followed_id: String,
}
