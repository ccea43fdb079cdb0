use crate::db::models::{FeedEntry, Follow};
use crate::db::DbPool;

pub async fn create_follower(
    pool: &DbPool,
    follower_id: &str,
    followed_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO follows (follower_id, followed_id) VALUES (?, ?)")
        .bind(follower_id)
        .bind(followed_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deletes every edge matching both columns; returns how many rows went away.
pub async fn unfollow(
    pool: &DbPool,
    follower_id: &str,
    followed_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM follows WHERE follower_id = ? AND followed_id = ?")
        .bind(follower_id)
        .bind(followed_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn get_following(pool: &DbPool, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
    let edges: Vec<Follow> =
        sqlx::query_as("SELECT follower_id, followed_id FROM follows WHERE follower_id = ?")
            .bind(user_id)
            .fetch_all(pool)
            .await?;
    Ok(edges.into_iter().map(|f| f.followed_id).collect())
}

/// Recipes authored by everyone `user_id` follows, newest first.
/// A duplicated follow edge duplicates that author's rows.
pub async fn get_feed(pool: &DbPool, user_id: &str) -> Result<Vec<FeedEntry>, sqlx::Error> {
    sqlx::query_as::<_, FeedEntry>(
        "SELECT r.id, r.title, r.description, r.created_at, r.user_id, u.name AS user_name
         FROM recipes r
         JOIN follows f ON f.followed_id = r.user_id
         JOIN users u ON u.id = r.user_id
         WHERE f.follower_id = ?
         ORDER BY r.created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
