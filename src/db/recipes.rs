use crate::db::models::Recipe;
use crate::db::DbPool;

pub async fn create_recipe(pool: &DbPool, recipe: &Recipe) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO recipes (id, title, description, created_at, user_id)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&recipe.id)
    .bind(&recipe.title)
    .bind(&recipe.description)
    .bind(recipe.created_at.to_rfc3339())
    .bind(&recipe.user_id)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_recipe_by_id(pool: &DbPool, id: &str) -> Result<Option<Recipe>, sqlx::Error> {
    sqlx::query_as::<_, Recipe>(
        "SELECT id, title, description, created_at, user_id FROM recipes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
