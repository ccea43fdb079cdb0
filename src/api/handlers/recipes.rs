use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::middleware::auth::AuthUser;
use crate::api::AppState;
use crate::db;
use crate::db::models::Recipe;
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
pub struct CreateRecipeRequest {
    title: String,
    description: String,
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(req): Json<CreateRecipeRequest>,
) -> AppResult<Json<Value>> {
    let title = req.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("Title cannot be empty".to_string()));
    }

    let recipe = Recipe::new(title, req.description, auth.0.sub.clone());
    db::recipes::create_recipe(&state.db, &recipe).await?;

    Ok(Json(json!({ "message": "Recipe created successfully" })))
}

pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let recipe = db::recipes::get_recipe_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", id)))?;

    Ok(Json(json!({
        "id": recipe.id,
        "title": recipe.title,
        "description": recipe.description,
        "createdAt": recipe.created_at.to_rfc3339(),
    })))
}
