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
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
pub struct FollowRequest {
    #[serde(rename = "userToFollowId")]
    user_to_follow_id: String,
}

pub async fn profile(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<Json<Value>> {
    let user = db::users::get_user_by_id(&state.db, &auth.0.sub)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", auth.0.sub)))?;

    Ok(Json(json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
    })))
}

pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let user = db::users::get_user_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok(Json(json!({
        "id": user.id,
        "name": user.name,
        "email": user.email,
        "role": user.role,
    })))
}

pub async fn follow(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(req): Json<FollowRequest>,
) -> AppResult<Json<Value>> {
    // The followed user must exist; the edge itself is unchecked, so
    // repeated follows and self-follows go straight through.
    let target = db::users::get_user_by_id(&state.db, &req.user_to_follow_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.user_to_follow_id)))?;

    db::follows::create_follower(&state.db, &auth.0.sub, &target.id).await?;

    Ok(Json(json!({ "message": "Followed successfully" })))
}

pub async fn unfollow(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(req): Json<FollowRequest>,
) -> AppResult<Json<Value>> {
    let removed = db::follows::unfollow(&state.db, &auth.0.sub, &req.user_to_follow_id).await?;

    if removed == 0 {
        return Err(AppError::NotFound(format!(
            "Not following user {}",
            req.user_to_follow_id
        )));
    }

    Ok(Json(json!({ "message": "Unfollowed successfully" })))
}

pub async fn feed(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<Json<Value>> {
    let entries = db::follows::get_feed(&state.db, &auth.0.sub).await?;

    let feed: Vec<Value> = entries
        .into_iter()
        .map(|e| {
            json!({
                "id": e.id,
                "title": e.title,
                "description": e.description,
                "createdAt": e.created_at.to_rfc3339(),
                "userId": e.user_id,
                "userName": e.user_name,
            })
        })
        .collect();

    Ok(Json(json!({ "feed": feed })))
}
