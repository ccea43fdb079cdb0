use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::AppState;
use crate::auth::{jwt, password};
use crate::db;
use crate::db::models::{Role, User};
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
pub struct SignupRequest {
    email: String,
    name: String,
    password: String,
    #[serde(default)]
    role: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> AppResult<Json<Value>> {
    if !req.email.contains('@') {
        return Err(AppError::Validation("Invalid email".to_string()));
    }

    if req.password.len() < 6 {
        return Err(AppError::Validation("Invalid password".to_string()));
    }

    let name = req.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Name cannot be empty".to_string()));
    }

    let role = match req.role.as_deref() {
        None | Some("") => Role::Normal,
        Some(s) => Role::parse(s).ok_or_else(|| {
            AppError::Validation(format!("Invalid role: {}. Must be one of: normal, admin", s))
        })?,
    };

    // Check if email already exists
    if db::users::get_user_by_email(&state.db, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Validation(format!(
            "Email '{}' already registered",
            req.email
        )));
    }

    let password_hash = password::hash(&req.password)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    let user = User::new(req.email, name, password_hash, role);
    db::users::create_user(&state.db, &user).await?;

    let token = jwt::generate(
        &user.id,
        &user.role,
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "token": token })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<Value>> {
    if !req.email.contains('@') {
        return Err(AppError::Validation("Invalid email".to_string()));
    }

    let user = db::users::get_user_by_email(&state.db, &req.email)
        .await?
        .ok_or(AppError::AuthFailed)?;

    if !password::verify(&req.password, &user.password) {
        return Err(AppError::AuthFailed);
    }

    let token = jwt::generate(
        &user.id,
        &user.role,
        &state.jwt_secret,
        state.jwt_expiry_hours,
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(json!({ "token": token })))
}
