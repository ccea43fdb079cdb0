use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::AppState;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health (public)
        .route("/health", get(handlers::health::health_check))
        // Accounts (public)
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        // Users (protected)
        .route("/user/profile", get(handlers::users::profile))
        .route("/user/feed", get(handlers::users::feed))
        .route("/user/follow", post(handlers::users::follow))
        .route("/user/unfollow", post(handlers::users::unfollow))
        .route("/user/{id}", get(handlers::users::get_by_id))
        // Recipes (protected)
        .route("/recipe", post(handlers::recipes::create))
        .route("/recipe/{id}", get(handlers::recipes::get_by_id))
        .with_state(state)
}
