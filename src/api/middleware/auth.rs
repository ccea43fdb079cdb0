use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

use crate::api::AppState;
use crate::auth::jwt::Claims;
use crate::error::AppError;

/// Axum extractor that validates the token in the Authorization header.
/// Add this as a handler parameter to require authentication.
/// Accepts `Bearer <token>` as well as a bare token value.
pub struct AuthUser(pub Claims);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::AuthFailed)?;

        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let claims = crate::auth::jwt::verify(token, &state.jwt_secret)
            .map_err(|_| AppError::AuthFailed)?;

        Ok(AuthUser(claims))
    }
}
