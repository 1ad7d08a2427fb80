//! Authentication: token registration and bearer middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{RegisterRequest, RegisterResponse};
use crate::AppState;

/// Authenticated user info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }

    let (user, token) = state.store.register_user(payload.name.trim())?;
    tracing::info!("Registered user {} ({})", user.name, user.id);

    Ok(Json(RegisterResponse {
        user_id: user.id,
        token,
    }))
}

/// Auth middleware - resolves the bearer token to a user
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?;

    let user = state
        .store
        .user_by_token(token)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid token".to_string()))?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id: user.id });

    Ok(next.run(request).await)
}
