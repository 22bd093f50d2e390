//! Axum route handlers for the Auth API.

use axum::{extract::State, http::StatusCode, Form, Json};
use serde::Deserialize;

use crate::auth::extractor::AuthUser;
use crate::auth::service::{self, AccessToken};
use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// OAuth2 password-flow form body.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    let user = service::register(state.users.as_ref(), &req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/auth/token
pub async fn handle_token(
    State(state): State<AppState>,
    Form(form): Form<TokenForm>,
) -> Result<Json<AccessToken>, AppError> {
    let token = service::authenticate(
        state.users.as_ref(),
        &state.tokens,
        &form.username,
        &form.password,
    )
    .await?;
    Ok(Json(token))
}

/// GET /api/auth/me
pub async fn handle_me(AuthUser(user): AuthUser) -> Json<UserRow> {
    Json(user)
}
