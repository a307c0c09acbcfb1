//! Telegram login and sign-up

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{TelegramProfile, User};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AuthBody {
    #[serde(default)]
    pub telegram_id: Option<i64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    pub referral_code: Option<String>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// POST /api/auth
///
/// 200 for a returning user, 201 when the account was just created.
pub async fn authenticate(
    State(state): State<AppState>,
    body: Result<Json<AuthBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let telegram_id = body
        .telegram_id
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest("telegram_id is required".to_string()))?;

    let profile = TelegramProfile {
        telegram_id,
        username: body.username,
        first_name: body.first_name,
        last_name: body.last_name,
        photo_url: body.photo_url,
    };
    let registration = state
        .users
        .login_or_register(&profile, body.referral_code.as_deref(), state.config.bonuses())
        .await?;

    let status = if registration.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(UserResponse { user: registration.user })))
}
