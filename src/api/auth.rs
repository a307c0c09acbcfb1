//! Auth Endpoint
//!
//! Exchanges Telegram profile data for a storefront user.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{send_json, ApiClient, ApiResult};
use crate::models::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthRequest {
    pub telegram_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

/// Existing users come back with 200, new registrations with 201
pub async fn authenticate(api: &ApiClient, request: &AuthRequest) -> ApiResult<User> {
    let builder = api.post("/auth").json(request);
    let body: UserResponse = send_json(builder, &[StatusCode::OK, StatusCode::CREATED]).await?;
    Ok(body.user)
}
