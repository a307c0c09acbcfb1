//! Notification Endpoints

use reqwest::StatusCode;
use serde::Deserialize;

use super::{as_user, send_json, ApiClient, ApiError, ApiResult};

#[derive(Deserialize)]
struct SuccessResponse {
    success: bool,
}

pub async fn mark_notification_read(api: &ApiClient, user_id: u32, notification_id: u32) -> ApiResult<()> {
    let path = format!("/notifications/{}/read", notification_id);
    let request = as_user(api.put(&path), user_id);
    let body: SuccessResponse = send_json(request, &[StatusCode::OK]).await?;
    if body.success {
        Ok(())
    } else {
        Err(ApiError::Decode("server did not acknowledge the read mark".to_string()))
    }
}
