//! User Endpoint

use reqwest::StatusCode;

use super::{as_user, send_json, ApiClient, ApiResult};
use crate::models::UserData;

/// Profile, referral count, order history and notifications in one call
pub async fn get_user_data(api: &ApiClient, user_id: u32) -> ApiResult<UserData> {
    let request = as_user(api.get("/user"), user_id);
    send_json(request, &[StatusCode::OK]).await
}
