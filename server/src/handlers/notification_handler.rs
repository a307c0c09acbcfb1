//! Notification read marks

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user::CurrentUser;

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// PUT /api/notifications/:id/read
pub async fn mark_read(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<SuccessResponse>> {
    let Path(notification_id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    if state.notifications.mark_read(user_id, notification_id).await? {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(AppError::NotFound("Notification not found".to_string()))
    }
}
