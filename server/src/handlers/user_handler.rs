//! Profile hydration

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::{Notification, Order, User};
use crate::error::{AppError, AppResult};
use crate::repository::{Repository, UserScopedRepository};
use crate::state::AppState;

use super::current_user::CurrentUser;

#[derive(Serialize)]
pub struct UserDataResponse {
    pub user: User,
    pub referrals_count: u32,
    pub orders: Vec<Order>,
    pub notifications: Vec<Notification>,
}

/// GET /api/user
pub async fn get_user_data(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> AppResult<Json<UserDataResponse>> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let referrals_count = state.users.count_referrals(user.id).await?;
    let orders = state.orders.list_for_user(user.id, None).await?;
    let notifications = state
        .notifications
        .list_for_user(user.id, Some(state.config.notifications_limit))
        .await?;

    Ok(Json(UserDataResponse {
        user,
        referrals_count,
        orders,
        notifications,
    }))
}
