//! Checkout and order details

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::{Order, OrderDetails, OrderLine};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::current_user::CurrentUser;

#[derive(Debug, Deserialize)]
pub struct CreateOrderBody {
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let order = state.orders.place(user_id, &body.items).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse { order })))
}

/// GET /api/orders/:id
pub async fn get_order(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    path: Result<Path<u32>, PathRejection>,
) -> AppResult<Json<OrderDetails>> {
    let Path(order_id) = path.map_err(|e| AppError::BadRequest(e.body_text()))?;
    state
        .orders
        .details_for_user(user_id, order_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
}
