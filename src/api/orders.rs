//! Order Endpoints

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{as_user, send_json, ApiClient, ApiResult};
use crate::cart::OrderLine;
use crate::models::{Order, OrderItem};

#[derive(Serialize)]
struct CreateOrderBody<'a> {
    items: &'a [OrderLine],
}

#[derive(Deserialize)]
struct OrderResponse {
    order: Order,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderDetails {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Anything but 201 is a failure
pub async fn create_order(api: &ApiClient, user_id: u32, items: &[OrderLine]) -> ApiResult<Order> {
    let request = as_user(api.post("/orders"), user_id).json(&CreateOrderBody { items });
    let body: OrderResponse = send_json(request, &[StatusCode::CREATED]).await?;
    Ok(body.order)
}

pub async fn get_order(api: &ApiClient, user_id: u32, order_id: u32) -> ApiResult<OrderDetails> {
    let request = as_user(api.get(&format!("/orders/{}", order_id)), user_id);
    send_json(request, &[StatusCode::OK]).await
}
