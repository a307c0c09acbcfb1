//! HTTP Layer
//!
//! axum handlers bridging the storefront client to the repositories.

mod current_user;
mod product_handler;
mod auth_handler;
mod user_handler;
mod order_handler;
mod notification_handler;

#[cfg(test)]
mod tests;

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderName, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::state::AppState;

pub use current_user::{CurrentUser, USER_ID_HEADER};

/// Preflight responses are cached for a day
const CORS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)])
        .max_age(CORS_MAX_AGE);

    let api = Router::new()
        .route("/products", get(product_handler::list_products))
        .route("/auth", post(auth_handler::authenticate))
        .route("/user", get(user_handler::get_user_data))
        .route("/orders", post(order_handler::create_order))
        .route("/orders/:id", get(order_handler::get_order))
        .route("/notifications/:id/read", put(notification_handler::mark_read));

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
