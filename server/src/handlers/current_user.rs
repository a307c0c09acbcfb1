//! `X-User-Id` extractor

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Id of the calling user, taken from the `X-User-Id` header.
///
/// A missing or non-numeric header is rejected as unauthorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub u32);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|id| *id > 0)
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}
