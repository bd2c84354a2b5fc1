pub mod auth;
pub mod blog;
pub mod user;

use crate::error::AppError;

/// Fallback for paths no route matches.
pub async fn unknown_endpoint() -> AppError {
    AppError::NotFound("Unknown endpoint".into())
}
