use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Authenticated user extracted from the `Authorization: Bearer <token>` header.
///
/// Add this as a handler parameter to require authentication, or take
/// `Option<AuthUser>` to accept anonymous callers while still rejecting
/// a token that is present but invalid.
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

impl AuthUser {
    /// Returns `Ok(())` if the user owns a resource whose owner is `owner_id`.
    ///
    /// Resources without an owner can be managed by any authenticated user.
    pub fn require_owner(&self, owner_id: Option<i32>) -> Result<(), AppError> {
        match owner_id {
            Some(id) if id != self.user_id => Err(AppError::PermissionDenied),
            _ => Ok(()),
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(header) = parts.headers.get("Authorization") else {
        return Ok(None);
    };
    let value = header.to_str().map_err(|_| AppError::TokenInvalid)?;
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .ok_or(AppError::TokenInvalid)?;
    Ok(Some(token))
}

fn decode(token: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let claims =
        jwt::verify(token, &state.config.auth.jwt_secret).map_err(|_| AppError::TokenInvalid)?;

    Ok(AuthUser {
        user_id: claims.uid,
        username: claims.sub,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?.ok_or(AppError::TokenMissing)?;
        decode(token, state)
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match bearer_token(parts)? {
            Some(token) => decode(token, state).map(Some),
            None => Ok(None),
        }
    }
}
