use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{blog, user};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::user::*;
use crate::state::AppState;
use crate::utils::hash;

#[utoipa::path(
    get,
    path = "/",
    tag = "Users",
    operation_id = "listUsers",
    summary = "List all users",
    description = "Returns every user with the blogs they own (id, title, author and url only). Password hashes are never returned.",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = user::Entity::find()
        .order_by_asc(user::Column::Id)
        .all(&state.db)
        .await?;

    let mut owned: HashMap<i32, Vec<blog::Model>> = HashMap::new();
    if !users.is_empty() {
        let blogs = blog::Entity::find()
            .filter(blog::Column::UserId.is_in(users.iter().map(|u| u.id)))
            .order_by_asc(blog::Column::Id)
            .all(&state.db)
            .await?;
        for b in blogs {
            if let Some(user_id) = b.user_id {
                owned.entry(user_id).or_default().push(b);
            }
        }
    }

    let data = users
        .into_iter()
        .map(|u| {
            let blogs = owned.remove(&u.id).unwrap_or_default();
            UserResponse::new(u, blogs)
        })
        .collect();

    Ok(Json(data))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Users",
    operation_id = "createUser",
    summary = "Create a new user",
    description = "Creates a user. Username and password must both be at least 3 characters and the username must be unique.",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR, USERNAME_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_user(&payload)?;

    let username = payload.username.trim().to_string();

    let password_hash = hash::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let new_user = user::ActiveModel {
        username: Set(username),
        name: Set(payload.name),
        password_hash: Set(password_hash),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let user = new_user.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!("Username already exists");
            AppError::UsernameTaken
        }
        _ => AppError::from(e),
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse::new(user, Vec::new()))))
}
