use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{blog, user};
use crate::error::AppError;

use super::shared::validate_min_len;

/// Request body for creating a user.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Unique username, at least 3 characters.
    #[serde(default)]
    #[schema(example = "mluukkai")]
    pub username: String,
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
    /// Password, at least 3 characters.
    #[serde(default)]
    #[schema(example = "salainen")]
    pub password: String,
}

pub fn validate_create_user(payload: &CreateUserRequest) -> Result<(), AppError> {
    validate_min_len(payload.username.trim(), "username", 3)?;
    validate_min_len(&payload.password, "password", 3)?;
    Ok(())
}

/// Blog summary embedded in user responses.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserBlog {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub url: String,
}

impl From<blog::Model> for UserBlog {
    fn from(m: blog::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            author: m.author,
            url: m.url,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "mluukkai")]
    pub username: String,
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
    /// Blogs owned by this user, oldest first.
    pub blogs: Vec<UserBlog>,
    pub created_at: DateTime<Utc>,
}

impl UserResponse {
    pub fn new(m: user::Model, blogs: Vec<blog::Model>) -> Self {
        Self {
            id: m.id,
            username: m.username,
            name: m.name,
            blogs: blogs.into_iter().map(UserBlog::from).collect(),
            created_at: m.created_at,
        }
    }
}
