use chrono::{DateTime, Utc};
use common::list_helper::{AuthorBlogCount, AuthorLikes, FavoriteBlog};
use serde::{Deserialize, Serialize};

use crate::entity::{blog, user};
use crate::error::AppError;

use super::shared::{validate_likes, validate_required};

/// Request body for creating a blog.
///
/// `title` and `url` are required; `likes` defaults to 0.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateBlogRequest {
    #[serde(default)]
    #[schema(example = "Type wars")]
    pub title: String,
    #[serde(default)]
    #[schema(example = "Robert C. Martin")]
    pub author: String,
    #[serde(default)]
    #[schema(example = "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html")]
    pub url: String,
    #[schema(example = 2)]
    pub likes: Option<i64>,
}

pub fn validate_create_blog(payload: &CreateBlogRequest) -> Result<(), AppError> {
    validate_required(&payload.title, "title")?;
    validate_required(&payload.url, "url")?;
    if let Some(likes) = payload.likes {
        validate_likes(likes)?;
    }
    Ok(())
}

/// Request body for updating a blog. Absent fields keep their stored value.
#[derive(Deserialize, Default, PartialEq, utoipa::ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    #[schema(example = 40)]
    pub likes: Option<i64>,
}

pub fn validate_update_blog(payload: &UpdateBlogRequest) -> Result<(), AppError> {
    if let Some(ref title) = payload.title {
        validate_required(title, "title")?;
    }
    if let Some(ref url) = payload.url {
        validate_required(url, "url")?;
    }
    if let Some(likes) = payload.likes {
        validate_likes(likes)?;
    }
    Ok(())
}

/// Owner summary embedded in blog responses.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogOwner {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "mluukkai")]
    pub username: String,
    #[schema(example = "Matti Luukkainen")]
    pub name: Option<String>,
}

impl From<user::Model> for BlogOwner {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            name: m.name,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    /// `null` when the blog was created without a token.
    pub user: Option<BlogOwner>,
    pub created_at: DateTime<Utc>,
}

impl BlogResponse {
    pub fn new(m: blog::Model, owner: Option<user::Model>) -> Self {
        Self {
            id: m.id,
            title: m.title,
            author: m.author,
            url: m.url,
            likes: m.likes,
            user: owner.map(BlogOwner::from),
            created_at: m.created_at,
        }
    }
}

/// Summary statistics over every stored blog.
#[derive(Serialize, utoipa::ToSchema)]
pub struct BlogStatsResponse {
    #[schema(example = 36)]
    pub total_likes: u64,
    /// `null` when there are no blogs.
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: AuthorBlogCount,
    pub most_likes: AuthorLikes,
}
