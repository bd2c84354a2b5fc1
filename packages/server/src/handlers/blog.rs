use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{StatsError, list_helper};
use sea_orm::*;
use tracing::instrument;

use crate::entity::{blog, user};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::blog::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Blogs",
    operation_id = "listBlogs",
    summary = "List all blogs",
    description = "Returns every blog in creation order, each with its owner's id, username and name (or `null`).",
    responses(
        (status = 200, description = "List of blogs", body = Vec<BlogResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = blog::Entity::find()
        .order_by_asc(blog::Column::Id)
        .all(&state.db)
        .await?;

    let owner_ids: Vec<i32> = blogs.iter().filter_map(|b| b.user_id).collect();
    let owners: HashMap<i32, user::Model> = if owner_ids.is_empty() {
        HashMap::new()
    } else {
        user::Entity::find()
            .filter(user::Column::Id.is_in(owner_ids))
            .all(&state.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect()
    };

    let data = blogs
        .into_iter()
        .map(|b| {
            let owner = b.user_id.and_then(|id| owners.get(&id).cloned());
            BlogResponse::new(b, owner)
        })
        .collect();

    Ok(Json(data))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Blogs",
    operation_id = "createBlog",
    summary = "Create a new blog",
    description = "Creates a blog. `title` and `url` are required and `likes` defaults to 0. When a bearer token is sent, the blog is owned by that user.",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Token present but invalid (TOKEN_INVALID)", body = ErrorBody),
    ),
    security((), ("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(title = %payload.title))]
pub async fn create_blog(
    auth_user: Option<AuthUser>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateBlogRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_blog(&payload)?;

    let owner = match auth_user {
        Some(auth_user) => Some(
            user::Entity::find_by_id(auth_user.user_id)
                .one(&state.db)
                .await?
                .ok_or(AppError::TokenInvalid)?,
        ),
        None => None,
    };

    let new_blog = blog::ActiveModel {
        title: Set(payload.title.trim().to_string()),
        author: Set(payload.author.trim().to_string()),
        url: Set(payload.url.trim().to_string()),
        likes: Set(payload.likes.unwrap_or(0)),
        user_id: Set(owner.as_ref().map(|u| u.id)),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let model = new_blog.insert(&state.db).await?;
    tracing::info!(id = model.id, owner = ?model.user_id, "Blog created");

    Ok((StatusCode::CREATED, Json(BlogResponse::new(model, owner))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Blogs",
    operation_id = "getBlog",
    summary = "Get a blog by ID",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog details", body = BlogResponse),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<BlogResponse>, AppError> {
    let model = find_blog(&state.db, id).await?;
    let owner = find_owner(&state.db, &model).await?;
    Ok(Json(BlogResponse::new(model, owner)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Blogs",
    operation_id = "updateBlog",
    summary = "Update an existing blog",
    description = "Each provided field replaces the stored value; absent fields are kept. An empty payload returns the current blog unchanged.",
    params(("id" = i32, Path, description = "Blog ID")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = BlogResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id))]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    validate_update_blog(&payload)?;

    if payload == UpdateBlogRequest::default() {
        let existing = find_blog(&state.db, id).await?;
        let owner = find_owner(&state.db, &existing).await?;
        return Ok(Json(BlogResponse::new(existing, owner)));
    }

    let txn = state.db.begin().await?;

    let existing = find_blog(&txn, id).await?;
    let mut active: blog::ActiveModel = existing.into();

    if let Some(ref title) = payload.title {
        active.title = Set(title.trim().to_string());
    }
    if let Some(ref author) = payload.author {
        active.author = Set(author.trim().to_string());
    }
    if let Some(ref url) = payload.url {
        active.url = Set(url.trim().to_string());
    }
    if let Some(likes) = payload.likes {
        active.likes = Set(likes);
    }

    let model = active.update(&txn).await?;
    let owner = find_owner(&txn, &model).await?;
    txn.commit().await?;

    Ok(Json(BlogResponse::new(model, owner)))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Blogs",
    operation_id = "deleteBlog",
    summary = "Delete a blog by ID",
    description = "Requires a bearer token. A blog with an owner can only be deleted by that owner.",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the owner (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Blog not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id, user_id = auth_user.user_id, username = %auth_user.username))]
pub async fn delete_blog(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let existing = find_blog(&txn, id).await?;
    auth_user.require_owner(existing.user_id)?;

    blog::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(id, "Blog deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Blogs",
    operation_id = "getBlogStats",
    summary = "Summary statistics over all blogs",
    description = "Total likes, the most liked blog, the author with most blogs and the author with most likes. Ties go to whichever comes first in creation order. `favorite_blog` is `null` when there are no blogs.",
    responses(
        (status = 200, description = "Blog statistics", body = BlogStatsResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn blog_stats(State(state): State<AppState>) -> Result<Json<BlogStatsResponse>, AppError> {
    let blogs = blog::Entity::find()
        .order_by_asc(blog::Column::Id)
        .all(&state.db)
        .await?;

    let favorite_blog = match list_helper::favorite_blog(&blogs) {
        Ok(favorite) => Some(favorite),
        Err(StatsError::EmptyInput) => None,
    };

    Ok(Json(BlogStatsResponse {
        total_likes: list_helper::total_likes(&blogs),
        favorite_blog,
        most_blogs: list_helper::most_blogs(&blogs),
        most_likes: list_helper::most_likes(&blogs),
    }))
}

async fn find_blog<C: ConnectionTrait>(db: &C, id: i32) -> Result<blog::Model, AppError> {
    blog::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog {id} not found")))
}

async fn find_owner<C: ConnectionTrait>(
    db: &C,
    blog: &blog::Model,
) -> Result<Option<user::Model>, AppError> {
    match blog.user_id {
        Some(user_id) => Ok(user::Entity::find_by_id(user_id).one(db).await?),
        None => Ok(None),
    }
}
