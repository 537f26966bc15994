//! Blog API endpoints.

use axum::extract::State;

use super::{
    created, deleted, ensure_matching_id, found, success, ApiJson, ApiPath, ApiResult, Deleted,
};
use crate::models::{BlogPost, BlogPostRequest};
use crate::AppState;

/// GET /api/blogs - List all blog posts.
pub async fn list_blog_posts(State(state): State<AppState>) -> ApiResult<Vec<BlogPost>> {
    success(state.repo.list_blog_posts().await?)
}

/// GET /api/blogs/:id - Get a single blog post.
pub async fn get_blog_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<BlogPost> {
    let post = state.repo.get_blog_post(id).await?;
    success(found(post, "Blog post", id)?)
}

/// POST /api/blogs - Create a blog post.
pub async fn create_blog_post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BlogPostRequest>,
) -> ApiResult<BlogPost> {
    let post = state.repo.create_blog_post(request).await?;
    tracing::info!("Created blog post {} ({})", post.id, post.title);
    created(post)
}

/// PUT /api/blogs/:id - Update a blog post.
pub async fn update_blog_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<BlogPostRequest>,
) -> ApiResult<BlogPost> {
    ensure_matching_id(&id, request.id.as_ref())?;
    success(state.repo.update_blog_post(id, request).await?)
}

/// DELETE /api/blogs/:id - Delete a blog post.
pub async fn delete_blog_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Deleted<u64>> {
    let removed = state.repo.delete_blog_post(id).await?;
    deleted(removed, "Blog post", id)
}
