//! Chapter API endpoints.

use std::collections::BTreeMap;

use axum::extract::State;

use super::{
    created, deleted, ensure_matching_id, found, success, ApiJson, ApiPath, ApiResult, Deleted,
};
use crate::models::{Chapter, ChapterRequest};
use crate::AppState;

/// GET /api/chapters - All chapters keyed by id.
pub async fn list_chapters(
    State(state): State<AppState>,
) -> ApiResult<BTreeMap<String, Chapter>> {
    success(state.repo.list_chapters().await?)
}

/// GET /api/chapters/:id - Get a single chapter.
pub async fn get_chapter(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Chapter> {
    let chapter = state.repo.get_chapter(&id).await?;
    success(found(chapter, "Chapter", &id)?)
}

/// POST /api/chapters - Create a chapter under a caller-chosen slug.
pub async fn create_chapter(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ChapterRequest>,
) -> ApiResult<Chapter> {
    let chapter = state.repo.create_chapter(request.into_chapter()).await?;
    tracing::info!("Created chapter {}", chapter.id);
    created(chapter)
}

/// PUT /api/chapters/:id - Update a chapter.
pub async fn update_chapter(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<ChapterRequest>,
) -> ApiResult<Chapter> {
    ensure_matching_id(id.as_str(), request.id.as_deref())?;
    success(state.repo.update_chapter(&id, request).await?)
}

/// DELETE /api/chapters/:id - Delete a chapter.
pub async fn delete_chapter(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Deleted<String>> {
    let removed = state.repo.delete_chapter(&id).await?;
    deleted(removed, "Chapter", id)
}
