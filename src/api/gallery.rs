//! Gallery API endpoints.

use axum::extract::State;

use super::{
    created, deleted, ensure_matching_id, found, success, ApiJson, ApiPath, ApiResult, Deleted,
};
use crate::models::{GalleryItem, GalleryItemRequest};
use crate::AppState;

/// GET /api/gallery - List all gallery items.
pub async fn list_gallery(State(state): State<AppState>) -> ApiResult<Vec<GalleryItem>> {
    success(state.repo.list_gallery().await?)
}

/// GET /api/gallery/:id - Get a single gallery item.
pub async fn get_gallery_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<GalleryItem> {
    let item = state.repo.get_gallery_item(&id).await?;
    success(found(item, "Gallery item", &id)?)
}

/// POST /api/gallery - Create a gallery item.
pub async fn create_gallery_item(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GalleryItemRequest>,
) -> ApiResult<GalleryItem> {
    let item = state.repo.create_gallery_item(request).await?;
    tracing::info!("Created gallery item {} with {} images", item.id, item.images.len());
    created(item)
}

/// PUT /api/gallery/:id - Update a gallery item.
///
/// A body without `images` stores an empty list; the thumbnail then falls
/// back to the existing one.
pub async fn update_gallery_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<GalleryItemRequest>,
) -> ApiResult<GalleryItem> {
    ensure_matching_id(id.as_str(), request.id.as_deref())?;
    success(state.repo.update_gallery_item(&id, request).await?)
}

/// DELETE /api/gallery/:id - Delete a gallery item.
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Deleted<String>> {
    let removed = state.repo.delete_gallery_item(&id).await?;
    deleted(removed, "Gallery item", id)
}
