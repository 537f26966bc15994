//! Link library API endpoints.

use axum::extract::State;

use super::{
    created, deleted, ensure_matching_id, found, success, ApiJson, ApiPath, ApiResult, Deleted,
};
use crate::models::{LinkResource, LinkResourceRequest};
use crate::AppState;

/// GET /api/resources - List the link library.
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Vec<LinkResource>> {
    success(state.repo.list_resources().await?)
}

/// GET /api/resources/:id - Get a single link.
pub async fn get_resource(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<LinkResource> {
    let resource = state.repo.get_resource(&id).await?;
    success(found(resource, "Resource", &id)?)
}

/// POST /api/resources - Add a link.
pub async fn create_resource(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LinkResourceRequest>,
) -> ApiResult<LinkResource> {
    created(state.repo.create_resource(request).await?)
}

/// PUT /api/resources/:id - Update a link.
pub async fn update_resource(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<LinkResourceRequest>,
) -> ApiResult<LinkResource> {
    ensure_matching_id(id.as_str(), request.id.as_deref())?;
    success(state.repo.update_resource(&id, request).await?)
}

/// DELETE /api/resources/:id - Remove a link.
pub async fn delete_resource(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Deleted<String>> {
    let removed = state.repo.delete_resource(&id).await?;
    deleted(removed, "Resource", id)
}
