//! Event API endpoints.

use axum::extract::State;

use super::{
    created, deleted, ensure_matching_id, found, success, ApiJson, ApiPath, ApiResult, Deleted,
};
use crate::models::{Event, EventRequest, EventsOverview};
use crate::AppState;

/// GET /api/events - List upcoming and past events.
pub async fn list_events(State(state): State<AppState>) -> ApiResult<EventsOverview> {
    success(state.repo.list_events().await?)
}

/// GET /api/events/:id - Get a single event from either list.
pub async fn get_event(State(state): State<AppState>, ApiPath(id): ApiPath<u64>) -> ApiResult<Event> {
    let event = state.repo.get_event(id).await?;
    success(found(event, "Event", id)?)
}

/// POST /api/events - Create an upcoming event with a generated id.
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<EventRequest>,
) -> ApiResult<Event> {
    let event = state.repo.create_event(request.into_event(0)).await?;
    created(event)
}

/// PUT /api/events/:id - Update an event.
pub async fn update_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<EventRequest>,
) -> ApiResult<Event> {
    ensure_matching_id(&id, request.id.as_ref())?;
    success(state.repo.update_event(id, request).await?)
}

/// DELETE /api/events/:id - Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Deleted<u64>> {
    let removed = state.repo.delete_event(id).await?;
    deleted(removed, "Event", id)
}

/// POST /api/events/move-to-past/:id - Move an upcoming event to the past list.
pub async fn move_event_to_past(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Event> {
    success(state.repo.move_event_to_past(id).await?)
}
