//! Team and faculty API endpoints.

use axum::extract::State;

use super::{created, deleted, ensure_matching_id, success, ApiJson, ApiPath, ApiResult, Deleted};
use crate::models::{Faculty, PersonRequest, TeamData, TeamInitResult, TeamMember};
use crate::AppState;

/// GET /api/team - Members and faculty.
pub async fn get_team(State(state): State<AppState>) -> ApiResult<TeamData> {
    success(state.repo.get_team().await?)
}

/// POST /api/team/init - Fill an empty team with the default roster.
pub async fn init_team(State(state): State<AppState>) -> ApiResult<TeamInitResult> {
    success(state.repo.init_team().await?)
}

/// POST /api/team - Add a student member.
pub async fn create_member(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PersonRequest>,
) -> ApiResult<TeamMember> {
    let member = state.repo.create_member(request).await?;
    tracing::info!("Added team member {}", member.id);
    created(member)
}

/// PUT /api/team/members/:id
pub async fn update_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<PersonRequest>,
) -> ApiResult<TeamMember> {
    ensure_matching_id(id.as_str(), request.id.as_deref())?;
    success(state.repo.update_member(&id, request).await?)
}

/// DELETE /api/team/members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Deleted<String>> {
    let removed = state.repo.delete_member(&id).await?;
    deleted(removed, "Team member", id)
}

/// POST /api/team/faculty - Add a faculty advisor.
pub async fn create_faculty(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PersonRequest>,
) -> ApiResult<Faculty> {
    let faculty = state.repo.create_faculty(request).await?;
    tracing::info!("Added faculty {}", faculty.id);
    created(faculty)
}

/// PUT /api/team/faculty/:id
pub async fn update_faculty(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<PersonRequest>,
) -> ApiResult<Faculty> {
    ensure_matching_id(id.as_str(), request.id.as_deref())?;
    success(state.repo.update_faculty(&id, request).await?)
}

/// DELETE /api/team/faculty/:id
pub async fn delete_faculty(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Deleted<String>> {
    let removed = state.repo.delete_faculty(&id).await?;
    deleted(removed, "Faculty", id)
}
