//! Site settings endpoints.

use axum::extract::State;

use super::{success, ApiJson, ApiResult};
use crate::models::SiteSettings;
use crate::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<SiteSettings> {
    success(state.repo.get_settings().await?)
}

/// PUT /api/settings - Replace the settings document.
pub async fn update_settings(
    State(state): State<AppState>,
    ApiJson(settings): ApiJson<SiteSettings>,
) -> ApiResult<SiteSettings> {
    success(state.repo.save_settings(settings).await?)
}
