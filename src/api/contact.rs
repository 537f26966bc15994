//! Contact info endpoints.

use axum::extract::State;

use super::{success, ApiJson, ApiResult};
use crate::models::ContactInfo;
use crate::AppState;

/// GET /api/contact
pub async fn get_contact(State(state): State<AppState>) -> ApiResult<ContactInfo> {
    success(state.repo.get_contact().await?)
}

/// PUT /api/contact - Replace the contact document.
pub async fn update_contact(
    State(state): State<AppState>,
    ApiJson(contact): ApiJson<ContactInfo>,
) -> ApiResult<ContactInfo> {
    success(state.repo.save_contact(contact).await?)
}
