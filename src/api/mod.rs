//! REST API module.
//!
//! Contains all API routes and handlers used by the public site and the admin panel.

mod auth;
mod blogs;
mod chapters;
mod contact;
mod events;
mod gallery;
mod resources;
mod settings;
mod team;
mod upload;

pub use auth::*;
pub use blogs::*;
pub use chapters::*;
pub use contact::*;
pub use events::*;
pub use gallery::*;
pub use resources::*;
pub use settings::*;
pub use team::*;
pub use upload::*;

use std::fmt::Display;

use axum::{
    extract::{FromRequest, FromRequestParts},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// JSON body extractor whose rejections use the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path extractor whose rejections use the error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Create a 201 Created API response.
pub fn created<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data).with_status(StatusCode::CREATED))
}

/// Payload returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct Deleted<T: Serialize> {
    pub id: T,
}

/// Reject bodies whose `id` disagrees with the id in the URL.
pub fn ensure_matching_id<T>(path_id: &T, body_id: Option<&T>) -> Result<(), AppError>
where
    T: PartialEq + Display + ?Sized,
{
    match body_id {
        Some(body_id) if body_id != path_id => Err(AppError::BadRequest(format!(
            "ID mismatch: URL has {} but body has {}",
            path_id, body_id
        ))),
        _ => Ok(()),
    }
}

/// Turn a missing record into a 404.
pub fn found<T>(record: Option<T>, label: &str, id: impl Display) -> Result<T, AppError> {
    record.ok_or_else(|| AppError::NotFound(format!("{} {} not found", label, id)))
}

/// Turn an unsuccessful delete into a 404.
pub fn deleted<T: Serialize + Display>(removed: bool, label: &str, id: T) -> ApiResult<Deleted<T>> {
    if removed {
        tracing::info!("Deleted {} {}", label, id);
        success(Deleted { id })
    } else {
        Err(AppError::NotFound(format!("{} {} not found", label, id)))
    }
}
