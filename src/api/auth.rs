//! Admin login and token verification endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiJson, ApiResult};
use crate::auth::{bearer_token, IssuedToken};
use crate::errors::{codes, ensure_present, AppError, ErrorDetails};
use crate::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Optional request body for `POST /api/auth/verify`.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: Option<String>,
}

/// Successful verification payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
    pub username: String,
    pub expires_at: i64,
}

/// Body sent with a 401 from the verify endpoint.
#[derive(Debug, Serialize)]
pub struct VerifyFailure {
    pub success: bool,
    pub valid: bool,
    pub error: ErrorDetails,
}

/// POST /api/auth/login - Exchange admin credentials for a token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<IssuedToken> {
    let mut missing = Vec::new();
    if request.username.trim().is_empty() {
        missing.push("username");
    }
    if request.password.is_empty() {
        missing.push("password");
    }
    ensure_present(&missing)?;

    success(state.auth.login(request.username.trim(), &request.password)?)
}

/// GET|POST /api/auth/verify - Check a token from the body or the
/// `Authorization` header.
pub async fn verify(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let from_body = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice::<VerifyRequest>(&body) {
            Ok(request) => request.token,
            Err(e) => {
                return AppError::BadRequest(format!("Invalid JSON body: {}", e)).into_response()
            }
        }
    };

    let token = from_body
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| bearer_token(&headers));

    let Some(token) = token else {
        return verify_failure("Missing token");
    };

    match state.auth.verify(token) {
        Ok(claims) => success(VerifyResponse {
            valid: true,
            username: claims.username,
            expires_at: claims.exp,
        })
        .into_response(),
        Err(e) => verify_failure(&e.message()),
    }
}

fn verify_failure(message: &str) -> Response {
    let body = VerifyFailure {
        success: false,
        valid: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
