//! Admin authentication.
//!
//! Credentials are compared in constant time to mitigate timing attacks.
//! Mutating API requests must carry a valid admin token.

mod service;

pub use service::*;

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderMap, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::errors::AppError;

/// Admin token layer: reads pass through, everything else needs a valid
/// `Authorization: Bearer <token>`.
pub async fn admin_auth_layer(auth: Arc<AuthService>, request: Request, next: Next) -> Response {
    if is_read_only(request.method()) {
        return next.run(request).await;
    }

    let Some(token) = bearer_token(request.headers()) else {
        return AppError::Unauthorized("Missing admin token".to_string()).into_response();
    };

    match auth.verify(token) {
        Ok(claims) => {
            tracing::debug!("{} {} by {}", request.method(), request.uri(), claims.username);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

fn is_read_only(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Extract the token from an `Authorization: Bearer` header. The scheme
/// name is case-insensitive.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token.trim()).filter(|t| !t.is_empty())
}

/// Perform constant-time string comparison.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
