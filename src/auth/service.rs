//! Admin credential check and signed token issuance/verification.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::constant_time_compare;
use crate::config::Config;
use crate::errors::AppError;

/// Fixed lifetime of an admin token.
pub const TOKEN_LIFETIME_HOURS: i64 = 3;

/// Source of the current time, injectable for expiry tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Claims embedded in every admin token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub username: String,
    pub admin: bool,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    pub username: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Validates admin credentials and issues/verifies HS256 tokens.
pub struct AuthService {
    username: String,
    password: Option<String>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(
        username: impl Into<String>,
        password: Option<String>,
        secret: &str,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            username: username.into(),
            password,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            clock,
        }
    }

    /// Build from configuration. Without a configured secret a random
    /// per-process one is used, so tokens do not survive a restart.
    pub fn from_config(config: &Config) -> Self {
        let secret = match &config.token_secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!(
                    "No token secret configured (PESCE_TOKEN_SECRET). Using a random secret; admin tokens will not survive a restart."
                );
                format!("{}{}", uuid::Uuid::new_v4(), uuid::Uuid::new_v4())
            }
        };

        Self::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
            &secret,
            Arc::new(SystemClock),
        )
    }

    /// Whether a password is configured at all.
    pub fn login_enabled(&self) -> bool {
        self.password.is_some()
    }

    /// Check credentials and issue a token valid for [`TOKEN_LIFETIME_HOURS`].
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some(expected_password) = &self.password else {
            tracing::warn!("Login attempt for {} while no admin password is configured", username);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        };

        // Evaluate both comparisons so timing does not reveal which one failed.
        let user_ok = constant_time_compare(username, &self.username);
        let pass_ok = constant_time_compare(password, expected_password);
        if !(user_ok & pass_ok) {
            tracing::warn!("Failed admin login for {}", username);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let issued = self.issue(username)?;
        tracing::info!("Admin {} logged in", username);
        Ok(issued)
    }

    fn issue(&self, username: &str) -> Result<IssuedToken, AppError> {
        let now = self.clock.now();
        let claims = AdminClaims {
            username: username.to_string(),
            admin: true,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Token encoding failed: {}", e)))?;

        Ok(IssuedToken {
            token,
            username: claims.username,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }

    /// Check the signature, then compare the expiry against the service clock.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the injected clock.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let claims = jsonwebtoken::decode::<AdminClaims>(token, &self.decoding_key, &validation)?
            .claims;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(AppError::Unauthorized("Token expired".to_string()));
        }
        if !claims.admin {
            return Err(AppError::Unauthorized("Not an admin token".to_string()));
        }

        Ok(claims)
    }
}
