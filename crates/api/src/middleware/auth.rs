//! Bearer-token authentication and the caller's permissions on discussion content.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use commonground_core::error::CoreError;
use commonground_core::roles::can_delete;
use commonground_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Caller identity decoded from the `Authorization: Bearer <token>` header.
///
/// Handlers that post, edit or delete content take this as an extractor
/// argument; requests without a valid token are rejected with 401 before the
/// handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Id of the calling user (`claims.sub`).
    pub user_id: DbId,
    /// Role name from the token: `"user"`, `"moderator"` or `"admin"`.
    pub role: String,
}

impl AuthUser {
    /// Fail with 403 unless the caller authored the content.
    pub fn require_author(&self, author_id: DbId, message: &str) -> AppResult<()> {
        if self.user_id == author_id {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(message.to_string())))
        }
    }

    /// Fail with 403 unless the caller owns the content or moderates.
    pub fn require_can_delete(&self, owner_id: DbId, message: &str) -> AppResult<()> {
        if can_delete(owner_id, self.user_id, &self.role) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(message.to_string())))
        }
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
