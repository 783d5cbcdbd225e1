//! JWT-based identity extractor for Axum handlers.

use axum::extract::OptionalFromRequestParts;
use axum::http::request::Parts;
use catalog_core::error::CoreError;
use catalog_core::identity::Identity;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Caller identity extracted from a JWT Bearer token in the `Authorization` header.
///
/// Extracted as `Option<AuthUser>`: a missing header yields `None` and the
/// catalog service decides whether an identity is required. A malformed or
/// invalid token is always rejected.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Identity,
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match parts.headers.get("authorization") {
            None => Ok(None),
            Some(value) => {
                let auth_header = value.to_str().map_err(|_| {
                    AppError::Core(CoreError::Unauthenticated(
                        "Invalid Authorization header".into(),
                    ))
                })?;
                authenticate(auth_header, state).map(Some)
            }
        }
    }
}

fn authenticate(auth_header: &str, state: &AppState) -> Result<AuthUser, AppError> {
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Core(CoreError::Unauthenticated(
            "Invalid Authorization format. Expected: Bearer <token>".into(),
        ))
    })?;

    let claims = validate_token(token, &state.config.jwt).map_err(|_| {
        AppError::Core(CoreError::Unauthenticated(
            "Invalid or expired token".into(),
        ))
    })?;

    Ok(AuthUser {
        identity: claims.into(),
    })
}
