//! Handlers for the caller's own profile.
//!
//! Both take `Option<AuthUser>` so that a missing identity is reported by
//! the catalog service itself.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::service;
use catalog_core::validation::ProfileUpdate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/me/profile
///
/// `data` is `null` when the caller has no profile yet.
pub async fn get_my_profile(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let identity = auth.as_ref().map(|a| &a.identity);
    let profile = service::get_current_user_profile(state.store.as_ref(), identity).await?;

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/me/profile
///
/// Partial update; absent fields are left unchanged.
pub async fn update_my_profile(
    auth: Option<AuthUser>,
    State(state): State<AppState>,
    Json(input): Json<ProfileUpdate>,
) -> AppResult<impl IntoResponse> {
    let identity = auth.as_ref().map(|a| &a.identity);
    let profile =
        service::update_current_user_profile(state.store.as_ref(), identity, input).await?;

    Ok(Json(DataResponse { data: profile }))
}
