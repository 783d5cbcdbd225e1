//! Handlers for public profile reads.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::catalog::ProfileFilter;
use catalog_core::error::CoreError;
use catalog_core::service;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profiles?q=&title_id=
///
/// Profiles matching the optional search term (name or email, case
/// insensitive) and title, each with its title resolved.
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(filter): Query<ProfileFilter>,
) -> AppResult<impl IntoResponse> {
    let profiles = service::list_profiles(state.store.as_ref(), &filter).await?;

    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/profiles/{username}
///
/// Username match is case-insensitive; 404 when absent.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let profile = service::get_profile_by_username(state.store.as_ref(), &username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Profile",
                key: username.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: profile }))
}
