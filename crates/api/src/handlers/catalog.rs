use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::service;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the catalog page.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    /// Free-text search over name and email.
    pub q: Option<String>,
    /// Title name; unknown names apply no filter.
    pub role: Option<String>,
}

/// GET /api/v1/catalog?q=&role=
pub async fn get_catalog_page(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<impl IntoResponse> {
    let page = service::catalog_page(
        state.store.as_ref(),
        params.q.as_deref(),
        params.role.as_deref(),
    )
    .await?;

    Ok(Json(DataResponse { data: page }))
}
