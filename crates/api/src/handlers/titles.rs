use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use catalog_core::service;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/titles
///
/// The full title directory, in store order.
pub async fn list_titles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let titles = service::list_titles(state.store.as_ref()).await?;

    Ok(Json(DataResponse { data: titles }))
}
