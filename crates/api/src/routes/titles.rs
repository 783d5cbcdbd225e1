//! Route definitions for the title directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::titles;
use crate::state::AppState;

/// Routes mounted at `/titles`.
///
/// ```text
/// GET    /                  -> list_titles
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(titles::list_titles))
}
