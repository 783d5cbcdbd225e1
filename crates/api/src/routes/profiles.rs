//! Route definitions for public profile reads.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /                  -> list_profiles
/// GET    /{username}        -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profiles::list_profiles))
        .route("/{username}", get(profiles::get_profile))
}
