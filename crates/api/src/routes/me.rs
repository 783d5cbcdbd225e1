//! Route definitions for the caller's own profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::me;
use crate::state::AppState;

/// Routes mounted at `/me`.
///
/// ```text
/// GET    /profile           -> get_my_profile
/// PUT    /profile           -> update_my_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(me::get_my_profile).put(me::update_my_profile),
    )
}
