use axum::routing::post;
use axum::Router;

use crate::handlers::webhooks;
use crate::state::AppState;

/// Routes mounted at `/webhooks`.
///
/// ```text
/// POST   /identity          -> identity_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/identity", post(webhooks::identity_event))
}
