pub mod catalog;
pub mod health;
pub mod me;
pub mod profiles;
pub mod titles;
pub mod webhooks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /titles                         title directory (public)
///
/// /profiles                       list, ?q= &title_id= (public)
/// /profiles/{username}            single profile (public)
///
/// /catalog                        catalog page, ?q= &role= (public)
///
/// /me/profile                     get, update own profile (auth required)
///
/// /webhooks/identity              identity-provider events (signed)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/titles", titles::router())
        .nest("/profiles", profiles::router())
        .nest("/catalog", catalog::router())
        .nest("/me", me::router())
        .nest("/webhooks", webhooks::router())
}
