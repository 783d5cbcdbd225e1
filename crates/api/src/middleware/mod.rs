//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the caller's identity from a Bearer token,
//!   extracted as `Option<AuthUser>`.

pub mod auth;
