//! Identity-token handling.
//!
//! - [`jwt`] -- verification (and, for tooling and tests, issuing) of the
//!   HS256 tokens the identity provider hands to signed-in users.

pub mod jwt;
