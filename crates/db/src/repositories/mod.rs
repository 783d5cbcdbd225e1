//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async queries
//! that accept `&PgPool` as the first argument.

pub mod account_repo;
pub mod profile_repo;
pub mod title_repo;

pub use account_repo::AccountRepo;
pub use profile_repo::ProfileRepo;
pub use title_repo::TitleRepo;
