//! Row models and DTOs, one module per table.

pub mod account;
pub mod profile;
pub mod title;
