//! Domain layer of the profile catalog.
//!
//! Holds the catalog types, the [`store::CatalogStore`] seam that storage
//! backends implement, and the read/write operations built on top of it.
//! This crate has no database or HTTP dependencies so it can be exercised
//! directly against the in-memory store.

pub mod catalog;
pub mod error;
pub mod identity;
pub mod memory;
pub mod models;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
pub mod webhook;
