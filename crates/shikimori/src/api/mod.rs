//! Shikimori API client implementation.
//!
//! This module provides a thin client for the Shikimori anime catalog API:
//! listing with filters, lookup by id, title search, genres and studios.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use query::{ListQuery, MAX_LIMIT};
pub use types::Record;
