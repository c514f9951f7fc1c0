//! Shikimori catalog library for looking up anime metadata.
//!
//! This library wraps the Shikimori REST API: anime listings with filters,
//! single titles, title search, genres and studios.

pub mod api;
pub mod season;

pub use api::{CatalogClient, CatalogError, ListQuery, Record};
pub use season::Season;
