//! Shared configuration library for Bookshelf.
//!
//! This crate centralizes everything the core refuses to touch: resolving
//! the browse configuration (page size, data file) from files and the
//! environment, reading the catalog data file, and persisting the single
//! theme preference. Hosts such as `bookshelfctl` call into it once at
//! startup and hand the results to `bookshelf-core`.

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod preferences;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::browse::{BrowseConfig, BrowseConfigSource, DEFAULT_PAGE_SIZE};
pub use models::catalog_data::CatalogData;
pub use preferences::PreferenceStore;
