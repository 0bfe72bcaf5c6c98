//! # Bookshelf Core
//!
//! Data and query model of the Bookshelf catalog browser.
//!
//! ## Overview
//!
//! - **Catalog**: immutable collection of book records plus author and genre
//!   lookup tables, built once from raw input
//! - **Query session**: active filter criteria, the ordered match set they
//!   select, and the pagination cursor over that match set
//! - **Browse controller**: the command surface a host wires to its
//!   interaction layer, producing list and detail view models
//!
//! Everything here is synchronous and free of I/O. Loading data files and
//! persisting preferences belong to `bookshelf-config`.
//!
//! ## Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use bookshelf_core::{Catalog, QuerySession};
//! use bookshelf_model::{AuthorTable, FilterCriteria, GenreTable, RawBookRecord};
//!
//! let raw = vec![RawBookRecord {
//!     id: Some("b1".into()),
//!     title: Some("Dune".into()),
//!     author: Some("a1".into()),
//!     ..Default::default()
//! }];
//! let catalog = Catalog::load(raw, AuthorTable::new(), GenreTable::new())?;
//! let mut session = QuerySession::new(&catalog, NonZeroUsize::MIN);
//!
//! session.apply_filter(FilterCriteria::from_form("dune", "any", "any"));
//! assert_eq!(session.current_slice().len(), 1);
//! assert_eq!(session.remaining_count(), 0);
//! # Ok::<(), bookshelf_core::CatalogError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Presentation view models and the browse command implementation
pub mod browse;

/// Catalog construction and lookups
pub mod catalog;

/// Error types
pub mod error;

/// Filtering, match sets and pagination
pub mod query;

pub use browse::{
    BookDetail, BookPreview, BrowseController, ListAppend, ListRefresh,
    SelectOption, ShowMore,
};
pub use catalog::Catalog;
pub use error::{CatalogError, LookupKind, MalformedReason, Result};
pub use query::{MatchSet, PaginationCursor, QuerySession, SharedQuerySession};
