//! Core data model definitions shared across Bookshelf crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod book;
pub mod error;
pub mod filter_types;
pub mod ids;
pub mod lookup;
pub mod prelude;
pub mod theme;

// Intentionally curated re-exports for downstream consumers.
pub use book::{BookRecord, RawBookRecord};
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{
    ANY_SENTINEL, AuthorFilter, FilterCriteria, GenreFilter, TitleQuery,
};
pub use ids::{AuthorKey, BookId, GenreKey};
pub use lookup::{AuthorTable, GenreTable, LookupTable};
pub use theme::{Palette, Rgb, Theme};
