//! Presentation focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in host crates.

pub use super::book::{BookRecord, RawBookRecord};
pub use super::filter_types::{
    AuthorFilter, FilterCriteria, GenreFilter, TitleQuery,
};
pub use super::ids::{AuthorKey, BookId, GenreKey};
pub use super::lookup::{AuthorTable, GenreTable, LookupTable};
pub use super::theme::Theme;
