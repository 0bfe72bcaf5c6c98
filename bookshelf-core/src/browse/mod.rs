//! Presentation-facing layer: the [`BrowseCommands`] implementation the
//! host drives, and the plain view models it renders.
//!
//! [`BrowseCommands`]: bookshelf_contracts::browse::BrowseCommands

mod controller;
mod view_models;

pub use controller::{BrowseController, ListAppend, ListRefresh};
pub use view_models::{
    BookDetail, BookPreview, SelectOption, ShowMore, UNKNOWN_NAME,
    author_options, genre_options,
};
