//! Trait surfaces that describe interactions with Bookshelf data models.
#![allow(missing_docs)]

pub mod book_like;
pub mod browse;

/// Frequently used traits for host and presentation crates.
pub mod prelude {
    pub use super::book_like::BookLike;
    pub use super::browse::BrowseCommands;
}
