use std::fmt;

use bookshelf_contracts::book_like::BookLike;
use bookshelf_model::{ANY_SENTINEL, AuthorKey, BookId, LookupTable};
use tracing::warn;

use crate::catalog::Catalog;

/// Shown in place of a display name whose key has no table entry.
pub const UNKNOWN_NAME: &str = "Unknown";

/// One entry of the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPreview {
    pub id: BookId,
    pub image: String,
    pub title: String,
    pub author_name: String,
}

impl BookPreview {
    pub fn from_book(book: &impl BookLike, catalog: &Catalog) -> Self {
        Self {
            id: book.book_id().clone(),
            image: book.image().to_string(),
            title: book.title().to_string(),
            author_name: author_name_or_unknown(catalog, book.author_key()),
        }
    }
}

/// Content of the detail overlay for a selected book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDetail {
    pub id: BookId,
    pub title: String,
    pub author_name: String,
    pub published_year: Option<i32>,
    pub image: String,
    pub description: String,
}

impl BookDetail {
    pub fn from_book(book: &impl BookLike, catalog: &Catalog) -> Self {
        Self {
            id: book.book_id().clone(),
            title: book.title().to_string(),
            author_name: author_name_or_unknown(catalog, book.author_key()),
            published_year: book.published_year(),
            image: book.image().to_string(),
            description: book.description().to_string(),
        }
    }

    /// `"Author (year)"`, or just the author when the year is unknown.
    pub fn subtitle(&self) -> String {
        match self.published_year {
            Some(year) => format!("{} ({})", self.author_name, year),
            None => self.author_name.clone(),
        }
    }
}

/// State of the "show more" affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowMore {
    pub remaining: usize,
}

impl ShowMore {
    pub fn is_enabled(&self) -> bool {
        self.remaining > 0
    }
}

impl fmt::Display for ShowMore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Show more ({})", self.remaining)
    }
}

/// Entry of an author or genre select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn any(label: &str) -> Self {
        Self {
            value: ANY_SENTINEL.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn author_options(catalog: &Catalog) -> Vec<SelectOption> {
    options("All Authors", catalog.authors())
}

pub fn genre_options(catalog: &Catalog) -> Vec<SelectOption> {
    options("All Genres", catalog.genres())
}

fn options<K: Ord + AsRef<str>>(
    any_label: &str,
    table: &LookupTable<K>,
) -> Vec<SelectOption> {
    std::iter::once(SelectOption::any(any_label))
        .chain(table.iter().map(|(key, name)| SelectOption {
            value: key.as_ref().to_string(),
            label: name.to_string(),
        }))
        .collect()
}

fn author_name_or_unknown(catalog: &Catalog, key: &AuthorKey) -> String {
    match catalog.resolve_author_name(key) {
        Ok(name) => name.to_string(),
        Err(err) => {
            warn!("Falling back to placeholder author name: {}", err);
            UNKNOWN_NAME.to_string()
        }
    }
}
