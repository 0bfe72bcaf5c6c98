use std::fmt;

use crate::ids::{AuthorKey, GenreKey};

/// Form value the host uses for "no constraint" in the author and genre
/// selects.
pub const ANY_SENTINEL: &str = "any";

/// Title constraint. Stored trimmed, with a case-folded copy for matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleQuery {
    text: String,
    folded: String,
}

impl TitleQuery {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    /// An empty query places no constraint on titles.
    pub fn is_unconstrained(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthorFilter {
    #[default]
    Any,
    Exact(AuthorKey),
}

impl AuthorFilter {
    /// Map a select value to a filter; the sentinel and blank input mean
    /// `Any`.
    pub fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        if value == ANY_SENTINEL {
            return AuthorFilter::Any;
        }
        match AuthorKey::new(value) {
            Ok(key) => AuthorFilter::Exact(key),
            Err(_) => AuthorFilter::Any,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, AuthorFilter::Any)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    Any,
    Includes(GenreKey),
}

impl GenreFilter {
    pub fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        if value == ANY_SENTINEL {
            return GenreFilter::Any;
        }
        match GenreKey::new(value) {
            Ok(key) => GenreFilter::Includes(key),
            Err(_) => GenreFilter::Any,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, GenreFilter::Any)
    }
}

/// Active search criteria. `FilterCriteria::default()` matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: TitleQuery,
    pub author: AuthorFilter,
    pub genre: GenreFilter,
}

impl FilterCriteria {
    /// Build criteria from the three raw search form fields.
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self {
            title: TitleQuery::new(title),
            author: AuthorFilter::from_form_value(author),
            genre: GenreFilter::from_form_value(genre),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = TitleQuery::new(title);
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.title.is_unconstrained()
            && self.author.is_any()
            && self.genre.is_any()
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let author = match &self.author {
            AuthorFilter::Any => ANY_SENTINEL,
            AuthorFilter::Exact(key) => key.as_str(),
        };
        let genre = match &self.genre {
            GenreFilter::Any => ANY_SENTINEL,
            GenreFilter::Includes(key) => key.as_str(),
        };
        write!(
            f,
            "title={:?} author={} genre={}",
            self.title.as_str(),
            author,
            genre
        )
    }
}
