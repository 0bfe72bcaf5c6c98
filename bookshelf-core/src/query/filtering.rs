//! Predicates that decide whether a record belongs to the match set.
//!
//! Each predicate looks at one criterion only; a record matches when all
//! three hold. Match sets are always recomputed from the full catalog, in
//! catalog order.

use bookshelf_contracts::book_like::BookLike;
use bookshelf_model::{AuthorFilter, FilterCriteria, GenreFilter, TitleQuery};

use crate::catalog::Catalog;

/// Case-insensitive substring test. `folded_title` must already be
/// lower-cased.
pub fn title_matches(query: &TitleQuery, folded_title: &str) -> bool {
    query.is_unconstrained() || folded_title.contains(query.folded())
}

pub fn author_matches(filter: &AuthorFilter, book: &impl BookLike) -> bool {
    match filter {
        AuthorFilter::Any => true,
        AuthorFilter::Exact(key) => book.author_key() == key,
    }
}

pub fn genre_matches(filter: &GenreFilter, book: &impl BookLike) -> bool {
    match filter {
        GenreFilter::Any => true,
        GenreFilter::Includes(key) => book.has_genre(key),
    }
}

pub fn record_matches(
    criteria: &FilterCriteria,
    book: &impl BookLike,
    folded_title: &str,
) -> bool {
    title_matches(&criteria.title, folded_title)
        && author_matches(&criteria.author, book)
        && genre_matches(&criteria.genre, book)
}

/// Positions of every matching record, ascending.
pub(crate) fn matching_positions(
    catalog: &Catalog,
    criteria: &FilterCriteria,
) -> Vec<usize> {
    if criteria.is_unconstrained() {
        return (0..catalog.len()).collect();
    }

    (0..catalog.len())
        .filter(|&position| {
            record_matches(
                criteria,
                catalog.record_at(position),
                catalog.folded_title_at(position),
            )
        })
        .collect()
}
