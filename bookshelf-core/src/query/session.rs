use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

use bookshelf_model::{BookId, BookRecord, FilterCriteria};
use tracing::debug;

use crate::catalog::Catalog;
use crate::query::filtering::matching_positions;
use crate::query::match_set::MatchSet;
use crate::query::pagination::PaginationCursor;

/// Active criteria, the match set they select and the pagination cursor
/// over it.
///
/// A session is owned by exactly one driver (the host's event handlers) and
/// mutated through `&mut self`; wrap it in
/// [`SharedQuerySession`](crate::query::SharedQuerySession) to share it.
#[derive(Debug, Clone)]
pub struct QuerySession<'a> {
    catalog: &'a Catalog,
    criteria: FilterCriteria,
    matches: MatchSet<'a>,
    cursor: PaginationCursor,
}

impl<'a> QuerySession<'a> {
    /// Start with the match-everything criteria on page 1.
    pub fn new(catalog: &'a Catalog, page_size: NonZeroUsize) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            matches: MatchSet::everything(catalog),
            cursor: PaginationCursor::new(page_size),
        }
    }

    /// Recompute the match set from the full catalog and restart pagination
    /// at page 1. An empty result is a normal state.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) -> &MatchSet<'a> {
        let positions = matching_positions(self.catalog, &criteria);
        debug!(
            "Applied filter ({}): {} of {} records match",
            criteria,
            positions.len(),
            self.catalog.len()
        );

        self.matches = MatchSet::new(self.catalog, positions);
        self.criteria = criteria;
        self.cursor.reset();
        &self.matches
    }

    /// Everything rendered up to and including the current page.
    pub fn current_slice(&self) -> Vec<&'a BookRecord> {
        self.matches.slice(self.cursor.rendered_range())
    }

    /// Hand out the next page and move the cursor past it.
    ///
    /// Past the end this returns an empty page and still advances; hosts are
    /// expected to consult [`remaining_count`](Self::remaining_count) first.
    pub fn advance_page(&mut self) -> Vec<&'a BookRecord> {
        let page = self.matches.slice(self.cursor.next_range());
        self.cursor.advance();
        debug!(
            "Advanced to page {}: {} new records, {} remaining",
            self.cursor.page(),
            page.len(),
            self.remaining_count()
        );
        page
    }

    /// Matches not yet rendered. Never negative.
    pub fn remaining_count(&self) -> usize {
        self.matches.len().saturating_sub(self.cursor.rendered_end())
    }

    /// Look up a record in the whole catalog, ignoring the current filter.
    pub fn find_by_id<Q>(&self, id: &Q) -> Option<&'a BookRecord>
    where
        BookId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.catalog.get(id)
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn matches(&self) -> &MatchSet<'a> {
        &self.matches
    }

    pub fn page(&self) -> usize {
        self.cursor.page()
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}
