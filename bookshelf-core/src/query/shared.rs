use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

use bookshelf_model::{BookId, BookRecord, FilterCriteria};
use parking_lot::Mutex;

use crate::catalog::Catalog;
use crate::query::match_set::MatchSet;
use crate::query::session::QuerySession;

/// A [`QuerySession`] behind one exclusive lock.
///
/// `apply_filter` rewrites criteria, matches and cursor together, so every
/// operation, reads included, takes the same lock. Returned records borrow
/// from the catalog, not from the guard.
#[derive(Debug)]
pub struct SharedQuerySession<'a> {
    inner: Mutex<QuerySession<'a>>,
}

impl<'a> SharedQuerySession<'a> {
    pub fn new(catalog: &'a Catalog, page_size: NonZeroUsize) -> Self {
        Self::from_session(QuerySession::new(catalog, page_size))
    }

    pub fn from_session(session: QuerySession<'a>) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    /// Snapshot of the new match set.
    pub fn apply_filter(&self, criteria: FilterCriteria) -> MatchSet<'a> {
        self.inner.lock().apply_filter(criteria).clone()
    }

    pub fn current_slice(&self) -> Vec<&'a BookRecord> {
        self.inner.lock().current_slice()
    }

    pub fn advance_page(&self) -> Vec<&'a BookRecord> {
        self.inner.lock().advance_page()
    }

    pub fn remaining_count(&self) -> usize {
        self.inner.lock().remaining_count()
    }

    pub fn find_by_id<Q>(&self, id: &Q) -> Option<&'a BookRecord>
    where
        BookId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().find_by_id(id)
    }

    pub fn page(&self) -> usize {
        self.inner.lock().page()
    }

    /// Run several operations atomically with respect to other callers.
    pub fn with_session<R>(
        &self,
        f: impl FnOnce(&mut QuerySession<'a>) -> R,
    ) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_model::{AuthorTable, GenreTable, RawBookRecord};
    use std::collections::HashSet;

    fn catalog(n: usize) -> Catalog {
        let raw = (0..n).map(|i| RawBookRecord {
            id: Some(format!("b{i}")),
            title: Some(format!("Book {i}")),
            author: Some("a1".to_string()),
            ..Default::default()
        });
        Catalog::load(raw, AuthorTable::new(), GenreTable::new()).unwrap()
    }

    #[test]
    fn concurrent_advances_hand_out_disjoint_pages() {
        let catalog = catalog(103);
        let shared =
            SharedQuerySession::new(&catalog, NonZeroUsize::new(3).unwrap());
        let first: Vec<String> = shared
            .current_slice()
            .iter()
            .map(|r| r.id.to_string())
            .collect();

        let pages: Vec<Vec<String>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        let mut seen = Vec::new();
                        while shared.remaining_count() > 0 {
                            seen.extend(
                                shared
                                    .advance_page()
                                    .iter()
                                    .map(|r| r.id.to_string()),
                            );
                        }
                        seen
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let mut all: Vec<String> = first;
        all.extend(pages.into_iter().flatten());
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(all.len(), 103);
        assert_eq!(unique.len(), 103);
    }

    #[test]
    fn with_session_groups_operations() {
        let catalog = catalog(6);
        let shared =
            SharedQuerySession::new(&catalog, NonZeroUsize::new(2).unwrap());
        let (page, remaining) = shared.with_session(|session| {
            session.advance_page();
            (session.page(), session.remaining_count())
        });
        assert_eq!((page, remaining), (2, 2));

        let matches =
            shared.apply_filter(FilterCriteria::from_form("book 5", "any", "any"));
        assert_eq!(matches.len(), 1);
        assert_eq!(shared.page(), 1);
        assert!(shared.find_by_id("b0").is_some());
    }
}
