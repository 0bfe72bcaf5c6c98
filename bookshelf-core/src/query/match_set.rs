use std::ops::Range;

use bookshelf_model::{BookId, BookRecord};

use crate::catalog::Catalog;

/// Ordered selection of catalog records. Holds positions into the catalog,
/// never copies of the records themselves.
#[derive(Debug, Clone)]
pub struct MatchSet<'a> {
    catalog: &'a Catalog,
    positions: Vec<usize>,
}

impl<'a> MatchSet<'a> {
    pub(crate) fn new(catalog: &'a Catalog, positions: Vec<usize>) -> Self {
        debug_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        Self { catalog, positions }
    }

    /// Every record of the catalog, in load order.
    pub(crate) fn everything(catalog: &'a Catalog) -> Self {
        Self::new(catalog, (0..catalog.len()).collect())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a BookRecord> {
        self.positions
            .get(index)
            .map(|&position| self.catalog.record_at(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a BookRecord> + '_ {
        let catalog = self.catalog;
        self.positions
            .iter()
            .map(move |&position| catalog.record_at(position))
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a BookId> + '_ {
        self.iter().map(|record| &record.id)
    }

    /// Records in `range`, clamped to the bounds of the set. Out-of-range
    /// requests yield an empty vector.
    pub fn slice(&self, range: Range<usize>) -> Vec<&'a BookRecord> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let catalog = self.catalog;
        self.positions[start..end]
            .iter()
            .map(|&position| catalog.record_at(position))
            .collect()
    }
}
