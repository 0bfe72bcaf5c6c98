//! Catalog bounded context.
//!
//! The catalog owns every `BookRecord` and both lookup tables for the
//! lifetime of the process. Query state lives in
//! [`QuerySession`](crate::query::QuerySession), which only borrows from
//! here.

mod loader;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use bookshelf_model::{
    AuthorKey, AuthorTable, BookId, BookRecord, GenreKey, GenreTable,
    RawBookRecord,
};
use tracing::info;

use crate::error::{CatalogError, LookupKind, MalformedReason, Result};

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<BookRecord>,
    /// Case-folded titles, parallel to `records`.
    folded_titles: Vec<String>,
    index: HashMap<BookId, usize>,
    authors: AuthorTable,
    genres: GenreTable,
}

impl Catalog {
    /// Build the catalog from raw input. Only the structural shape is
    /// checked: `id`, `title` and `author` must be present and ids must be
    /// unique. An unreadable `published` value is logged and dropped. Author
    /// and genre keys are trusted; dangling ones are logged, not rejected.
    pub fn load(
        raw_records: impl IntoIterator<Item = RawBookRecord>,
        authors: AuthorTable,
        genres: GenreTable,
    ) -> Result<Self> {
        let mut records = Vec::new();
        let mut index = HashMap::new();

        for (position, raw) in raw_records.into_iter().enumerate() {
            let record = loader::convert_record(position, raw)?;
            if index.contains_key(&record.id) {
                return Err(CatalogError::MalformedRecord {
                    index: position,
                    field: "id",
                    reason: MalformedReason::DuplicateId(
                        record.id.to_string(),
                    ),
                });
            }
            loader::warn_on_dangling_keys(&record, &authors, &genres);
            index.insert(record.id.clone(), records.len());
            records.push(record);
        }

        let folded_titles =
            records.iter().map(|r| r.title.to_lowercase()).collect();

        info!(
            "Loaded catalog: {} records, {} authors, {} genres",
            records.len(),
            authors.len(),
            genres.len()
        );

        Ok(Self {
            records,
            folded_titles,
            index,
            authors,
            genres,
        })
    }

    /// Every record, in load order.
    pub fn all_records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by id across the whole catalog.
    pub fn get<Q>(&self, id: &Q) -> Option<&BookRecord>
    where
        BookId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(id).map(|&position| &self.records[position])
    }

    pub fn resolve_author_name(&self, key: &AuthorKey) -> Result<&str> {
        self.authors
            .get(key)
            .ok_or_else(|| CatalogError::UnknownKey {
                table: LookupKind::Author,
                key: key.to_string(),
            })
    }

    pub fn resolve_genre_name(&self, key: &GenreKey) -> Result<&str> {
        self.genres
            .get(key)
            .ok_or_else(|| CatalogError::UnknownKey {
                table: LookupKind::Genre,
                key: key.to_string(),
            })
    }

    pub fn authors(&self) -> &AuthorTable {
        &self.authors
    }

    pub fn genres(&self) -> &GenreTable {
        &self.genres
    }

    pub(crate) fn record_at(&self, position: usize) -> &BookRecord {
        &self.records[position]
    }

    pub(crate) fn folded_title_at(&self, position: usize) -> &str {
        &self.folded_titles[position]
    }
}
