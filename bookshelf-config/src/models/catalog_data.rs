use bookshelf_core::Catalog;
use bookshelf_model::{AuthorTable, GenreTable, RawBookRecord};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::info;

use crate::loader::error::ConfigLoadError;

/// Raw catalog input as stored on disk:
///
/// ```json
/// {
///   "books": [{ "id": "...", "title": "...", "author": "a1", "genres": ["g1"] }],
///   "authors": { "a1": "Author Name" },
///   "genres": { "g1": "Genre Name" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogData {
    pub books: Vec<RawBookRecord>,
    pub authors: AuthorTable,
    pub genres: GenreTable,
}

impl CatalogData {
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = fs::read_to_string(path).map_err(|source| {
            ConfigLoadError::DataFileIo {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let data: Self = serde_json::from_str(&contents).map_err(|source| {
            ConfigLoadError::DataFileParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(
            "Read catalog data from {}: {} books",
            path.display(),
            data.books.len()
        );
        Ok(data)
    }

    /// Hand the raw data to [`Catalog::load`].
    pub fn into_catalog(self) -> Result<Catalog, ConfigLoadError> {
        Ok(Catalog::load(self.books, self.authors, self.genres)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::CatalogError;

    const SAMPLE: &str = r#"{
        "books": [
            {
                "id": "760b3450-9aa1-4f9b-a3e6-2ab3e8f8a1e1",
                "title": "Norwegian Wood",
                "author": "a1",
                "genres": ["g1", "g2"],
                "image": "https://covers.example/nw.jpg",
                "description": "A nostalgic story of loss.",
                "published": "1987-09-04T00:00:00.000Z"
            }
        ],
        "authors": { "a1": "Haruki Murakami" },
        "genres": { "g1": "Fiction", "g2": "Romance" }
    }"#;

    #[test]
    fn loads_and_builds_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = CatalogData::load_from_file(&path)
            .unwrap()
            .into_catalog()
            .unwrap();
        assert_eq!(catalog.len(), 1);
        let book = &catalog.all_records()[0];
        assert_eq!(catalog.resolve_author_name(&book.author), Ok("Haruki Murakami"));
        assert_eq!(book.published_year(), Some(1987));
        assert_eq!(catalog.genres().len(), 2);
    }

    #[test]
    fn local_timestamps_without_offset_are_accepted() {
        let data: CatalogData = serde_json::from_str(
            r#"{
                "books": [
                    { "id": "b1", "title": "Kafka on the Shore", "author": "a1",
                      "published": "2002-09-12T00:00:00" },
                    { "id": "b2", "title": "After Dark", "author": "a1",
                      "published": "2004-09-07T00:00:00.000" }
                ],
                "authors": { "a1": "Haruki Murakami" }
            }"#,
        )
        .unwrap();
        let catalog = data.into_catalog().unwrap();
        let years: Vec<_> = catalog
            .all_records()
            .iter()
            .map(|book| book.published_year())
            .collect();
        assert_eq!(years, vec![Some(2002), Some(2004)]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogData::load_from_file(&dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::DataFileIo { .. }));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "{ \"books\": [").unwrap();
        let err = CatalogData::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigLoadError::DataFileParse { .. }));
    }

    #[test]
    fn malformed_records_surface_catalog_errors() {
        let data: CatalogData =
            serde_json::from_str(r#"{ "books": [{ "id": "x", "author": "a1" }] }"#)
                .unwrap();
        let err = data.into_catalog().unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::Catalog(CatalogError::MalformedRecord {
                field: "title",
                ..
            })
        ));
    }
}
