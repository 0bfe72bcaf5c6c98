use crate::chrono::{DateTime, Datelike, Utc};
use crate::ids::{AuthorKey, BookId, GenreKey};

/// A single catalog entry. Built once when the catalog loads and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: AuthorKey,
    /// Genre keys, treated as a set for membership tests.
    pub genres: Vec<GenreKey>,
    /// Opaque image locator handed to the host as-is.
    pub image: String,
    pub description: String,
    pub published: Option<DateTime<Utc>>,
}

impl BookRecord {
    pub fn has_genre(&self, genre: &GenreKey) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    pub fn published_year(&self) -> Option<i32> {
        self.published.map(|ts| ts.year())
    }
}

/// Structural input shape of a book record, as it arrives from the data
/// file. Every field is optional here; `Catalog::load` decides which
/// absences are fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawBookRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genres: Vec<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    /// ISO-8601 / RFC 3339 timestamp.
    pub published: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrono::TimeZone;

    fn record() -> BookRecord {
        BookRecord {
            id: BookId::new("b1").unwrap(),
            title: "Dune".to_string(),
            author: AuthorKey::new("a1").unwrap(),
            genres: vec![
                GenreKey::new("g1").unwrap(),
                GenreKey::new("g2").unwrap(),
            ],
            image: "https://covers.example/dune.jpg".to_string(),
            description: String::new(),
            published: Some(Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap()),
        }
    }

    #[test]
    fn genre_membership() {
        let book = record();
        assert!(book.has_genre(&GenreKey::new("g2").unwrap()));
        assert!(!book.has_genre(&GenreKey::new("g3").unwrap()));
    }

    #[test]
    fn published_year_follows_timestamp() {
        let mut book = record();
        assert_eq!(book.published_year(), Some(1965));
        book.published = None;
        assert_eq!(book.published_year(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn raw_record_tolerates_missing_fields() {
        let raw: RawBookRecord =
            serde_json::from_str(r#"{ "id": "x", "genres": ["g1"] }"#)
                .unwrap();
        assert_eq!(raw.id.as_deref(), Some("x"));
        assert_eq!(raw.title, None);
        assert_eq!(raw.genres, vec!["g1".to_string()]);
    }
}
