use bookshelf_model::chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use bookshelf_model::{
    AuthorKey, AuthorTable, BookId, BookRecord, GenreKey, GenreTable,
    RawBookRecord,
};
use tracing::warn;

use crate::error::{CatalogError, MalformedReason, Result};

/// Turn one raw record into a `BookRecord`, or explain which field is
/// missing.
pub(super) fn convert_record(
    index: usize,
    raw: RawBookRecord,
) -> Result<BookRecord> {
    let missing = |field: &'static str| CatalogError::MalformedRecord {
        index,
        field,
        reason: MalformedReason::Missing,
    };

    let id = raw
        .id
        .and_then(|v| BookId::new(v).ok())
        .ok_or_else(|| missing("id"))?;
    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| missing("title"))?;
    let author = raw
        .author
        .and_then(|v| AuthorKey::new(v).ok())
        .ok_or_else(|| missing("author"))?;

    // Blank genre entries carry no key; drop them instead of failing.
    let genres = raw
        .genres
        .into_iter()
        .filter_map(|g| GenreKey::new(g).ok())
        .collect();

    let published = match raw.published.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => {
            let parsed = parse_published(text);
            if parsed.is_none() {
                warn!(
                    "Book {} has unreadable published date '{}'; ignoring it",
                    id, text
                );
            }
            parsed
        }
    };

    Ok(BookRecord {
        id,
        title,
        author,
        genres,
        image: raw.image.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        published,
    })
}

const LOCAL_DATE_TIME_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Accepts RFC 3339, ISO-8601 date-times without an offset, and calendar
/// dates down to a bare year. Anything without an offset is read as UTC.
fn parse_published(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Some(naive) = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    parse_calendar_date(text)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM` (first of the month) or `YYYY` (January 1st).
fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.splitn(3, '-');
    let year = parts.next().filter(|y| y.len() == 4)?.parse().ok()?;
    let month = parts.next().map_or(Some(1), |m| m.parse().ok())?;
    let day = parts.next().map_or(Some(1), |d| d.parse().ok())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub(super) fn warn_on_dangling_keys(
    record: &BookRecord,
    authors: &AuthorTable,
    genres: &GenreTable,
) {
    if !authors.contains_key(&record.author) {
        warn!(
            "Book {} references unknown author key '{}'",
            record.id, record.author
        );
    }
    for genre in record.genres.iter().filter(|g| !genres.contains_key(*g)) {
        warn!("Book {} references unknown genre key '{}'", record.id, genre);
    }
}
