#![allow(dead_code)]

use bookshelf_core::Catalog;
use bookshelf_model::{
    AuthorKey, AuthorTable, GenreKey, GenreTable, RawBookRecord,
};

pub fn raw(
    id: &str,
    title: &str,
    author: &str,
    genres: &[&str],
) -> RawBookRecord {
    RawBookRecord {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        image: Some(format!("covers/{id}.jpg")),
        description: Some(format!("About {title}")),
        published: Some("1999-03-01T00:00:00.000Z".to_string()),
    }
}

pub fn authors(keys: &[(&str, &str)]) -> AuthorTable {
    keys.iter()
        .map(|(k, v)| (AuthorKey::new(*k).unwrap(), v.to_string()))
        .collect()
}

pub fn genres(keys: &[(&str, &str)]) -> GenreTable {
    keys.iter()
        .map(|(k, v)| (GenreKey::new(*k).unwrap(), v.to_string()))
        .collect()
}

/// `[A(g1, a1), B(g2, a1), C(g1, a2)]`
pub fn abc_catalog() -> Catalog {
    Catalog::load(
        vec![
            raw("A", "Alpha", "a1", &["g1"]),
            raw("B", "Bravo", "a1", &["g2"]),
            raw("C", "Charlie", "a2", &["g1"]),
        ],
        authors(&[("a1", "First Author"), ("a2", "Second Author")]),
        genres(&[("g1", "Genre One"), ("g2", "Genre Two")]),
    )
    .unwrap()
}

/// A larger catalog with overlapping titles, authors and genres.
pub fn mixed_catalog() -> Catalog {
    let titles = [
        "The Left Hand of Darkness",
        "Left Behind",
        "DARKNESS VISIBLE",
        "A Wizard of Earthsea",
        "the lathe of heaven",
        "Heavenly Bodies",
        "Earth Abides",
        "Visible Cities",
        "Hand to Mouth",
        "Wizard and Glass",
        "Mouthful of Birds",
        "Glass Houses",
        "Birds Without Wings",
    ];
    let raw = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let author = format!("a{}", i % 3);
            let genre_a = format!("g{}", i % 4);
            let genre_b = format!("g{}", (i * 7) % 5);
            raw(
                &format!("book-{i:02}"),
                title,
                &author,
                &[genre_a.as_str(), genre_b.as_str()],
            )
        })
        .collect::<Vec<_>>();

    Catalog::load(
        raw,
        authors(&[("a0", "Zero"), ("a1", "One"), ("a2", "Two")]),
        genres(&[
            ("g0", "G0"),
            ("g1", "G1"),
            ("g2", "G2"),
            ("g3", "G3"),
            ("g4", "G4"),
        ]),
    )
    .unwrap()
}
