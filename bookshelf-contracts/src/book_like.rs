use bookshelf_model::book::BookRecord;
use bookshelf_model::ids::{AuthorKey, BookId, GenreKey};

/// Read access to a book, independent of how it is stored.
pub trait BookLike {
    fn book_id(&self) -> &BookId;
    fn title(&self) -> &str;
    fn author_key(&self) -> &AuthorKey;
    fn genre_keys(&self) -> &[GenreKey];
    fn image(&self) -> &str;
    fn description(&self) -> &str;
    fn published_year(&self) -> Option<i32>;

    fn has_genre(&self, genre: &GenreKey) -> bool {
        self.genre_keys().iter().any(|g| g == genre)
    }
}

impl BookLike for BookRecord {
    fn book_id(&self) -> &BookId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn author_key(&self) -> &AuthorKey {
        &self.author
    }

    fn genre_keys(&self) -> &[GenreKey] {
        &self.genres
    }

    fn image(&self) -> &str {
        &self.image
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn published_year(&self) -> Option<i32> {
        BookRecord::published_year(self)
    }
}

impl<T: BookLike + ?Sized> BookLike for &T {
    fn book_id(&self) -> &BookId {
        (**self).book_id()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn author_key(&self) -> &AuthorKey {
        (**self).author_key()
    }

    fn genre_keys(&self) -> &[GenreKey] {
        (**self).genre_keys()
    }

    fn image(&self) -> &str {
        (**self).image()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn published_year(&self) -> Option<i32> {
        (**self).published_year()
    }
}
