use std::num::NonZeroUsize;

use bookshelf_contracts::browse::BrowseCommands;
use bookshelf_model::{BookId, BookRecord, FilterCriteria};

use super::view_models::{
    BookDetail, BookPreview, SelectOption, ShowMore, author_options,
    genre_options,
};
use crate::catalog::Catalog;
use crate::query::QuerySession;

/// Replaces the whole rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRefresh {
    pub items: Vec<BookPreview>,
    /// The "no results" message should be visible.
    pub show_empty_message: bool,
    pub show_more: ShowMore,
}

/// Appended below the rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListAppend {
    pub items: Vec<BookPreview>,
    pub show_more: ShowMore,
}

/// Owns the query session on behalf of a host and translates its commands
/// into view updates.
#[derive(Debug, Clone)]
pub struct BrowseController<'a> {
    session: QuerySession<'a>,
}

impl<'a> BrowseController<'a> {
    pub fn new(catalog: &'a Catalog, page_size: NonZeroUsize) -> Self {
        Self {
            session: QuerySession::new(catalog, page_size),
        }
    }

    /// The list as it looks before any search: first page of everything.
    pub fn initial_view(&self) -> ListRefresh {
        self.refresh()
    }

    pub fn session(&self) -> &QuerySession<'a> {
        &self.session
    }

    pub fn author_options(&self) -> Vec<SelectOption> {
        author_options(self.session.catalog())
    }

    pub fn genre_options(&self) -> Vec<SelectOption> {
        genre_options(self.session.catalog())
    }

    pub fn show_more(&self) -> ShowMore {
        ShowMore {
            remaining: self.session.remaining_count(),
        }
    }

    fn refresh(&self) -> ListRefresh {
        ListRefresh {
            items: self.previews(self.session.current_slice()),
            show_empty_message: self.session.matches().is_empty(),
            show_more: self.show_more(),
        }
    }

    fn previews(&self, books: Vec<&BookRecord>) -> Vec<BookPreview> {
        let catalog = self.session.catalog();
        books
            .into_iter()
            .map(|book| BookPreview::from_book(book, catalog))
            .collect()
    }
}

impl BrowseCommands for BrowseController<'_> {
    type Refresh = ListRefresh;
    type Append = ListAppend;
    type Detail = BookDetail;

    fn on_filter_submit(&mut self, criteria: FilterCriteria) -> ListRefresh {
        self.session.apply_filter(criteria);
        self.refresh()
    }

    fn on_expand_requested(&mut self) -> ListAppend {
        let page = self.session.advance_page();
        ListAppend {
            items: self.previews(page),
            show_more: self.show_more(),
        }
    }

    fn on_record_selected(&self, id: &BookId) -> Option<BookDetail> {
        self.session
            .find_by_id(id)
            .map(|book| BookDetail::from_book(book, self.session.catalog()))
    }
}
