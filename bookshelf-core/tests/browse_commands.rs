mod common;

use std::num::NonZeroUsize;

use bookshelf_contracts::prelude::*;
use bookshelf_core::{BookPreview, BrowseController, Catalog, ShowMore};
use bookshelf_model::{BookId, FilterCriteria};

fn controller(catalog: &Catalog, page_size: usize) -> BrowseController<'_> {
    BrowseController::new(catalog, NonZeroUsize::new(page_size).unwrap())
}

fn titles(items: &[BookPreview]) -> Vec<&str> {
    items.iter().map(|p| p.title.as_str()).collect()
}

#[test]
fn initial_view_shows_first_page_of_everything() {
    let catalog = common::abc_catalog();
    let browse = controller(&catalog, 2);

    let view = browse.initial_view();
    assert_eq!(titles(&view.items), vec!["Alpha", "Bravo"]);
    assert_eq!(view.items[0].author_name, "First Author");
    assert_eq!(view.items[0].image, "covers/A.jpg");
    assert!(!view.show_empty_message);
    assert_eq!(view.show_more, ShowMore { remaining: 1 });
    assert_eq!(view.show_more.to_string(), "Show more (1)");
}

#[test]
fn expanding_appends_next_page_and_disables_at_end() {
    let catalog = common::abc_catalog();
    let mut browse = controller(&catalog, 2);

    let append = browse.on_expand_requested();
    assert_eq!(titles(&append.items), vec!["Charlie"]);
    assert_eq!(append.items[0].author_name, "Second Author");
    assert!(!append.show_more.is_enabled());
    assert_eq!(browse.session().page(), 2);
}

#[test]
fn filter_submit_replaces_list_and_flags_empty_results() {
    let catalog = common::abc_catalog();
    let mut browse = controller(&catalog, 1);
    browse.on_expand_requested();

    let refresh =
        browse.on_filter_submit(FilterCriteria::from_form("", "a1", "any"));
    assert_eq!(titles(&refresh.items), vec!["Alpha"]);
    assert_eq!(refresh.show_more.remaining, 1);
    assert_eq!(browse.session().page(), 1);

    let refresh = browse
        .on_filter_submit(FilterCriteria::from_form("nothing", "any", "any"));
    assert!(refresh.items.is_empty());
    assert!(refresh.show_empty_message);
    assert_eq!(refresh.show_more.to_string(), "Show more (0)");
}

#[test]
fn selecting_a_record_opens_detail_regardless_of_filter() {
    let catalog = common::abc_catalog();
    let mut browse = controller(&catalog, 2);
    browse.on_filter_submit(FilterCriteria::from_form("", "any", "g2"));

    let detail = browse
        .on_record_selected(&BookId::new("C").unwrap())
        .unwrap();
    assert_eq!(detail.title, "Charlie");
    assert_eq!(detail.subtitle(), "Second Author (1999)");
    assert_eq!(detail.description, "About Charlie");

    assert!(browse
        .on_record_selected(&BookId::new("Z").unwrap())
        .is_none());
}

#[test]
fn select_options_list_any_first() {
    let catalog = common::abc_catalog();
    let browse = controller(&catalog, 2);

    let genres = browse.genre_options();
    let labels: Vec<&str> = genres.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["All Genres", "Genre One", "Genre Two"]);

    let authors = browse.author_options();
    assert_eq!(authors[0].value, "any");
    assert_eq!(authors[2].value, "a2");
}
