use bookshelf_model::filter_types::FilterCriteria;
use bookshelf_model::ids::BookId;

/// Commands a host forwards from its interaction layer (form submits,
/// "show more" clicks, preview selection). Implementors own the query state;
/// hosts only see the returned view updates.
pub trait BrowseCommands {
    /// Replaces the rendered list.
    type Refresh;
    /// Appended to the rendered list.
    type Append;
    /// Opened in the detail view.
    type Detail;

    /// A new search was submitted. Pagination restarts from the first page.
    fn on_filter_submit(&mut self, criteria: FilterCriteria) -> Self::Refresh;

    /// The user asked for the next page of results.
    fn on_expand_requested(&mut self) -> Self::Append;

    /// A preview was selected. `None` means the id is unknown and the detail
    /// view stays closed.
    fn on_record_selected(&self, id: &BookId) -> Option<Self::Detail>;
}
