use std::num::NonZeroUsize;
use std::ops::Range;

/// 1-based page counter over a match set with a fixed page size.
///
/// `page` counts pages already handed to the host, so the rendered prefix
/// is `0..page * page_size` and the next unseen page follows directly after
/// it. Arithmetic saturates instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    page: NonZeroUsize,
    page_size: NonZeroUsize,
}

impl PaginationCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page: NonZeroUsize::MIN,
            page_size,
        }
    }

    pub fn page(&self) -> usize {
        self.page.get()
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// End (exclusive) of everything rendered so far.
    pub fn rendered_end(&self) -> usize {
        self.page.get().saturating_mul(self.page_size.get())
    }

    pub fn rendered_range(&self) -> Range<usize> {
        0..self.rendered_end()
    }

    /// Range of the page an advance would hand out.
    pub fn next_range(&self) -> Range<usize> {
        let start = self.rendered_end();
        start..start.saturating_add(self.page_size.get())
    }

    pub fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.page = NonZeroUsize::MIN;
    }
}
