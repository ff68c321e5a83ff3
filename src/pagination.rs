/// Paging metadata derived from the `total`/`startAt`/`maxResults` fields
/// reported by the search endpoint. The server does not return this; it is
/// computed client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub total: u32,
    pub start_at: u32,
    pub max_results: u32,
    /// Zero-based index of the current page.
    pub page: u32,
    pub page_count: u32,
    /// Zero-based page indices, `[0, page_count)`.
    pub pages: Vec<u32>,
}

impl Pagination {
    pub fn new(total: u32, start_at: u32, max_results: u32) -> Self {
        let mut pagination = Self {
            total,
            start_at,
            max_results,
            ..Self::default()
        };
        pagination.compute();
        pagination
    }

    /// Recompute the derived fields from `total`, `start_at` and
    /// `max_results`. `max_results` must be non-zero.
    pub fn compute(&mut self) {
        self.page_count = self.total.div_ceil(self.max_results);
        self.page = self.start_at.div_ceil(self.max_results);
        self.pages = (0..self.page_count).collect();
    }
}
