use crate::view_model::{ItemRangeView, PagerViewModel};
use crate::window::{control_hidden, item_range, page_window};

/// Page-size choices offered when the caller does not supply its own set.
pub const DEFAULT_PAGE_SIZE_OPTIONS: &[u64] = &[10, 20, 50, 100];

/// Snapshot of the counts a pager is rendered from.
///
/// Rebuilt from caller-supplied values on every render; the pager tracks
/// nothing between interactions. `current_page` is expected to lie within
/// `[1, total_pages]` when there is at least one page; the snapshot does not
/// validate this and trusts the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerState {
    current_page: u64,
    total_pages: u64,
    total_items: u64,
    page_size: u64,
    page_size_options: Vec<u64>,
}

impl PagerState {
    pub fn new(current_page: u64, total_pages: u64, total_items: u64, page_size: u64) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            page_size,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }

    /// Replace the default page-size choices with a caller-supplied set.
    pub fn with_page_size_options(mut self, options: Vec<u64>) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[u64] {
        &self.page_size_options
    }

    pub fn view(&self) -> PagerViewModel {
        let item_range = if self.total_items == 0 {
            ItemRangeView::NoData
        } else {
            let (start, end) = item_range(self.current_page, self.page_size, self.total_items);
            ItemRangeView::Showing {
                start,
                end,
                total: self.total_items,
            }
        };

        let at_first = self.current_page == 1;
        let at_last = self.current_page == self.total_pages;

        PagerViewModel {
            visible: !control_hidden(self.total_pages, self.total_items, self.page_size),
            current_page: self.current_page,
            item_range,
            tokens: page_window(self.current_page, self.total_pages),
            first_enabled: !at_first,
            prev_enabled: !at_first,
            next_enabled: !at_last,
            last_enabled: !at_last,
            page_size: self.page_size,
            page_size_options: self.page_size_options.clone(),
        }
    }
}
