use pager_core::{clamp_page, total_pages, PagerState};

/// In-process stand-in for the data-fetch layer the pager trusts.
///
/// The pager itself never validates its counts, so this layer is the one
/// place that guarantees they are sane: the page total is derived from the
/// item count and every requested page is clamped into range before a
/// snapshot is built.
#[derive(Debug, Clone)]
pub struct ListingSource {
    total_items: u64,
}

impl ListingSource {
    pub fn new(total_items: u64) -> Self {
        Self { total_items }
    }

    pub fn set_total_items(&mut self, total_items: u64) {
        self.total_items = total_items;
    }

    /// Fetch one page worth of listing counts as a pager snapshot.
    pub fn fetch(&self, requested_page: u64, page_size: u64) -> PagerState {
        let pages = total_pages(self.total_items, page_size);
        let current = clamp_page(requested_page, pages);
        PagerState::new(current, pages, self.total_items, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_page_total_from_item_count() {
        let source = ListingSource::new(53);
        let state = source.fetch(1, 10);
        assert_eq!(state.total_pages(), 6);
        assert_eq!(state.total_items(), 53);
    }

    #[test]
    fn clamps_requested_page_into_range() {
        let source = ListingSource::new(53);
        assert_eq!(source.fetch(99, 10).current_page(), 6);
        assert_eq!(source.fetch(0, 10).current_page(), 1);
    }

    #[test]
    fn empty_listing_pins_to_page_one() {
        let source = ListingSource::new(0);
        let state = source.fetch(4, 10);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn shrinking_the_listing_reclamps_the_page() {
        let mut source = ListingSource::new(200);
        let state = source.fetch(20, 10);
        assert_eq!(state.current_page(), 20);

        source.set_total_items(35);
        let state = source.fetch(state.current_page(), state.page_size());
        assert_eq!(state.current_page(), 4);
        assert_eq!(state.total_pages(), 4);
    }
}
