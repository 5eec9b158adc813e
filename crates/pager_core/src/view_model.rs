use crate::window::PageToken;

/// Summary of the item range shown above the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRangeView {
    /// The result set is empty; render an explicit no-data message.
    NoData,
    /// 1-based inclusive range of the items on the current page.
    Showing { start: u64, end: u64, total: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerViewModel {
    pub visible: bool,
    pub current_page: u64,
    pub item_range: ItemRangeView,
    pub tokens: Vec<PageToken>,
    pub first_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub last_enabled: bool,
    pub page_size: u64,
    pub page_size_options: Vec<u64>,
}
