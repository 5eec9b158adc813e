//! Pager core: pure page-window math and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;
mod window;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{PagerState, DEFAULT_PAGE_SIZE_OPTIONS};
pub use update::update;
pub use view_model::{ItemRangeView, PagerViewModel};
pub use window::{
    clamp_page, item_range, page_window, total_pages, PageToken, MAX_VISIBLE_PAGES,
};
