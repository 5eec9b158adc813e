//! Pure page-window math: token shaping, item ranges and the visibility rule.

/// Widest run of plain page numbers shown before the strip switches to
/// ellipsis shaping.
pub const MAX_VISIBLE_PAGES: u64 = 5;

/// One slot in the pager's page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A navigable page number (1-based).
    Page(u64),
    /// A non-navigable placeholder for an elided run of pages.
    Ellipsis,
}

/// Compute the number of pages for a paginated list.
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    total_items.div_ceil(page_size.max(1))
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: u64, total_pages: u64) -> u64 {
    page.clamp(1, total_pages.max(1))
}

/// Shape the bounded page-number strip for a pager control.
///
/// First and last page are always present, at most two ellipsis slots ever
/// appear, and the strip never exceeds seven tokens however large
/// `total_pages` grows.
pub fn page_window(current_page: u64, total_pages: u64) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }

    if current_page <= 3 {
        // Dense run at the front, last page kept reachable.
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)]
    } else if current_page >= total_pages - 2 {
        // Dense run at the tail, first page kept reachable.
        vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        // Centered on the current page, elided on both sides.
        vec![
            Page(1),
            Ellipsis,
            Page(current_page - 1),
            Page(current_page),
            Page(current_page + 1),
            Ellipsis,
            Page(total_pages),
        ]
    }
}

/// 1-based inclusive range of the items shown on a page.
///
/// Callers are trusted to pass a page inside `[1, total_pages]`; out-of-range
/// values degrade to an out-of-range (possibly empty) interval rather than
/// failing.
pub fn item_range(current_page: u64, page_size: u64, total_items: u64) -> (u64, u64) {
    let start = current_page.saturating_sub(1).saturating_mul(page_size) + 1;
    let end = current_page.saturating_mul(page_size).min(total_items);
    (start, end)
}

/// Whether the pager control renders at all.
///
/// Hidden exactly when the whole result set fits on a single page. A caller
/// reporting zero items alongside multiple pages still gets a visible
/// control; that combination is passed through untouched.
pub fn control_hidden(total_pages: u64, total_items: u64, page_size: u64) -> bool {
    total_pages <= 1 && total_items <= page_size
}
