use pager_core::{ItemRangeView, PageToken, PagerViewModel};

use super::constants::ELLIPSIS_GLYPH;

/// Render a pager view model to terminal lines.
///
/// A hidden view model renders nothing at all; the caller prints whatever
/// comes back verbatim.
pub fn render(view: &PagerViewModel) -> Vec<String> {
    if !view.visible {
        return Vec::new();
    }

    vec![
        summary_line(view),
        strip_line(view),
        nav_line(view),
        size_line(view),
    ]
}

fn summary_line(view: &PagerViewModel) -> String {
    match view.item_range {
        ItemRangeView::NoData => "No data".to_string(),
        ItemRangeView::Showing { start, end, total } => format!(
            "Showing {}-{} of {} items",
            start,
            end,
            format_with_commas(total)
        ),
    }
}

fn strip_line(view: &PagerViewModel) -> String {
    let slots: Vec<String> = view
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(page) if *page == view.current_page => format!("[{page}]"),
            PageToken::Page(page) => page.to_string(),
            PageToken::Ellipsis => ELLIPSIS_GLYPH.to_string(),
        })
        .collect();
    format!("Pages: {}", slots.join(" "))
}

fn nav_line(view: &PagerViewModel) -> String {
    format!(
        "Nav: {} {} {} {}",
        control("first", view.first_enabled),
        control("prev", view.prev_enabled),
        control("next", view.next_enabled),
        control("last", view.last_enabled)
    )
}

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("<{label}>")
    } else {
        format!("({label})")
    }
}

fn size_line(view: &PagerViewModel) -> String {
    let options: Vec<String> = view
        .page_size_options
        .iter()
        .map(ToString::to_string)
        .collect();
    format!(
        "Page size: {} (options: {})",
        view.page_size,
        options.join(", ")
    )
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
