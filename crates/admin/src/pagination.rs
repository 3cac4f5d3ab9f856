//! Pure pagination math for the product manager grid.
//!
//! The admin list always renders a fixed grid of [`ITEMS_PER_PAGE`] slots;
//! a page with fewer real items is padded with `None` placeholders that
//! carry no identity and are never interactive. Page navigation shows a
//! bounded window of at most [`MAX_VISIBLE_PAGES`] page links centered on
//! the current page and clamped at both ends.

/// Fixed number of grid slots per page.
pub const ITEMS_PER_PAGE: usize = 4;

/// Maximum number of page links shown in the navigation window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Total number of pages for `count` items.
///
/// Zero when the catalog is empty; otherwise `ceil(count / 4)`.
#[must_use]
pub const fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// Clamp a 1-indexed page back into `[1, total]`.
///
/// An empty catalog has no pages; the current page rests at 1. Because only
/// the last page can be partially filled, this also implements the delete
/// rule: removing the sole item of page `p > 1` drops `total` below `p` and
/// the clamp lands on `p - 1`.
#[must_use]
pub const fn clamp_page(page: usize, total: usize) -> usize {
    if total == 0 {
        return 1;
    }
    if page < 1 {
        1
    } else if page > total {
        total
    } else {
        page
    }
}

/// Project the visible page as a fixed-size grid.
///
/// Returns exactly [`ITEMS_PER_PAGE`] slots; real items first, then `None`
/// placeholders. `page` is assumed already clamped.
#[must_use]
pub fn project<T>(items: &[T], page: usize) -> Vec<Option<&T>> {
    let start = page.saturating_sub(1) * ITEMS_PER_PAGE;
    let mut slots: Vec<Option<&T>> = items
        .iter()
        .skip(start)
        .take(ITEMS_PER_PAGE)
        .map(Some)
        .collect();
    slots.resize_with(ITEMS_PER_PAGE, || None);
    slots
}

/// The bounded window of page numbers to show in the navigation.
///
/// Centered on `current`, clamped at both ends: `(current=8, total=12)`
/// yields `[6, 7, 8, 9, 10]`; `(current=1, total=12)` yields
/// `[1, 2, 3, 4, 5]`. An out-of-range `current` is clamped into
/// `[1, total]` before the window is computed.
#[must_use]
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total == 0 {
        return vec![];
    }
    let current = clamp_page(current, total);
    let start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total);
    // Re-anchor when the window got cut short at the right edge
    let start = if end - start + 1 < MAX_VISIBLE_PAGES {
        end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1)
    } else {
        start
    };
    (start..=end).collect()
}
