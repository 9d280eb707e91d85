use serde::Serialize;

/// Rows requested per trip-details page unless configured otherwise.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Numbered buttons shown before the control set is truncated.
pub const MAX_VISIBLE_PAGES: usize = 9;

/// One pagination control: a numbered button or the ellipsis gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageControl {
    Button { number: usize, active: bool },
    Ellipsis,
}

impl PageControl {
    fn button(number: usize, current_page: usize) -> Self {
        PageControl::Button {
            number,
            active: number == current_page,
        }
    }

    /// Page number behind this control, if it is selectable.
    pub fn number(&self) -> Option<usize> {
        match self {
            PageControl::Button { number, .. } => Some(*number),
            PageControl::Ellipsis => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PageControl::Button { active: true, .. })
    }
}

/// Number of pages needed for `total` rows at `per_page` rows each.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page)
}

/// Computes the visible control set: the first `max_visible` pages, then an
/// ellipsis and a dedicated last-page button once the page count overflows.
///
/// Not a sliding window. A current page strictly between `max_visible` and
/// the last page has no button of its own, and no control is marked active.
pub fn visible_controls(
    total_pages: usize,
    current_page: usize,
    max_visible: usize,
) -> Vec<PageControl> {
    if total_pages == 0 {
        return vec![];
    }

    let mut controls: Vec<PageControl> = (1..=total_pages.min(max_visible))
        .map(|number| PageControl::button(number, current_page))
        .collect();

    if total_pages > max_visible {
        controls.push(PageControl::Ellipsis);
        controls.push(PageControl::button(total_pages, current_page));
    }

    controls
}

/// One page of items together with its rendered pagination controls.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub controls: Vec<PageControl>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let controls = visible_controls(total_pages, current_page, MAX_VISIBLE_PAGES);

        Self {
            items,
            controls,
            page: current_page,
        }
    }
}
