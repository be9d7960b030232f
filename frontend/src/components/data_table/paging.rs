//! Pagination arithmetic for the table footer.

use std::fmt;

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Numbered buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// `ceil(total / size)`; zero for an empty table or a zero page size.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// The footer only renders once there is something to page through.
pub fn shows_footer(total_items: usize) -> bool {
    total_items > 0
}

/// Page numbers for the numbered buttons.
///
/// All pages when they fit; otherwise the first five near the start, the last
/// five near the end, and `current - 2 ..= current + 2` in between.
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    let len = total_pages.min(MAX_PAGE_BUTTONS);
    let first = if total_pages <= MAX_PAGE_BUTTONS || current <= 3 {
        1
    } else if current + 2 >= total_pages {
        total_pages - (MAX_PAGE_BUTTONS - 1)
    } else {
        current - 2
    };
    (first..first + len).collect()
}

/// The "Showing X to Y of Z entries" caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryRange {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl EntryRange {
    pub fn new(total: usize, current_page: usize, page_size: usize) -> Self {
        let from = (page_size * current_page.saturating_sub(1) + 1).min(total);
        let to = (page_size * current_page).min(total);
        Self { from, to, total }
    }
}

impl fmt::Display for EntryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.from, self.to, self.total
        )
    }
}

/// Disabled state of the first/prev/next/last buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    pub first_disabled: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
}

impl PagerControls {
    pub fn new(current: usize, total_pages: usize) -> Self {
        let at_start = current == 1;
        let at_end = current == total_pages;
        Self {
            first_disabled: at_start,
            prev_disabled: at_start,
            next_disabled: at_end,
            last_disabled: at_end,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub selected: bool,
}

impl PageButton {
    pub fn window(current: usize, total_pages: usize) -> Vec<PageButton> {
        page_window(current, total_pages)
            .into_iter()
            .map(|number| PageButton {
                number,
                selected: number == current,
            })
            .collect()
    }

    /// The page to request on click; the active page is inert.
    pub fn click_target(&self) -> Option<usize> {
        (!self.selected).then_some(self.number)
    }
}

/// Parses the rows-per-page select value.
pub fn parse_page_size(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(25, 10, 3)]
    #[case(194, 5, 39)]
    #[case(50, 0, 0)]
    fn pages(#[case] total: usize, #[case] size: usize, #[case] expected: usize) {
        assert_eq!(total_pages(total, size), expected);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(194, true)]
    fn footer_needs_items(#[case] total: usize, #[case] expected: bool) {
        assert_eq!(shows_footer(total), expected);
    }

    #[rstest]
    #[case(1, 3, vec![1, 2, 3])]
    #[case(1, 10, vec![1, 2, 3, 4, 5])]
    #[case(3, 10, vec![1, 2, 3, 4, 5])]
    #[case(10, 10, vec![6, 7, 8, 9, 10])]
    #[case(8, 10, vec![6, 7, 8, 9, 10])]
    #[case(5, 10, vec![3, 4, 5, 6, 7])]
    #[case(4, 6, vec![2, 3, 4, 5, 6])]
    #[case(1, 0, vec![])]
    fn window(#[case] current: usize, #[case] total: usize, #[case] expected: Vec<usize>) {
        assert_eq!(page_window(current, total), expected);
    }

    #[rstest]
    #[case(25, 3, 10, "Showing 21 to 25 of 25 entries")]
    #[case(25, 1, 10, "Showing 1 to 10 of 25 entries")]
    #[case(194, 2, 20, "Showing 21 to 40 of 194 entries")]
    #[case(3, 1, 100, "Showing 1 to 3 of 3 entries")]
    fn caption(
        #[case] total: usize,
        #[case] page: usize,
        #[case] size: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(EntryRange::new(total, page, size).to_string(), expected);
    }

    #[test]
    fn caption_survives_page_zero() {
        let range = EntryRange::new(25, 0, 10);
        assert_eq!(range.from, 1);
        assert_eq!(range.to, 0);
    }

    #[test]
    fn controls_disable_at_the_edges() {
        assert_eq!(
            PagerControls::new(1, 3),
            PagerControls {
                first_disabled: true,
                prev_disabled: true,
                next_disabled: false,
                last_disabled: false,
            }
        );
        let last = PagerControls::new(3, 3);
        assert!(!last.prev_disabled);
        assert!(last.next_disabled && last.last_disabled);

        let single = PagerControls::new(1, 1);
        assert!(single.first_disabled && single.last_disabled);
    }

    #[test]
    fn active_page_button_is_inert() {
        let buttons = PageButton::window(2, 4);
        assert_eq!(buttons.len(), 4);
        assert_eq!(buttons[1].click_target(), None);
        assert_eq!(buttons[0].click_target(), Some(1));
        assert_eq!(buttons.iter().filter(|b| b.selected).count(), 1);
    }

    #[test]
    fn page_size_values() {
        assert_eq!(parse_page_size("50"), Some(50));
        assert_eq!(parse_page_size("lots"), None);
        assert!(PAGE_SIZE_OPTIONS.contains(&10));
    }
}
