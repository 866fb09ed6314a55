/// Event emitted when the user picks a page. Carries the zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelected(pub usize);

/// Page-selector control below the transaction table.
///
/// Holds only the page count; the currently displayed page is owned by the
/// coordinator. Selecting a page emits a `PageSelected` event upward and
/// mutates nothing here.
pub struct Pager {
    page_count: usize,
}

impl Pager {
    pub fn new(page_count: usize) -> Self {
        Pager { page_count }
    }

    /// Validate a zero-based page selection. Out-of-range picks produce no
    /// event.
    pub fn select(&self, index: usize) -> Option<PageSelected> {
        if index < self.page_count {
            Some(PageSelected(index))
        } else {
            None
        }
    }

    /// Page after `current`, if there is one.
    pub fn next(&self, current: usize) -> Option<PageSelected> {
        self.select(current + 1)
    }

    /// Page before `current`, if there is one.
    pub fn previous(&self, current: usize) -> Option<PageSelected> {
        if current == 0 {
            None
        } else {
            self.select(current - 1)
        }
    }

    /// Render the selector line, e.g. `<< 1 [2] 3 >>` with the current page
    /// bracketed. Page labels are one-based for display only.
    pub fn render(&self, current: usize) -> String {
        if self.page_count == 0 {
            return String::new();
        }

        let mut line = String::from("<<");
        for page in 0..self.page_count {
            if page == current {
                line.push_str(&format!(" [{}]", page + 1));
            } else {
                line.push_str(&format!(" {}", page + 1));
            }
        }
        line.push_str(" >>");
        line
    }
}
