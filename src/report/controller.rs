//! Session state for the monthly report view.

use time::Month;

use crate::transaction::Transaction;

use super::page::{ReportPage, SortBy, compute_report_page};

/// How many rows the report shows per page when not configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// The report view's session state: period filter, sort key, and page.
///
/// Changing the sort key or the period resets the page to 1. Paging clamps
/// to `[1, total_pages]`; advancing past the end or retreating below the
/// first page is a no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportController {
    page: u32,
    page_size: u32,
    sort_by: SortBy,
    month: Month,
    year: i32,
}

impl ReportController {
    /// Create a controller for the given period, on page 1 with the default
    /// sort key.
    pub fn new(month: Month, year: i32, page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            sort_by: SortBy::default(),
            month,
            year,
        }
    }

    /// The current page, 1-based.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The fixed page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The current sort key.
    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// The current period filter.
    pub fn period(&self) -> (Month, i32) {
        (self.month, self.year)
    }

    /// Change the sort key. Resets to page 1.
    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        self.sort_by = sort_by;
        self.page = 1;
    }

    /// Change the period filter. Resets to page 1.
    pub fn set_period(&mut self, month: Month, year: i32) {
        self.month = month;
        self.year = year;
        self.page = 1;
    }

    /// Advance one page, stopping at the last page of the filtered set.
    pub fn next_page(&mut self, total_pages: u32) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    /// Go back one page, stopping at page 1.
    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Compute the report page for the current state.
    pub fn current_page(&self, transactions: &[Transaction]) -> ReportPage {
        compute_report_page(
            transactions,
            self.month,
            self.year,
            self.sort_by,
            self.page,
            self.page_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use crate::report::page::SortBy;

    use super::ReportController;

    #[test]
    fn changing_the_sort_key_resets_the_page() {
        let mut controller = ReportController::new(Month::January, 2024, 10);
        controller.next_page(5);
        controller.next_page(5);

        controller.set_sort_by(SortBy::Date);

        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn changing_the_period_resets_the_page() {
        let mut controller = ReportController::new(Month::January, 2024, 10);
        controller.next_page(5);

        controller.set_period(Month::February, 2024);

        assert_eq!(controller.page(), 1);
        assert_eq!(controller.period(), (Month::February, 2024));
    }

    #[test]
    fn next_page_stops_at_the_last_page() {
        let mut controller = ReportController::new(Month::January, 2024, 10);

        controller.next_page(2);
        controller.next_page(2);
        controller.next_page(2);

        assert_eq!(controller.page(), 2);
    }

    #[test]
    fn previous_page_stops_at_the_first_page() {
        let mut controller = ReportController::new(Month::January, 2024, 10);

        controller.previous_page();

        assert_eq!(controller.page(), 1);
    }

    #[test]
    fn next_page_is_a_no_op_when_there_are_no_pages() {
        let mut controller = ReportController::new(Month::January, 2024, 10);

        controller.next_page(0);

        assert_eq!(controller.page(), 1);
    }
}
