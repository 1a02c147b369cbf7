//! The monthly report: filtering, sorting, pagination, and its view state.

mod controller;
mod page;

pub use controller::{DEFAULT_PAGE_SIZE, ReportController};
pub use page::{ReportPage, ReportSubtotals, SortBy, compute_report_page};
