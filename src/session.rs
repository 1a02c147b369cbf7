//! Session-scoped UI state.
//!
//! Everything here is local to one signed-in session: the report view's
//! page/sort/filter, the chart pager, and which record is being edited.
//! None of it is persisted, and all of it resets on logout.

use time::Month;

use crate::chart::ChartPager;
use crate::config::Config;
use crate::report::ReportController;
use crate::transaction::TransactionId;

/// The UI state for one signed-in session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Report view state.
    pub report: ReportController,
    /// Chart paging state.
    pub chart: ChartPager,
    /// The record currently loaded into the edit form, if any.
    pub editing: Option<TransactionId>,
}

impl Session {
    /// Start a session with the report filtered to the given period.
    pub fn new(config: &Config, month: Month, year: i32) -> Self {
        Self {
            report: ReportController::new(month, year, config.report_page_size),
            chart: ChartPager::new(config.chart_months),
            editing: None,
        }
    }

    /// Load a record into the edit form.
    pub fn start_editing(&mut self, id: TransactionId) {
        self.editing = Some(id);
    }

    /// Clear the edit form back to create mode.
    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    /// Reset to a fresh session, as on logout.
    pub fn reset(&mut self, month: Month, year: i32) {
        self.report = ReportController::new(month, year, self.report.page_size());
        self.chart = ChartPager::new(self.chart.months_to_show());
        self.editing = None;
    }
}
