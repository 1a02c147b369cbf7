//! Paging state for the monthly bar chart.

use crate::transaction::Transaction;

use super::window::{ChartWindow, compute_chart_window};

/// How many months the chart shows per window when not configured.
pub const DEFAULT_MONTHS_TO_SHOW: usize = 6;

/// Session-scoped paging state for the chart.
///
/// Paging back in time increments the offset without bound; the window
/// computation simply empties once the offset runs past the data, so there
/// is nothing to reject here. Paging forward floors at the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPager {
    months_to_show: usize,
    offset: usize,
}

impl ChartPager {
    /// Create a pager showing `months_to_show` months, anchored at the most
    /// recent data.
    pub fn new(months_to_show: usize) -> Self {
        Self {
            months_to_show,
            offset: 0,
        }
    }

    /// The current offset in whole windows back from the most recent month.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The fixed window size.
    pub fn months_to_show(&self) -> usize {
        self.months_to_show
    }

    /// Page one window further back in time.
    pub fn page_back(&mut self) {
        self.offset += 1;
    }

    /// Page one window toward the present, stopping at the current window.
    pub fn page_forward(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Snap back to the most recent window.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Compute the window for the current paging state.
    pub fn window(&self, transactions: &[Transaction]) -> ChartWindow {
        compute_chart_window(transactions, self.months_to_show, self.offset)
    }
}

impl Default for ChartPager {
    fn default() -> Self {
        Self::new(DEFAULT_MONTHS_TO_SHOW)
    }
}

#[cfg(test)]
mod tests {
    use super::ChartPager;

    #[test]
    fn page_forward_floors_at_zero() {
        let mut pager = ChartPager::default();

        pager.page_forward();

        assert_eq!(pager.offset(), 0);
    }

    #[test]
    fn page_back_is_unbounded() {
        let mut pager = ChartPager::default();

        for _ in 0..100 {
            pager.page_back();
        }

        assert_eq!(pager.offset(), 100);
    }

    #[test]
    fn reset_returns_to_the_most_recent_window() {
        let mut pager = ChartPager::new(6);
        pager.page_back();
        pager.page_back();

        pager.reset();

        assert_eq!(pager.offset(), 0);
    }
}
