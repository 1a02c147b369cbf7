//! The monthly bar chart: month binning, paging state, and chart options.

mod pager;
mod view;
mod window;

pub use pager::{ChartPager, DEFAULT_MONTHS_TO_SHOW};
pub use view::{chart_options, chart_options_json};
pub use window::{ChartWindow, compute_chart_window};
