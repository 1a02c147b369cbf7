//! ECharts configuration for the monthly income/expense chart.
//!
//! The engine computes the windowed series; this module turns a
//! [ChartWindow] into the chart option JSON the front-end shell feeds to
//! ECharts. No rendering happens here.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger,
    },
    series::Bar,
};

use super::window::ChartWindow;

const INCOME_COLOR: &str = "#81e6d9";
const EXPENSE_COLOR: &str = "#fecaca";

/// Build the paired income/expense bar chart for a window.
pub fn chart_options(window: &ChartWindow) -> Chart {
    Chart::new()
        .title(Title::new().text("Cash flow").subtext("Income and expenses by month"))
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(window.labels.clone()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .data(window.income_series.clone()),
        )
        .series(
            Bar::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .data(window.expense_series.clone()),
        )
}

/// The chart option as a JSON string for the front-end shell.
pub fn chart_options_json(window: &ChartWindow) -> String {
    chart_options(window).to_string()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('id-ID', {
              style: 'currency',
              currency: 'IDR',
              minimumFractionDigits: 0
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod tests {
    use super::{ChartWindow, chart_options_json};

    #[test]
    fn options_carry_labels_and_both_series() {
        let window = ChartWindow {
            labels: vec!["Jan 2024".to_owned(), "Feb 2024".to_owned()],
            income_series: vec![500.0, 0.0],
            expense_series: vec![150.0, 75.0],
            can_page_back: false,
            can_page_forward: false,
        };

        let got = chart_options_json(&window);

        assert!(got.contains("Jan 2024"));
        assert!(got.contains("Income"));
        assert!(got.contains("Expenses"));
    }
}
