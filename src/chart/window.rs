//! Month binning for the income/expense bar chart.
//!
//! The chart shows a sliding window of months. The window is anchored at the
//! most recent month with data and pages backward in whole-window steps: an
//! offset of 1 shows the window immediately before the current one, and so
//! on until the start of the data clamps the window short.

use std::collections::HashMap;

use time::{Date, Month};

use crate::transaction::Transaction;

/// A window of monthly income/expense totals ready for charting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartWindow {
    /// Month labels, e.g. "Jan 2024", oldest first.
    pub labels: Vec<String>,
    /// Income total per visible month.
    pub income_series: Vec<f64>,
    /// Expense total per visible month.
    pub expense_series: Vec<f64>,
    /// Whether older months exist before the window.
    pub can_page_back: bool,
    /// Whether the window is offset into the past and can page forward.
    pub can_page_forward: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct MonthTotals {
    income: f64,
    expense: f64,
}

/// Compute the visible chart window.
///
/// Months are the distinct year-month keys present in the data, in
/// ascending order; `offset` counts whole windows back from the most recent
/// month. The start index clamps at the first month with data, so a deep
/// offset yields a short window and an offset past the data yields an empty
/// one. No data is not an error.
pub fn compute_chart_window(
    transactions: &[Transaction],
    months_to_show: usize,
    offset: usize,
) -> ChartWindow {
    let mut totals: HashMap<Date, MonthTotals> = HashMap::new();

    for transaction in transactions {
        let entry = totals.entry(transaction.month()).or_default();
        if transaction.is_income() {
            entry.income += transaction.amount;
        } else if transaction.is_expense() {
            entry.expense += transaction.amount;
        }
    }

    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    let end_index = months
        .len()
        .saturating_sub(offset.saturating_mul(months_to_show));
    let start_index = end_index.saturating_sub(months_to_show);
    let visible = &months[start_index..end_index];

    ChartWindow {
        labels: visible.iter().map(month_label).collect(),
        income_series: visible.iter().map(|month| totals[month].income).collect(),
        expense_series: visible.iter().map(|month| totals[month].expense).collect(),
        can_page_back: start_index > 0,
        can_page_forward: offset > 0,
    }
}

/// Format a month key as a short label, e.g. "Jan 2024".
pub(crate) fn month_label(month: &Date) -> String {
    let name = match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{name} {}", month.year())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::compute_chart_window;

    fn income(amount: f64, date: time::Date) -> Transaction {
        Transaction::build(
            amount,
            date,
            TransactionKind::Income {
                by: "Ann".to_owned(),
                stored_at: "Bank".to_owned(),
            },
        )
        .into_record()
    }

    fn expense(amount: f64, date: time::Date) -> Transaction {
        Transaction::build(
            amount,
            date,
            TransactionKind::Expense {
                by: "Ann".to_owned(),
                category: "Groceries".to_owned(),
                from_location: "Bank".to_owned(),
            },
        )
        .into_record()
    }

    /// One income per month from January to `month_count` of 2024.
    fn one_per_month(month_count: u8) -> Vec<Transaction> {
        (1..=month_count)
            .map(|month| {
                income(
                    100.0,
                    time::Date::from_calendar_date(2024, time::Month::try_from(month).unwrap(), 15)
                        .unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn window_at_offset_zero_ends_at_most_recent_month() {
        let transactions = one_per_month(8);

        let got = compute_chart_window(&transactions, 6, 0);

        assert_eq!(
            got.labels,
            vec![
                "Mar 2024", "Apr 2024", "May 2024", "Jun 2024", "Jul 2024", "Aug 2024"
            ]
        );
        assert!(got.can_page_back);
        assert!(!got.can_page_forward);
    }

    #[test]
    fn window_clamps_at_start_of_data() {
        let transactions = one_per_month(8);

        let got = compute_chart_window(&transactions, 6, 1);

        assert_eq!(got.labels, vec!["Jan 2024", "Feb 2024"]);
        assert!(!got.can_page_back);
        assert!(got.can_page_forward);
    }

    #[test]
    fn window_empties_past_the_data() {
        let transactions = one_per_month(8);

        let got = compute_chart_window(&transactions, 6, 3);

        assert!(got.labels.is_empty());
        assert!(!got.can_page_back);
        assert!(got.can_page_forward);
    }

    #[test]
    fn no_data_yields_an_empty_window() {
        let got = compute_chart_window(&[], 6, 0);

        assert!(got.labels.is_empty());
        assert!(!got.can_page_back);
        assert!(!got.can_page_forward);
    }

    #[test]
    fn sums_income_and_expenses_separately_per_month() {
        let transactions = vec![
            income(300.0, date!(2024 - 01 - 05)),
            income(200.0, date!(2024 - 01 - 20)),
            expense(150.0, date!(2024 - 01 - 10)),
            expense(75.0, date!(2024 - 02 - 01)),
        ];

        let got = compute_chart_window(&transactions, 6, 0);

        assert_eq!(got.labels, vec!["Jan 2024", "Feb 2024"]);
        assert_eq!(got.income_series, vec![500.0, 0.0]);
        assert_eq!(got.expense_series, vec![150.0, 75.0]);
    }
}
