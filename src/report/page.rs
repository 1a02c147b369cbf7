//! Filtering, sorting, and pagination for the monthly report.

use time::Month;

use crate::transaction::Transaction;

/// The sort key for the report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest entry first, by creation time (business date for records that
    /// predate creation stamping).
    #[default]
    CreatedAt,
    /// Newest business date first.
    Date,
}

/// Income, expense, and net totals over the filtered (not paginated) set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportSubtotals {
    /// Income total for the period.
    pub income: f64,
    /// Expense total for the period.
    pub expense: f64,
    /// `income - expense`.
    pub net: f64,
}

/// One page of the monthly report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportPage {
    /// The transactions on this page, in display order.
    pub items: Vec<Transaction>,
    /// Total pages in the filtered set. Zero when the period has no data,
    /// which is a valid terminal state rather than an error.
    pub total_pages: u32,
    /// Totals over the whole filtered set.
    pub subtotals: ReportSubtotals,
}

/// Compute one page of the report for a month/year period.
///
/// Filters to the period, sorts descending by the requested key (stable, so
/// equal keys keep their snapshot order), computes subtotals over the whole
/// filtered set, and then slices out the requested page. A page past the end
/// yields empty items with the correct `total_pages`.
pub fn compute_report_page(
    transactions: &[Transaction],
    month: Month,
    year: i32,
    sort_by: SortBy,
    page: u32,
    page_size: u32,
) -> ReportPage {
    let mut filtered: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| {
            transaction.date.month() == month && transaction.date.year() == year
        })
        .collect();

    match sort_by {
        SortBy::CreatedAt => filtered.sort_by(|a, b| b.entered_at().cmp(&a.entered_at())),
        SortBy::Date => filtered.sort_by(|a, b| b.date.cmp(&a.date)),
    }

    let mut subtotals = ReportSubtotals::default();
    for transaction in &filtered {
        if transaction.is_income() {
            subtotals.income += transaction.amount;
        } else if transaction.is_expense() {
            subtotals.expense += transaction.amount;
        }
    }
    subtotals.net = subtotals.income - subtotals.expense;

    if page_size == 0 {
        return ReportPage {
            items: Vec::new(),
            total_pages: 0,
            subtotals,
        };
    }

    let total_pages = (filtered.len() as u32).div_ceil(page_size);
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    ReportPage {
        items,
        total_pages,
        subtotals,
    }
}

#[cfg(test)]
mod tests {
    use time::{
        Month,
        macros::{date, datetime},
    };

    use crate::transaction::{Transaction, TransactionKind};

    use super::{SortBy, compute_report_page};

    fn income(amount: f64, date: time::Date, note: &str) -> Transaction {
        Transaction::build(
            amount,
            date,
            TransactionKind::Income {
                by: "Ann".to_owned(),
                stored_at: "Bank".to_owned(),
            },
        )
        .note(note)
        .into_record()
    }

    fn expense(amount: f64, date: time::Date) -> Transaction {
        Transaction::build(
            amount,
            date,
            TransactionKind::Expense {
                by: "Ben".to_owned(),
                category: "Groceries".to_owned(),
                from_location: "Bank".to_owned(),
            },
        )
        .into_record()
    }

    fn fifteen_january_transactions() -> Vec<Transaction> {
        (1..=15)
            .map(|day| {
                income(
                    day as f64,
                    time::Date::from_calendar_date(2024, Month::January, day).unwrap(),
                    &format!("entry {day}"),
                )
            })
            .collect()
    }

    #[test]
    fn paginates_fifteen_items_into_two_pages() {
        let transactions = fifteen_january_transactions();

        let page_one =
            compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 1, 10);
        let page_two =
            compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 2, 10);

        assert_eq!(page_one.items.len(), 10);
        assert_eq!(page_one.total_pages, 2);
        assert_eq!(page_two.items.len(), 5);
        assert_eq!(page_two.total_pages, 2);
    }

    #[test]
    fn pages_are_disjoint_continuations_of_the_sorted_set() {
        let transactions = fifteen_january_transactions();

        let page_one =
            compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 1, 10);
        let page_two =
            compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 2, 10);

        let full = compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 1, 100);
        let mut joined = page_one.items.clone();
        joined.extend(page_two.items.clone());

        assert_eq!(joined, full.items);
        for item in &page_one.items {
            assert!(!page_two.items.contains(item));
        }
    }

    #[test]
    fn filters_to_the_requested_period() {
        let transactions = vec![
            income(100.0, date!(2024 - 01 - 10), "in period"),
            income(200.0, date!(2024 - 02 - 10), "other month"),
            income(300.0, date!(2023 - 01 - 10), "other year"),
        ];

        let got = compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 1, 10);

        assert_eq!(got.items.len(), 1);
        assert_eq!(got.items[0].note, "in period");
    }

    #[test]
    fn subtotals_cover_the_filtered_set_not_the_page() {
        let mut transactions = fifteen_january_transactions();
        transactions.push(expense(20.0, date!(2024 - 01 - 31)));

        let got = compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 2, 10);

        // 1 + 2 + ... + 15 = 120.
        assert_eq!(got.subtotals.income, 120.0);
        assert_eq!(got.subtotals.expense, 20.0);
        assert_eq!(got.subtotals.net, 100.0);
    }

    #[test]
    fn sorts_descending_by_business_date() {
        let transactions = vec![
            income(1.0, date!(2024 - 01 - 05), "older"),
            income(2.0, date!(2024 - 01 - 20), "newer"),
        ];

        let got = compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 1, 10);

        assert_eq!(got.items[0].note, "newer");
        assert_eq!(got.items[1].note, "older");
    }

    #[test]
    fn sorts_descending_by_creation_time_with_date_fallback() {
        let mut late_entry = income(1.0, date!(2024 - 01 - 05), "entered last");
        late_entry.created_at = Some(datetime!(2024-02-01 10:00 UTC));
        let unstamped = income(2.0, date!(2024 - 01 - 20), "unstamped");

        let transactions = vec![unstamped, late_entry];
        let got =
            compute_report_page(&transactions, Month::January, 2024, SortBy::CreatedAt, 1, 10);

        // The back-dated record was entered most recently, so it leads.
        assert_eq!(got.items[0].note, "entered last");
        assert_eq!(got.items[1].note, "unstamped");
    }

    #[test]
    fn equal_sort_keys_keep_snapshot_order() {
        let transactions = vec![
            income(1.0, date!(2024 - 01 - 10), "first"),
            income(2.0, date!(2024 - 01 - 10), "second"),
        ];

        let got = compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 1, 10);

        assert_eq!(got.items[0].note, "first");
        assert_eq!(got.items[1].note, "second");
    }

    #[test]
    fn empty_period_is_a_valid_terminal_state() {
        let transactions = vec![income(100.0, date!(2024 - 01 - 10), "")];

        let got = compute_report_page(&transactions, Month::June, 2024, SortBy::Date, 1, 10);

        assert!(got.items.is_empty());
        assert_eq!(got.total_pages, 0);
        assert_eq!(got.subtotals.net, 0.0);
    }

    #[test]
    fn page_past_the_end_yields_empty_items() {
        let transactions = fifteen_january_transactions();

        let got = compute_report_page(&transactions, Month::January, 2024, SortBy::Date, 5, 10);

        assert!(got.items.is_empty());
        assert_eq!(got.total_pages, 2);
    }
}
