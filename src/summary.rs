//! Dashboard reductions over the transaction list.
//!
//! Provides the income/expense totals shown on the landing page, the recent
//! activity feed, and the seven-day entry consistency tracker. All functions
//! are pure reductions over the snapshot list and are recomputed on every
//! snapshot or filter change; the lists involved are small (one household's
//! transaction volume) so no incremental maintenance is done.

use time::{Date, Duration};

use crate::transaction::Transaction;

/// The headline totals for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// Sum of all income amounts.
    pub income_total: f64,
    /// Sum of all expense amounts.
    pub expense_total: f64,
    /// `income_total - expense_total`. Transfers are neutral.
    pub current_balance: f64,
}

/// Sum income and expense totals over the whole transaction list.
///
/// Order-independent, O(n).
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    let mut income_total = 0.0;
    let mut expense_total = 0.0;

    for transaction in transactions {
        if transaction.is_income() {
            income_total += transaction.amount;
        } else if transaction.is_expense() {
            expense_total += transaction.amount;
        }
    }

    Summary {
        income_total,
        expense_total,
        current_balance: income_total - expense_total,
    }
}

/// The most recently entered transactions, newest first.
///
/// Ordered by creation time, falling back to the business date for
/// pre-migration records. The sort is stable, so records with equal keys
/// keep their snapshot order.
pub fn recent_activity(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    let mut recent: Vec<&Transaction> = transactions.iter().collect();
    recent.sort_by(|a, b| b.entered_at().cmp(&a.entered_at()));
    recent.truncate(limit);
    recent
}

/// One day of the entry consistency tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsistencyDay {
    /// The calendar day.
    pub date: Date,
    /// Whether at least one record was entered on that day.
    pub has_entry: bool,
}

/// Which of the seven days ending at `today` saw at least one record entered.
///
/// Entry days come from `created_at` only: a record back-dated to last week
/// still counts as an entry on the day it was typed in, which is the habit
/// the tracker rewards. Returned in ascending date order.
pub fn entry_consistency(transactions: &[Transaction], today: Date) -> Vec<ConsistencyDay> {
    (0..7)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let has_entry = transactions
                .iter()
                .any(|transaction| transaction.created_at.map(|at| at.date()) == Some(date));

            ConsistencyDay { date, has_entry }
        })
        .collect()
}
