//! Spreadsheet export of the monthly report.
//!
//! Writes one CSV row per transaction in the selected period, oldest first.
//! The header is the superset of the per-type columns so all three kinds
//! share one table; cells that do not apply to a row's kind are left blank.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use time::Month;
use time::format_description::well_known::Rfc3339;

use crate::Error;
use crate::transaction::{Transaction, TransactionKind};

const HEADER: [&str; 12] = [
    "Date",
    "Entered",
    "Type",
    "Amount",
    "Note",
    "Owner",
    "Stored At",
    "Category",
    "From Location",
    "To Location",
    "From Owner",
    "To Owner",
];

/// The transactions for a month/year period, oldest business date first.
///
/// The sort is stable, so same-day records keep their snapshot order.
pub fn filtered_for_export(
    transactions: &[Transaction],
    month: Month,
    year: i32,
) -> Vec<&Transaction> {
    let mut filtered: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| {
            transaction.date.month() == month && transaction.date.year() == year
        })
        .collect();
    filtered.sort_by(|a, b| a.date.cmp(&b.date));
    filtered
}

/// Write the export rows as CSV.
///
/// # Errors
/// Returns [Error::Export] if a timestamp cannot be formatted or the
/// underlying writer fails.
pub fn write_report<W: Write>(transactions: &[&Transaction], writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER).map_err(export_error)?;

    for transaction in transactions {
        let entered = match transaction.created_at {
            Some(at) => at.format(&Rfc3339).map_err(export_error)?,
            None => String::new(),
        };

        let mut row = vec![
            transaction.date.to_string(),
            entered,
            transaction.kind.label().to_owned(),
            transaction.amount.to_string(),
            transaction.note.clone(),
        ];
        row.extend(kind_cells(&transaction.kind));

        csv_writer.write_record(&row).map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}

// Cells for the Owner..To Owner columns, blank where the kind has no value.
fn kind_cells(kind: &TransactionKind) -> Vec<String> {
    let blank = String::new;
    match kind {
        TransactionKind::Income { by, stored_at } => vec![
            by.clone(),
            stored_at.clone(),
            blank(),
            blank(),
            blank(),
            blank(),
            blank(),
        ],
        TransactionKind::Expense {
            by,
            category,
            from_location,
        } => vec![
            by.clone(),
            blank(),
            category.clone(),
            from_location.clone(),
            blank(),
            blank(),
            blank(),
        ],
        TransactionKind::Transfer {
            from_location,
            to_location,
            from_owner,
            to_owner,
        } => vec![
            blank(),
            blank(),
            blank(),
            from_location.clone(),
            to_location.clone(),
            from_owner.clone(),
            to_owner.clone(),
        ],
    }
}

/// The export file name for a period, e.g. "household-report-January-2024.csv".
pub fn export_file_name(month: Month, year: i32) -> String {
    format!("household-report-{month}-{year}.csv")
}

/// Export the period's report to a file in `out_dir`.
///
/// An empty period is a normal outcome: no file is written and `None` is
/// returned.
///
/// # Errors
/// Returns [Error::Export] if the file cannot be created or written.
pub fn export_report(
    transactions: &[Transaction],
    month: Month,
    year: i32,
    out_dir: &Path,
) -> Result<Option<PathBuf>, Error> {
    let filtered = filtered_for_export(transactions, month, year);
    if filtered.is_empty() {
        return Ok(None);
    }

    let path = out_dir.join(export_file_name(month, year));
    let file = File::create(&path).map_err(export_error)?;
    write_report(&filtered, file)?;

    tracing::info!("exported {} rows to {}", filtered.len(), path.display());
    Ok(Some(path))
}

fn export_error(error: impl std::fmt::Display) -> Error {
    Error::Export(error.to_string())
}
