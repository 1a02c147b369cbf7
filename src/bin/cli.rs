use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use time::{Month, OffsetDateTime};
use tracing_subscriber::EnvFilter;

use homebook::{
    Config,
    balance::compute_location_balances,
    export::export_report,
    format::currency,
    report::{SortBy, compute_report_page},
    store::{DocumentStore, RestStore, watch_snapshots},
    summary::{compute_summary, entry_consistency, recent_activity},
};

/// Command line access to the household wallet.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the wallet configuration. Defaults to homebook.toml in
    /// the working directory when present.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the wallet totals.
    Summary,
    /// Print one page of the monthly report.
    Report {
        /// Month to report on, 1-12. Defaults to the current month.
        #[arg(long)]
        month: Option<u8>,
        /// Year to report on. Defaults to the current year.
        #[arg(long)]
        year: Option<i32>,
        /// Sort key for the report rows.
        #[arg(long, value_enum, default_value_t = SortArg::CreatedAt)]
        sort: SortArg,
        /// Page number, 1-based.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Print the per-location balance breakdown.
    Balances,
    /// Write the monthly report to a CSV file.
    Export {
        /// Month to export, 1-12. Defaults to the current month.
        #[arg(long)]
        month: Option<u8>,
        /// Year to export. Defaults to the current year.
        #[arg(long)]
        year: Option<i32>,
        /// Directory to write the file into.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Follow store snapshots and print the totals as they change.
    Watch,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SortArg {
    /// Newest entry first.
    CreatedAt,
    /// Newest business date first.
    Date,
}

impl From<SortArg> for SortBy {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::CreatedAt => SortBy::CreatedAt,
            SortArg::Date => SortBy::Date,
        }
    }
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let config = load_config(args.config.as_deref());
    let store = RestStore::new(&config.store.base_url, &config.store.user_id);

    let today = OffsetDateTime::now_utc().date();

    match args.command {
        Command::Summary => {
            let transactions = store.list().await.expect("Could not fetch transactions");
            let summary = compute_summary(&transactions);

            println!("Income:   {}", currency(summary.income_total));
            println!("Expenses: {}", currency(summary.expense_total));
            println!("Balance:  {}", currency(summary.current_balance));

            println!("\nRecent activity:");
            for transaction in recent_activity(&transactions, 5) {
                println!(
                    "  {}  {:<8}  {:>16}  {}",
                    transaction.date,
                    transaction.kind.label(),
                    currency(transaction.amount),
                    transaction.note,
                );
            }

            let streak = entry_consistency(&transactions, today);
            let marks: String = streak
                .iter()
                .map(|day| if day.has_entry { '#' } else { '-' })
                .collect();
            println!("\nEntries this week: {marks}");
        }
        Command::Report {
            month,
            year,
            sort,
            page,
        } => {
            let month = resolve_month(month, today);
            let year = year.unwrap_or(today.year());
            let transactions = store.list().await.expect("Could not fetch transactions");

            let report = compute_report_page(
                &transactions,
                month,
                year,
                sort.into(),
                page,
                config.report_page_size,
            );

            if report.total_pages == 0 {
                println!("No transactions in {month} {year}.");
                return;
            }

            for transaction in &report.items {
                println!(
                    "{}  {:<8}  {:>16}  {}",
                    transaction.date,
                    transaction.kind.label(),
                    currency(transaction.amount),
                    transaction.note,
                );
            }
            println!(
                "Page {page} of {} | income {} | expenses {} | net {}",
                report.total_pages,
                currency(report.subtotals.income),
                currency(report.subtotals.expense),
                currency(report.subtotals.net),
            );
        }
        Command::Balances => {
            let transactions = store.list().await.expect("Could not fetch transactions");
            let ledger = compute_location_balances(&transactions);

            for (location, balance) in ledger.visible(config.display_epsilon) {
                println!("{location}: {}", currency(balance.total));
                for owner in &config.owners {
                    println!("  {owner}: {}", currency(balance.owner_share(owner)));
                }
            }
        }
        Command::Export {
            month,
            year,
            out_dir,
        } => {
            let month = resolve_month(month, today);
            let year = year.unwrap_or(today.year());
            let transactions = store.list().await.expect("Could not fetch transactions");

            match export_report(&transactions, month, year, &out_dir)
                .expect("Could not write the export")
            {
                Some(path) => println!("Wrote {}", path.display()),
                None => println!("No transactions in {month} {year}, nothing to export."),
            }
        }
        Command::Watch => {
            let store: Arc<dyn DocumentStore> = Arc::new(store);
            let (mut receiver, _handle) =
                watch_snapshots(store, Duration::from_secs(config.poll_interval_secs));

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    changed = receiver.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let snapshot = receiver.borrow_and_update().clone();
                        let summary = compute_summary(&snapshot);
                        println!(
                            "{} transactions | income {} | expenses {} | balance {}",
                            snapshot.len(),
                            currency(summary.income_total),
                            currency(summary.expense_total),
                            currency(summary.current_balance),
                        );
                    }
                }
            }
        }
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load(path).expect("Could not load the configuration"),
        None => {
            let default_path = Path::new("homebook.toml");
            if default_path.exists() {
                Config::load(default_path).expect("Could not load the configuration")
            } else {
                Config::default()
            }
        }
    }
}

fn resolve_month(month: Option<u8>, today: time::Date) -> Month {
    match month {
        Some(month) => Month::try_from(month).expect("The month must be between 1 and 12"),
        None => today.month(),
    }
}
