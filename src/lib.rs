//! Homebook is the engine of a two-person household wallet.
//!
//! It owns the transaction data model and everything computed from it: the
//! dashboard totals, the monthly income/expense chart, the filtered,
//! sorted, and paginated monthly report, the per-location balance
//! breakdown, and the spreadsheet export. Persistence is a managed remote
//! document store reached through [store::RestStore]; the store pushes
//! whole-list snapshots and the engine recomputes everything from the
//! current snapshot, so all aggregation is pure and synchronous.
//!
//! Rendering is not here. A front-end shell consumes the computed values
//! (and the chart option JSON from [chart::chart_options_json]) and feeds
//! user actions back into the [session::Session] state holders.

#![warn(missing_docs)]

pub mod alert;
pub mod auth;
pub mod balance;
pub mod chart;
pub mod config;
pub mod export;
pub mod format;
pub mod photo;
pub mod report;
pub mod session;
pub mod store;
pub mod summary;
pub mod transaction;

pub use alert::{Alert, AlertKind};
pub use auth::AuthError;
pub use config::Config;
pub use session::Session;
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

/// The errors that may occur in the engine.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A draft was submitted with a negative (or non-finite) amount.
    /// Amounts are unsigned; the transaction kind decides the direction.
    #[error("transaction amounts must not be negative, got {0}")]
    NegativeAmount(f64),

    /// A required field of a draft was left blank.
    #[error("the {0} field must not be empty")]
    MissingField(&'static str),

    /// The store rejected or failed a request. The user may retry; nothing
    /// retries automatically.
    #[error("the wallet store could not complete the request: {0}")]
    StoreRequest(String),

    /// A store document could not be decoded. Usually means the document
    /// violates the wire schema, e.g. a record whose fields do not match
    /// its type.
    #[error("could not decode a store document: {0}")]
    StoreDecode(String),

    /// Tried to update a transaction that is not in the store. It may have
    /// been deleted from another device since the last snapshot.
    #[error("tried to update a transaction that is not in the store")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that is not in the store.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// The attached receipt could not be decoded or re-encoded as an image.
    #[error("could not process the receipt image: {0}")]
    InvalidImage(String),

    /// The receipt upload failed. The save is aborted before any store
    /// write, so no record refers to a missing image.
    #[error("the receipt upload failed: {0}")]
    UploadFailed(String),

    /// The report export could not be written.
    #[error("could not write the report export: {0}")]
    Export(String),

    /// The configuration file could not be read or parsed.
    #[error("could not load the configuration: {0}")]
    Config(String),
}

impl Error {
    /// Whether the notification layer should offer the user a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StoreRequest(_) | Error::UploadFailed(_))
    }
}
