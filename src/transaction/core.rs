//! Defines the core data model for wallet transactions.
//!
//! A [Transaction] is one of three kinds: income earned by a co-owner and
//! stored at a location, an expense paid by a co-owner out of a location, or
//! a transfer of funds between locations (and possibly between co-owners).
//! Records are immutable once fetched; the store replaces the whole list on
//! every snapshot.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::Error;

/// The store-assigned identifier of a transaction record.
pub type TransactionId = String;

/// The type-specific part of a transaction.
///
/// Exactly one field set is populated, matching the record's `type` field on
/// the wire. Owners and locations are free-form strings; the household's two
/// co-owner names come from configuration and only affect display grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned by a co-owner, kept at a storage location.
    Income {
        /// The co-owner who earned the money.
        by: String,
        /// Where the funds are kept.
        #[serde(rename = "storedAt")]
        stored_at: String,
    },
    /// Money spent by a co-owner out of a location.
    Expense {
        /// The co-owner who spent the money.
        by: String,
        /// The spending category, e.g. "Groceries".
        category: String,
        /// The location the funds were taken from.
        #[serde(rename = "fromLocation")]
        from_location: String,
    },
    /// Funds moved from one location to another.
    Transfer {
        /// The source location.
        #[serde(rename = "fromLocation")]
        from_location: String,
        /// The destination location.
        #[serde(rename = "toLocation")]
        to_location: String,
        /// The co-owner the funds are moved from.
        #[serde(rename = "fromOwner")]
        from_owner: String,
        /// The co-owner the funds are moved to.
        #[serde(rename = "toOwner")]
        to_owner: String,
    },
}

impl TransactionKind {
    /// The wire name of the kind, e.g. "income".
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income { .. } => "income",
            TransactionKind::Expense { .. } => "expense",
            TransactionKind::Transfer { .. } => "transfer",
        }
    }
}

/// A single wallet transaction as stored in the remote document store.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The record id. Empty until the store has assigned one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: TransactionId,
    /// The amount of money involved. Always non-negative; the kind decides
    /// the direction.
    pub amount: f64,
    /// The business date of the transaction, as entered by the user.
    pub date: Date,
    /// When the record was created, stamped by the store. Absent for
    /// pre-migration records.
    #[serde(
        rename = "createdAt",
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    /// When the record was last written.
    #[serde(
        rename = "updatedAt",
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    /// Free-text note, may be empty.
    #[serde(default)]
    pub note: String,
    /// URL of the attached receipt photo, if any.
    #[serde(rename = "photoUrl", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// The type-specific fields.
    #[serde(flatten)]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Start building a new transaction.
    ///
    /// Shortcut for [TransactionDraft] for discoverability.
    pub fn build(amount: f64, date: Date, kind: TransactionKind) -> TransactionDraft {
        TransactionDraft {
            amount,
            date,
            note: String::new(),
            photo_url: None,
            kind,
        }
    }

    /// The instant the record was entered, for recency ordering.
    ///
    /// Records missing `created_at` (pre-migration data) fall back to their
    /// business date at midnight UTC so they interleave deterministically
    /// with stamped records.
    pub fn entered_at(&self) -> OffsetDateTime {
        self.created_at
            .unwrap_or_else(|| self.date.midnight().assume_utc())
    }

    /// The month the transaction falls in, as a date pinned to day 1.
    pub fn month(&self) -> Date {
        self.date.replace_day(1).unwrap()
    }

    /// Whether this is an income record.
    pub fn is_income(&self) -> bool {
        matches!(self.kind, TransactionKind::Income { .. })
    }

    /// Whether this is an expense record.
    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TransactionKind::Expense { .. })
    }
}

/// A transaction that has not been written to the store yet.
///
/// Drafts carry the user-entered fields only; the store assigns the id and
/// the creation timestamp when the draft is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// The monetary amount. Must be non-negative.
    pub amount: f64,
    /// The business date of the transaction.
    pub date: Date,
    /// Free-text note.
    pub note: String,
    /// Receipt photo URL, set by the save pipeline after upload.
    pub photo_url: Option<String>,
    /// The type-specific fields.
    pub kind: TransactionKind,
}

impl TransactionDraft {
    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_owned();
        self
    }

    /// Set the receipt photo URL for the transaction.
    pub fn photo_url(mut self, photo_url: Option<String>) -> Self {
        self.photo_url = photo_url;
        self
    }

    /// Check the draft against the data-model invariants.
    ///
    /// Transfers with identical source and destination are accepted; the
    /// ledger fold is well-defined either way and rejecting them here would
    /// invalidate records the store already holds.
    ///
    /// # Errors
    /// Returns [Error::NegativeAmount] if the amount is negative or not a
    /// number, or [Error::MissingField] if a required field is blank.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        match &self.kind {
            TransactionKind::Income { by, stored_at } => {
                require(by, "owner")?;
                require(stored_at, "storage location")?;
            }
            TransactionKind::Expense {
                by,
                category,
                from_location,
            } => {
                require(by, "owner")?;
                require(category, "category")?;
                require(from_location, "source location")?;
            }
            TransactionKind::Transfer {
                from_location,
                to_location,
                from_owner,
                to_owner,
            } => {
                require(from_location, "source location")?;
                require(to_location, "destination location")?;
                require(from_owner, "source owner")?;
                require(to_owner, "destination owner")?;
            }
        }

        Ok(())
    }

    /// Convert the draft into a record ready for the store, with no id and
    /// no timestamps.
    pub(crate) fn into_record(self) -> Transaction {
        Transaction {
            id: String::new(),
            amount: self.amount,
            date: self.date,
            created_at: None,
            updated_at: None,
            note: self.note,
            photo_url: self.photo_url,
            kind: self.kind,
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), Error> {
    if value.trim().is_empty() {
        Err(Error::MissingField(field))
    } else {
        Ok(())
    }
}
