//! Per-location balance breakdown.
//!
//! Replays the full transaction history into a ledger of storage locations,
//! tracking each location's total and the share held by each co-owner.
//! Addition is commutative, so the replay order never changes the final
//! sums; only the final totals are read.

use std::collections::HashMap;

use crate::transaction::{Transaction, TransactionKind};

/// Locations whose total rounds to at most this many currency units are
/// hidden from display. Absorbs floating-point dust from long histories.
pub const DISPLAY_EPSILON: f64 = 0.01;

/// The funds held at one storage location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationBalance {
    /// The net amount held at the location.
    pub total: f64,
    /// The net amount per co-owner. Owners are created zeroed on first
    /// reference, so a share can be present and negative.
    pub by_owner: HashMap<String, f64>,
}

impl LocationBalance {
    /// The share of this location's funds held by `owner`.
    pub fn owner_share(&self, owner: &str) -> f64 {
        self.by_owner.get(owner).copied().unwrap_or(0.0)
    }

    fn credit(&mut self, owner: &str, amount: f64) {
        self.total += amount;
        *self.by_owner.entry(owner.to_owned()).or_insert(0.0) += amount;
    }

    fn debit(&mut self, owner: &str, amount: f64) {
        self.total -= amount;
        *self.by_owner.entry(owner.to_owned()).or_insert(0.0) -= amount;
    }
}

/// The full per-location ledger, including near-zero locations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationLedger {
    locations: HashMap<String, LocationBalance>,
}

impl LocationLedger {
    /// Look up a location by name, whether or not it is displayed.
    pub fn get(&self, location: &str) -> Option<&LocationBalance> {
        self.locations.get(location)
    }

    /// The number of locations ever referenced.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no location has ever been referenced.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The sum of all location totals.
    pub fn grand_total(&self) -> f64 {
        self.locations.values().map(|balance| balance.total).sum()
    }

    /// The locations worth displaying: totals above `epsilon`, largest
    /// first. Locations that net to roughly zero stay in the ledger but are
    /// suppressed here.
    pub fn visible(&self, epsilon: f64) -> Vec<(&str, &LocationBalance)> {
        let mut visible: Vec<(&str, &LocationBalance)> = self
            .locations
            .iter()
            .filter(|(_, balance)| balance.total > epsilon)
            .map(|(location, balance)| (location.as_str(), balance))
            .collect();

        visible.sort_by(|a, b| {
            b.1.total
                .partial_cmp(&a.1.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        visible
    }

    fn location(&mut self, name: &str) -> &mut LocationBalance {
        self.locations.entry(name.to_owned()).or_default()
    }
}

/// Replay the transaction history into a per-location ledger.
///
/// Income adds to its storage location and the earning owner's share;
/// expenses subtract from their source location and the spending owner's
/// share; transfers move the amount between locations and owner shares. A
/// transfer whose source and destination coincide nets to zero, which is
/// accepted as recorded.
pub fn compute_location_balances(transactions: &[Transaction]) -> LocationLedger {
    let mut ledger = LocationLedger::default();

    for transaction in transactions {
        match &transaction.kind {
            TransactionKind::Income { by, stored_at } => {
                ledger.location(stored_at).credit(by, transaction.amount);
            }
            TransactionKind::Expense {
                by, from_location, ..
            } => {
                ledger.location(from_location).debit(by, transaction.amount);
            }
            TransactionKind::Transfer {
                from_location,
                to_location,
                from_owner,
                to_owner,
            } => {
                ledger
                    .location(from_location)
                    .debit(from_owner, transaction.amount);
                ledger
                    .location(to_location)
                    .credit(to_owner, transaction.amount);
            }
        }
    }

    ledger
}
