//! The per-location balance breakdown shown behind the balance card.

mod breakdown;

pub use breakdown::{
    DISPLAY_EPSILON, LocationBalance, LocationLedger, compute_location_balances,
};
