//! # Billing
//!
//! Monthly charges and payments. Both operate on a [`BoatStore`] handed in by the caller;
//! nothing here keeps state between calls.
//!
//! Charges are per foot of boat length, at a rate set by the kind of storage:
//!
//! | Storage | Rate per foot |
//! |---------|---------------|
//! | slip    | 12.50         |
//! | land    | 14.00         |
//! | trailer | 25.00         |
//! | storage | 11.20         |
//! | unknown | 0.00          |
//!
//! [`accrue_monthly`] is not idempotent: each call bills one more month.

use crate::error::{MarinaError, Result};
use crate::inventory::BoatStore;
use crate::model::StorageLocation;

pub const SLIP_RATE: f64 = 12.50;
pub const LAND_RATE: f64 = 14.00;
pub const TRAILER_RATE: f64 = 25.00;
pub const STORAGE_RATE: f64 = 11.20;

/// Monthly charge per foot for a location.
pub fn rate(location: &StorageLocation) -> f64 {
    match location {
        StorageLocation::Slip(_) => SLIP_RATE,
        StorageLocation::Land(_) => LAND_RATE,
        StorageLocation::Trailer(_) => TRAILER_RATE,
        StorageLocation::Storage(_) => STORAGE_RATE,
        StorageLocation::Unknown => 0.0,
    }
}

/// Adds one month of charges to every boat. Returns the total billed.
///
/// Every new balance is worked out before any is applied, so a balance that would leave
/// the range of `f64` fails the whole month and no boat is charged.
pub fn accrue_monthly(store: &mut BoatStore) -> Result<f64> {
    let mut balances = Vec::with_capacity(store.len());
    for record in store.all() {
        let charge = rate(record.location()) * record.length();
        let balance = record.amount_owed() + charge;
        if !balance.is_finite() {
            return Err(MarinaError::BalanceOverflow(record.name().to_string()));
        }
        balances.push((charge, balance));
    }

    let mut billed = 0.0;
    for (record, (charge, balance)) in store.all_mut().zip(balances) {
        record.set_amount_owed(balance);
        billed += charge;
    }
    tracing::info!(boats = store.len(), billed, "monthly charges applied");
    Ok(billed)
}

/// Takes a payment against the named boat and returns the new balance.
///
/// A payment larger than the balance is refused outright; nothing is applied.
pub fn accept_payment(store: &mut BoatStore, name: &str, amount: f64) -> Result<f64> {
    let record = store
        .find_mut(name)
        .ok_or_else(|| MarinaError::NotFound(name.to_string()))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(MarinaError::InvalidAmount(amount));
    }
    let owed = record.amount_owed();
    if amount > owed {
        return Err(MarinaError::Overpayment { owed });
    }

    record.set_amount_owed((owed - amount).max(0.0));
    tracing::debug!(name = record.name(), amount, balance = record.amount_owed(), "payment accepted");
    Ok(record.amount_owed())
}
