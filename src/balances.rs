use std::collections::HashMap;

use anyhow::{bail, Result};
use ethers::types::{Address, I256, Sign, U256};

use crate::models::{BalanceEntry, TransferEvent};

/// Net signed balance per address, accumulated over a sequence of transfers.
/// Every debit is matched by an equal credit, so the values always sum to
/// zero. The zero address participates like any other, so mints show up as a
/// negative balance on it.
#[derive(Debug, Default)]
pub struct BalanceBook {
    balances: HashMap<Address, I256>,
}

impl BalanceBook {
    /// Apply one transfer: subtract the amount from the sender, add it to
    /// the recipient. Missing entries start at zero.
    pub fn apply(&mut self, event: &TransferEvent) -> Result<()> {
        let amount = signed(event.value)?;

        let sender = self.balances.entry(event.from).or_default();
        *sender = match sender.checked_sub(amount) {
            Some(v) => v,
            None => bail!("balance underflow for {:?}", event.from),
        };

        let recipient = self.balances.entry(event.to).or_default();
        *recipient = match recipient.checked_add(amount) {
            Some(v) => v,
            None => bail!("balance overflow for {:?}", event.to),
        };

        Ok(())
    }

    /// Snapshot of the book sorted non-increasing by amount. Ties keep the
    /// map's iteration order, which is unspecified across runs.
    pub fn ranked(&self) -> Vec<BalanceEntry> {
        let mut entries: Vec<BalanceEntry> = self
            .balances
            .iter()
            .map(|(address, amount)| BalanceEntry {
                address: *address,
                amount: *amount,
            })
            .collect();
        entries.sort_by(|a, b| b.amount.cmp(&a.amount));
        entries
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn balance_of(&self, address: &Address) -> Option<I256> {
        self.balances.get(address).copied()
    }
}

/// Transfer amounts arrive as uint256; the running balances are signed, so
/// an amount above the signed range cannot be represented and is fatal.
fn signed(value: U256) -> Result<I256> {
    match I256::checked_from_sign_and_abs(Sign::Positive, value) {
        Some(v) => Ok(v),
        None => bail!("transfer amount {} exceeds the signed 256-bit range", value),
    }
}
