//! Sequential identifiers for ledger entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to an [`Account`](super::Account), starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub u64);

/// Identifier assigned to a [`Transaction`](super::Transaction), starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named identifier sequences. Each one counts independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Accounts,
    Transactions,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sequence::Accounts => "accounts",
            Sequence::Transactions => "transactions",
        };
        f.write_str(label)
    }
}

/// Issues dense, monotonically increasing identifiers per [`Sequence`].
///
/// The allocator stores the last issued value, so a fresh allocator hands out
/// `1` first. Callers must only invoke [`IdAllocator::next`] once the owning
/// entity is certain to be committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last_account: u64,
    last_transaction: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes and returns the next value of `sequence`.
    pub fn next(&mut self, sequence: Sequence) -> u64 {
        let slot = self.slot_mut(sequence);
        *slot += 1;
        *slot
    }

    /// Returns the value the next call to [`IdAllocator::next`] would issue.
    pub fn peek(&self, sequence: Sequence) -> u64 {
        match sequence {
            Sequence::Accounts => self.last_account + 1,
            Sequence::Transactions => self.last_transaction + 1,
        }
    }

    pub fn next_account_id(&mut self) -> AccountId {
        AccountId(self.next(Sequence::Accounts))
    }

    pub fn next_transaction_id(&mut self) -> TransactionId {
        TransactionId(self.next(Sequence::Transactions))
    }

    fn slot_mut(&mut self, sequence: Sequence) -> &mut u64 {
        match sequence {
            Sequence::Accounts => &mut self.last_account,
            Sequence::Transactions => &mut self.last_transaction,
        }
    }
}
