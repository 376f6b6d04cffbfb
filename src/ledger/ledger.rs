use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use super::{
    account::{Account, Owner},
    budget::Budget,
    ids::{AccountId, IdAllocator, Sequence, TransactionId},
    period::PeriodWindow,
    transaction::{Transaction, TransactionDraft, TransactionKind},
};

/// Append-only registries of accounts, transactions, and budgets.
///
/// The ledger performs no validation; callers go through the services in
/// [`crate::core::services`], which check every rule before committing.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: BTreeMap<AccountId, Account>,
    transactions: BTreeMap<TransactionId, Transaction>,
    budgets: BTreeMap<Owner, BTreeMap<String, Budget>>,
    ids: IdAllocator,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an account id and stores the account under it.
    pub fn commit_account(&mut self, owner: Owner, name: impl Into<String>) -> AccountId {
        let id = self.ids.next_account_id();
        self.accounts.insert(id, Account::new(id, owner, name));
        id
    }

    /// Allocates a transaction id and stores the transaction under it.
    pub fn commit_transaction(
        &mut self,
        owner: Owner,
        draft: TransactionDraft,
        recorded_at: DateTime<Utc>,
        booked_on: NaiveDate,
    ) -> TransactionId {
        let id = self.ids.next_transaction_id();
        self.transactions
            .insert(id, Transaction::commit(id, owner, draft, recorded_at, booked_on));
        id
    }

    /// Stores `budget`, replacing and returning any budget the owner already
    /// had for the same category.
    pub fn upsert_budget(&mut self, budget: Budget) -> Option<Budget> {
        self.budgets
            .entry(budget.owner.clone())
            .or_default()
            .insert(budget.category.clone(), budget)
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(&id)
    }

    pub fn budget(&self, owner: &Owner, category: &str) -> Option<&Budget> {
        self.budgets.get(owner).and_then(|by_category| by_category.get(category))
    }

    /// Sum of the owner's expenses in `category` booked inside `window`.
    pub fn expense_total(&self, owner: &Owner, category: &str, window: PeriodWindow) -> u64 {
        self.transactions
            .values()
            .filter(|txn| {
                txn.kind == TransactionKind::Expense
                    && txn.owner == *owner
                    && txn.category == category
                    && window.contains(txn.booked_on)
            })
            .fold(0u64, |total, txn| total.saturating_add(txn.amount))
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn budget_count(&self) -> usize {
        self.budgets.values().map(BTreeMap::len).sum()
    }

    /// Value the given sequence will issue on its next commit.
    pub fn peek_next_id(&self, sequence: Sequence) -> u64 {
        self.ids.peek(sequence)
    }
}
