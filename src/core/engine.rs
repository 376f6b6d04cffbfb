use std::sync::Arc;

use crate::config::LedgerLimits;
use crate::core::errors::Result;
use crate::core::services::{AccountService, BudgetService, TransactionService};
use crate::core::time::{Clock, SystemClock};
use crate::ledger::{
    Account, AccountId, Budget, BudgetSettings, BudgetStatus, Ledger, Owner, Sequence,
    Transaction, TransactionDraft, TransactionId,
};

/// Facade that owns the ledger registries and applies operations one at a
/// time on behalf of an authenticated caller.
///
/// Mutating operations take `&mut self`, so the borrow checker enforces the
/// single-writer model; hosts that share an engine across threads wrap it in a
/// lock.
pub struct LedgerEngine {
    ledger: Ledger,
    clock: Arc<dyn Clock>,
    limits: LedgerLimits,
}

impl LedgerEngine {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_limits(clock, LedgerLimits::default())
    }

    pub fn with_limits(clock: Arc<dyn Clock>, limits: LedgerLimits) -> Self {
        Self {
            ledger: Ledger::new(),
            clock,
            limits,
        }
    }

    /// Engine driven by the system UTC clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    pub fn create_account(&mut self, owner: &Owner, name: &str) -> Result<AccountId> {
        AccountService::create(&mut self.ledger, &self.limits, owner, name)
    }

    pub fn record_transaction(
        &mut self,
        owner: &Owner,
        draft: TransactionDraft,
    ) -> Result<TransactionId> {
        let now = self.clock.now();
        let today = self.clock.today();
        TransactionService::record(&mut self.ledger, &self.limits, owner, draft, now, today)
    }

    pub fn set_budget(&mut self, owner: &Owner, settings: BudgetSettings) -> Result<()> {
        let now = self.clock.now();
        BudgetService::set(&mut self.ledger, &self.limits, owner, settings, now)?;
        Ok(())
    }

    pub fn get_account(&self, id: AccountId) -> Option<&Account> {
        AccountService::get(&self.ledger, id)
    }

    pub fn get_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        TransactionService::get(&self.ledger, id)
    }

    pub fn get_budget(&self, owner: &Owner, category: &str) -> Option<&Budget> {
        BudgetService::get(&self.ledger, owner, category)
    }

    pub fn get_budget_status(&self, owner: &Owner, category: &str) -> Result<BudgetStatus> {
        BudgetService::status(&self.ledger, owner, category, self.clock.today())
    }

    pub fn account_count(&self) -> usize {
        self.ledger.account_count()
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.transaction_count()
    }

    pub fn peek_next_id(&self, sequence: Sequence) -> u64 {
        self.ledger.peek_next_id(sequence)
    }
}
