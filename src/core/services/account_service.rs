use tracing::info;

use crate::config::LedgerLimits;
use crate::core::errors::Result;
use crate::ledger::{Account, AccountId, Ledger, Owner};

use super::{bounded_text, ensure_owner};

pub struct AccountService;

impl AccountService {
    /// Registers a new account for `owner`. Names need not be unique.
    pub fn create(
        ledger: &mut Ledger,
        limits: &LedgerLimits,
        owner: &Owner,
        name: &str,
    ) -> Result<AccountId> {
        ensure_owner(owner)?;
        let name = bounded_text("account name", name, 1, limits.max_account_name_len)?;
        let id = ledger.commit_account(owner.clone(), name);
        info!(account_id = %id, owner = %owner, "account created");
        Ok(id)
    }

    pub fn get(ledger: &Ledger, id: AccountId) -> Option<&Account> {
        ledger.account(id)
    }
}
