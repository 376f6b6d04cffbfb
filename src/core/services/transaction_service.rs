//! Business logic for recording transactions.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

use crate::config::LedgerLimits;
use crate::core::errors::{LedgerError, Result};
use crate::ledger::{Ledger, Owner, Transaction, TransactionDraft, TransactionId, TransactionKind};

use super::{bounded_text, ensure_owner, BudgetService};

/// Validates and commits transactions, all-or-nothing.
pub struct TransactionService;

impl TransactionService {
    /// Records `draft` on behalf of `owner` at `now`, booked on `today`.
    ///
    /// `today` picks the budget period both for the limit check and for the
    /// committed transaction, so later status queries see the same window.
    ///
    /// Input checks run first, then the account lookup, then the budget check
    /// for expenses. The transaction id is only allocated once every check has
    /// passed, so a rejected call consumes nothing.
    pub fn record(
        ledger: &mut Ledger,
        limits: &LedgerLimits,
        owner: &Owner,
        draft: TransactionDraft,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<TransactionId> {
        ensure_owner(owner)?;
        let category =
            bounded_text("category", &draft.category, 1, limits.max_category_len)?.to_string();
        let description =
            bounded_text("description", &draft.description, 0, limits.max_description_len)?
                .to_string();
        let draft = TransactionDraft {
            category,
            description,
            ..draft
        };

        if ledger.account(draft.account_id).is_none() {
            warn!(account_id = %draft.account_id, owner = %owner, "transaction rejected: unknown account");
            return Err(LedgerError::AccountNotFound(draft.account_id));
        }

        if draft.kind == TransactionKind::Expense {
            if let Err(err) = BudgetService::ensure_within_budget(
                ledger,
                owner,
                &draft.category,
                draft.amount,
                today,
            ) {
                warn!(owner = %owner, category = %draft.category, amount = draft.amount, "transaction rejected: {}", err);
                return Err(err);
            }
        }

        let kind = draft.kind;
        let amount = draft.amount;
        let id = ledger.commit_transaction(owner.clone(), draft, now, today);
        info!(transaction_id = %id, owner = %owner, %kind, amount, "transaction recorded");
        Ok(id)
    }

    pub fn get(ledger: &Ledger, id: TransactionId) -> Option<&Transaction> {
        ledger.transaction(id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::ledger::{AccountId, BudgetPeriod, BudgetSettings, Sequence};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
    }

    fn ledger_with_account(owner: &Owner) -> (Ledger, AccountId) {
        let mut ledger = Ledger::new();
        let id = ledger.commit_account(owner.clone(), "Main");
        (ledger, id)
    }

    fn record(ledger: &mut Ledger, owner: &Owner, draft: TransactionDraft) -> Result<TransactionId> {
        TransactionService::record(
            ledger,
            &LedgerLimits::default(),
            owner,
            draft,
            now(),
            now().date_naive(),
        )
    }

    #[test]
    fn income_is_committed_with_clock_time() {
        let owner = Owner::new("alice");
        let (mut ledger, acct) = ledger_with_account(&owner);
        let draft = TransactionDraft::income(acct, 100_000, "Salary").with_description("Monthly salary");
        let id = record(&mut ledger, &owner, draft).unwrap();

        assert_eq!(id, TransactionId(1));
        let txn = TransactionService::get(&ledger, id).unwrap();
        assert_eq!(txn.amount, 100_000);
        assert_eq!(txn.category, "Salary");
        assert_eq!(txn.description, "Monthly salary");
        assert_eq!(txn.recorded_at, now());
        assert_eq!(txn.booked_on, now().date_naive());
        assert_eq!(txn.owner, owner);
    }

    #[test]
    fn unknown_account_leaves_no_trace() {
        let owner = Owner::new("alice");
        let mut ledger = Ledger::new();
        let err = record(&mut ledger, &owner, TransactionDraft::income(AccountId(1), 5, "Salary"))
            .expect_err("account 1 does not exist");
        assert_eq!(err, LedgerError::AccountNotFound(AccountId(1)));
        assert_eq!(ledger.transaction_count(), 0);
        assert_eq!(ledger.peek_next_id(Sequence::Transactions), 1);
    }

    #[test]
    fn expense_over_budget_is_rejected_without_consuming_an_id() {
        let owner = Owner::new("alice");
        let (mut ledger, acct) = ledger_with_account(&owner);
        let settings = BudgetSettings::new("Food", 1_000, BudgetPeriod::Monthly).with_alerts(80);
        BudgetService::set(&mut ledger, &LedgerLimits::default(), &owner, settings, now()).unwrap();

        let err = record(&mut ledger, &owner, TransactionDraft::expense(acct, 1_100, "Food"))
            .expect_err("1100 exceeds 1000");
        assert_eq!(err.code().as_u32(), 103);
        assert_eq!(ledger.transaction_count(), 0);

        let id = record(&mut ledger, &owner, TransactionDraft::expense(acct, 1_000, "Food")).unwrap();
        assert_eq!(id, TransactionId(1), "exact limit is accepted and gets the first id");
    }

    #[test]
    fn income_ignores_budget_limits() {
        let owner = Owner::new("alice");
        let (mut ledger, acct) = ledger_with_account(&owner);
        let settings = BudgetSettings::new("Food", 10, BudgetPeriod::Daily);
        BudgetService::set(&mut ledger, &LedgerLimits::default(), &owner, settings, now()).unwrap();
        assert!(record(&mut ledger, &owner, TransactionDraft::income(acct, 10_000, "Food")).is_ok());
    }

    #[test]
    fn blank_category_is_invalid_input() {
        let owner = Owner::new("alice");
        let (mut ledger, acct) = ledger_with_account(&owner);
        let err = record(&mut ledger, &owner, TransactionDraft::expense(acct, 1, "  "))
            .expect_err("category is required");
        assert!(matches!(err, LedgerError::InvalidInput(_)), "unexpected error: {err:?}");
    }
}
