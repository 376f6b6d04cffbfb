//! Budget configuration, period aggregation, and enforcement.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info};

use crate::config::LedgerLimits;
use crate::core::errors::{LedgerError, Result};
use crate::ledger::{Budget, BudgetSettings, BudgetStatus, Ledger, Owner, PeriodWindow};

use super::{bounded_text, ensure_owner};

const MAX_ALERT_THRESHOLD: u8 = 100;

/// Stateless budgeting utilities that operate over a [`Ledger`].
pub struct BudgetService;

impl BudgetService {
    /// Stores the owner's budget for `settings.category`, replacing any prior
    /// configuration. Recorded transactions are left untouched.
    pub fn set(
        ledger: &mut Ledger,
        limits: &LedgerLimits,
        owner: &Owner,
        settings: BudgetSettings,
        now: DateTime<Utc>,
    ) -> Result<Option<Budget>> {
        ensure_owner(owner)?;
        let category =
            bounded_text("category", &settings.category, 1, limits.max_category_len)?.to_string();
        if settings.limit == 0 {
            return Err(LedgerError::InvalidInput(
                "budget limit must be greater than zero".into(),
            ));
        }
        if settings.alert_threshold > MAX_ALERT_THRESHOLD {
            return Err(LedgerError::InvalidInput(format!(
                "alert threshold {} is outside 0..=100",
                settings.alert_threshold
            )));
        }

        let settings = BudgetSettings { category, ..settings };
        let budget = Budget::from_settings(owner.clone(), settings, now);
        info!(
            owner = %owner,
            category = %budget.category,
            limit = budget.limit,
            period = %budget.period,
            "budget set"
        );
        Ok(ledger.upsert_budget(budget))
    }

    pub fn get<'a>(ledger: &'a Ledger, owner: &Owner, category: &str) -> Option<&'a Budget> {
        ledger.budget(owner, category.trim())
    }

    /// Expense total accrued against `budget` in the period containing `today`.
    pub fn period_spent(ledger: &Ledger, budget: &Budget, today: NaiveDate) -> (u64, PeriodWindow) {
        let window = budget.period.window_containing(today);
        let spent = ledger.expense_total(&budget.owner, &budget.category, window);
        (spent, window)
    }

    /// Computes remaining amount, usage percentage, and alert state.
    pub fn status(
        ledger: &Ledger,
        owner: &Owner,
        category: &str,
        today: NaiveDate,
    ) -> Result<BudgetStatus> {
        let budget = Self::get(ledger, owner, category).ok_or_else(|| {
            LedgerError::NotFound(format!("no budget for category `{}`", category.trim()))
        })?;
        let (spent, window) = Self::period_spent(ledger, budget, today);
        let status = BudgetStatus::compute(budget, spent, window);
        debug!(
            owner = %owner,
            category = %status.category,
            spent = status.spent,
            used_percentage = status.used_percentage,
            alert = status.alert_triggered,
            "budget status computed"
        );
        Ok(status)
    }

    /// Fails with [`LedgerError::BudgetExceeded`] when an expense of `amount`
    /// would push the owner's spend for `category` past its limit. Categories
    /// without a budget accept any amount.
    pub fn ensure_within_budget(
        ledger: &Ledger,
        owner: &Owner,
        category: &str,
        amount: u64,
        today: NaiveDate,
    ) -> Result<()> {
        let Some(budget) = Self::get(ledger, owner, category) else {
            return Ok(());
        };
        let (spent, _) = Self::period_spent(ledger, budget, today);
        if budget.admits(spent, amount) {
            Ok(())
        } else {
            Err(LedgerError::BudgetExceeded {
                category: budget.category.clone(),
                limit: budget.limit,
                spent,
                attempted: amount,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::ledger::{BudgetPeriod, TransactionDraft};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap()
    }

    fn set(ledger: &mut Ledger, owner: &Owner, settings: BudgetSettings) -> Result<Option<Budget>> {
        BudgetService::set(ledger, &LedgerLimits::default(), owner, settings, now())
    }

    #[test]
    fn set_and_get_round_trip_all_fields() {
        let mut ledger = Ledger::new();
        let owner = Owner::new("alice");
        let settings = BudgetSettings::new("Groceries", 50_000, BudgetPeriod::Monthly).with_alerts(80);
        set(&mut ledger, &owner, settings).unwrap();

        let stored = BudgetService::get(&ledger, &owner, "Groceries").unwrap();
        assert_eq!(stored.limit, 50_000);
        assert_eq!(stored.period, BudgetPeriod::Monthly);
        assert!(stored.alerts_enabled);
        assert_eq!(stored.alert_threshold, 80);
        assert_eq!(stored.updated_at, now());
    }

    #[test]
    fn rejects_zero_limit_and_out_of_range_threshold() {
        let mut ledger = Ledger::new();
        let owner = Owner::new("alice");
        let zero = BudgetSettings::new("Food", 0, BudgetPeriod::Monthly);
        assert!(matches!(set(&mut ledger, &owner, zero), Err(LedgerError::InvalidInput(_))));

        let too_high = BudgetSettings::new("Food", 10, BudgetPeriod::Monthly).with_alerts(101);
        assert!(matches!(set(&mut ledger, &owner, too_high), Err(LedgerError::InvalidInput(_))));
        assert_eq!(ledger.budget_count(), 0);
    }

    #[test]
    fn status_for_unknown_category_is_not_found() {
        let ledger = Ledger::new();
        let err = BudgetService::status(&ledger, &Owner::new("alice"), "Food", now().date_naive())
            .expect_err("no budget configured");
        assert!(matches!(err, LedgerError::NotFound(_)), "unexpected error: {err:?}");
    }

    #[test]
    fn budgets_are_scoped_per_owner() {
        let mut ledger = Ledger::new();
        let alice = Owner::new("alice");
        let bob = Owner::new("bob");
        set(&mut ledger, &alice, BudgetSettings::new("Food", 100, BudgetPeriod::Monthly)).unwrap();
        assert!(BudgetService::get(&ledger, &bob, "Food").is_none());
        assert!(
            BudgetService::ensure_within_budget(&ledger, &bob, "Food", 1_000, now().date_naive())
                .is_ok()
        );
    }

    #[test]
    fn ensure_within_budget_reports_current_spend() {
        let mut ledger = Ledger::new();
        let owner = Owner::new("alice");
        let acct = ledger.commit_account(owner.clone(), "Main");
        set(&mut ledger, &owner, BudgetSettings::new("Food", 100, BudgetPeriod::Monthly)).unwrap();
        ledger.commit_transaction(
            owner.clone(),
            TransactionDraft::expense(acct, 60, "Food"),
            now(),
            now().date_naive(),
        );

        let err = BudgetService::ensure_within_budget(&ledger, &owner, "Food", 41, now().date_naive())
            .expect_err("60 + 41 exceeds 100");
        assert_eq!(
            err,
            LedgerError::BudgetExceeded {
                category: "Food".into(),
                limit: 100,
                spent: 60,
                attempted: 41,
            }
        );
        assert!(
            BudgetService::ensure_within_budget(&ledger, &owner, "Food", 40, now().date_naive())
                .is_ok()
        );
    }
}
