use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{account::Owner, period::PeriodWindow};
use crate::core::errors::LedgerError;

/// Recurring window over which budget spend accrues before resetting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn label(self) -> &'static str {
        match self {
            BudgetPeriod::Daily => "DAILY",
            BudgetPeriod::Weekly => "WEEKLY",
            BudgetPeriod::Monthly => "MONTHLY",
            BudgetPeriod::Yearly => "YEARLY",
        }
    }

    /// Returns the instance of this period that contains `reference`.
    pub fn window_containing(self, reference: NaiveDate) -> PeriodWindow {
        PeriodWindow::containing(self, reference)
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetPeriod {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Ok(BudgetPeriod::Daily),
            "WEEKLY" => Ok(BudgetPeriod::Weekly),
            "MONTHLY" => Ok(BudgetPeriod::Monthly),
            "YEARLY" => Ok(BudgetPeriod::Yearly),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown budget period `{}` (expected DAILY, WEEKLY, MONTHLY or YEARLY)",
                other
            ))),
        }
    }
}

/// Caller-supplied configuration for a category budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSettings {
    pub category: String,
    pub limit: u64,
    pub period: BudgetPeriod,
    pub alerts_enabled: bool,
    pub alert_threshold: u8,
}

impl BudgetSettings {
    pub fn new(category: impl Into<String>, limit: u64, period: BudgetPeriod) -> Self {
        Self {
            category: category.into(),
            limit,
            period,
            alerts_enabled: false,
            alert_threshold: 100,
        }
    }

    pub fn with_alerts(mut self, threshold: u8) -> Self {
        self.alerts_enabled = true;
        self.alert_threshold = threshold;
        self
    }
}

/// A per-category spending cap owned by a single caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Budget {
    pub owner: Owner,
    pub category: String,
    pub limit: u64,
    pub period: BudgetPeriod,
    pub alerts_enabled: bool,
    pub alert_threshold: u8,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    pub fn from_settings(owner: Owner, settings: BudgetSettings, updated_at: DateTime<Utc>) -> Self {
        Self {
            owner,
            category: settings.category,
            limit: settings.limit,
            period: settings.period,
            alerts_enabled: settings.alerts_enabled,
            alert_threshold: settings.alert_threshold,
            updated_at,
        }
    }

    /// Whether spending `amount` on top of `spent` stays within the limit.
    ///
    /// Reaching the limit exactly is allowed; only strictly exceeding it fails.
    pub fn admits(&self, spent: u64, amount: u64) -> bool {
        match spent.checked_add(amount) {
            Some(total) => total <= self.limit,
            None => false,
        }
    }
}

/// Derived usage figures for a budget over its current period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BudgetStatus {
    pub category: String,
    pub period: BudgetPeriod,
    pub window: PeriodWindow,
    pub limit: u64,
    pub spent: u64,
    pub remaining: u64,
    pub used_percentage: u64,
    pub alert_triggered: bool,
}

impl BudgetStatus {
    pub fn compute(budget: &Budget, spent: u64, window: PeriodWindow) -> Self {
        let remaining = budget.limit.saturating_sub(spent);
        let used_percentage = used_percentage(spent, budget.limit);
        let alert_triggered =
            budget.alerts_enabled && used_percentage >= u64::from(budget.alert_threshold);
        Self {
            category: budget.category.clone(),
            period: budget.period,
            window,
            limit: budget.limit,
            spent,
            remaining,
            used_percentage,
            alert_triggered,
        }
    }
}

/// `floor(spent * 100 / limit)`, computed without overflow.
pub fn used_percentage(spent: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    let pct = u128::from(spent) * 100 / u128::from(limit);
    u64::try_from(pct).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(limit: u64, alerts: bool, threshold: u8) -> Budget {
        let mut settings = BudgetSettings::new("Food", limit, BudgetPeriod::Monthly);
        if alerts {
            settings = settings.with_alerts(threshold);
        } else {
            settings.alert_threshold = threshold;
        }
        Budget::from_settings(Owner::new("alice"), settings, Utc::now())
    }

    fn window() -> PeriodWindow {
        PeriodWindow::containing(
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    #[test]
    fn admits_up_to_the_limit_inclusive() {
        let food = budget(1000, true, 80);
        assert!(food.admits(900, 100));
        assert!(!food.admits(900, 101));
        assert!(!food.admits(u64::MAX, 1));
    }

    #[test]
    fn status_floors_percentage() {
        let status = BudgetStatus::compute(&budget(3, true, 80), 2, window());
        assert_eq!(status.used_percentage, 66);
        assert_eq!(status.remaining, 1);
        assert!(!status.alert_triggered);
    }

    #[test]
    fn alert_fires_at_threshold() {
        let status = BudgetStatus::compute(&budget(1000, true, 80), 800, window());
        assert_eq!(status.used_percentage, 80);
        assert!(status.alert_triggered);
    }

    #[test]
    fn disabled_alerts_never_fire() {
        let status = BudgetStatus::compute(&budget(1000, false, 10), 1000, window());
        assert_eq!(status.used_percentage, 100);
        assert!(!status.alert_triggered);
    }

    #[test]
    fn remaining_floors_at_zero_when_overspent() {
        let status = BudgetStatus::compute(&budget(100, false, 0), 250, window());
        assert_eq!(status.remaining, 0);
        assert_eq!(status.used_percentage, 250);
    }

    #[test]
    fn zero_threshold_alerts_with_no_spend() {
        let status = BudgetStatus::compute(&budget(100, true, 0), 0, window());
        assert!(status.alert_triggered);
    }

    #[test]
    fn period_parses_known_labels_only() {
        assert_eq!("monthly".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Monthly);
        assert_eq!("YEARLY".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Yearly);
        assert!(matches!(
            "FORTNIGHTLY".parse::<BudgetPeriod>(),
            Err(LedgerError::InvalidInput(_))
        ));
    }
}
