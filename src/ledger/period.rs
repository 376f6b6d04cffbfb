//! Calendar windows for recurring budget periods.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::budget::BudgetPeriod;

/// The instance of a budget period that contains some reference date.
///
/// `start` is inclusive and `end` is exclusive; both are UTC calendar dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Returns the window of `period` that contains `reference`.
    pub fn containing(period: BudgetPeriod, reference: NaiveDate) -> Self {
        let start = period_start(period, reference);
        let end = next_period_start(period, start);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Number of calendar days covered by the window.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for PeriodWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

fn period_start(period: BudgetPeriod, reference: NaiveDate) -> NaiveDate {
    match period {
        BudgetPeriod::Daily => reference,
        BudgetPeriod::Weekly => {
            let delta = reference.weekday().num_days_from_monday() as i64;
            reference
                .checked_sub_signed(Duration::days(delta))
                .unwrap_or(NaiveDate::MIN)
        }
        BudgetPeriod::Monthly => {
            NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap_or(reference)
        }
        BudgetPeriod::Yearly => NaiveDate::from_ymd_opt(reference.year(), 1, 1).unwrap_or(reference),
    }
}

fn next_period_start(period: BudgetPeriod, start: NaiveDate) -> NaiveDate {
    let next = match period {
        BudgetPeriod::Daily => start.succ_opt(),
        BudgetPeriod::Weekly => start.checked_add_signed(Duration::weeks(1)),
        BudgetPeriod::Monthly => {
            let (year, month) = if start.month() == 12 {
                (start.year() + 1, 1)
            } else {
                (start.year(), start.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        BudgetPeriod::Yearly => NaiveDate::from_ymd_opt(start.year() + 1, 1, 1),
    };
    next.unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn daily_window_is_single_day() {
        let window = PeriodWindow::containing(BudgetPeriod::Daily, date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 3, 15));
        assert_eq!(window.end, date(2024, 3, 16));
        assert_eq!(window.days(), 1);
    }

    #[test]
    fn weekly_window_starts_on_monday() {
        // 2024-03-15 is a Friday.
        let window = PeriodWindow::containing(BudgetPeriod::Weekly, date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 3, 11));
        assert_eq!(window.end, date(2024, 3, 18));
        assert!(window.contains(date(2024, 3, 17)));
        assert!(!window.contains(date(2024, 3, 18)));
    }

    #[test]
    fn monthly_window_handles_year_rollover() {
        let window = PeriodWindow::containing(BudgetPeriod::Monthly, date(2024, 12, 31));
        assert_eq!(window.start, date(2024, 12, 1));
        assert_eq!(window.end, date(2025, 1, 1));
    }

    #[test]
    fn monthly_window_covers_leap_february() {
        let window = PeriodWindow::containing(BudgetPeriod::Monthly, date(2024, 2, 10));
        assert_eq!(window.days(), 29);
        assert!(window.contains(date(2024, 2, 29)));
        assert!(!window.contains(date(2024, 3, 1)));
    }

    #[test]
    fn yearly_window_spans_calendar_year() {
        let window = PeriodWindow::containing(BudgetPeriod::Yearly, date(2023, 7, 4));
        assert_eq!(window.start, date(2023, 1, 1));
        assert_eq!(window.end, date(2024, 1, 1));
        assert!(!window.contains(date(2022, 12, 31)));
    }
}
