//! Validated operations over a [`Ledger`](crate::ledger::Ledger).
//!
//! Services are stateless: every rule is checked before the ledger is touched,
//! so a rejected call leaves no trace.

pub mod account_service;
pub mod budget_service;
pub mod transaction_service;

pub use account_service::AccountService;
pub use budget_service::BudgetService;
pub use transaction_service::TransactionService;

use crate::core::errors::{LedgerError, Result};
use crate::ledger::Owner;

pub(crate) fn ensure_owner(owner: &Owner) -> Result<()> {
    if owner.is_empty() {
        Err(LedgerError::InvalidInput("caller identity is required".into()))
    } else {
        Ok(())
    }
}

/// Trims `value` and checks its length in characters against `min..=max`.
pub(crate) fn bounded_text<'a>(field: &str, value: &'a str, min: usize, max: usize) -> Result<&'a str> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len < min {
        return Err(LedgerError::InvalidInput(format!("{} must not be empty", field)));
    }
    if len > max {
        return Err(LedgerError::InvalidInput(format!(
            "{} exceeds {} characters",
            field, max
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_text_trims_and_checks_length() {
        assert_eq!(bounded_text("name", "  Food ", 1, 4).unwrap(), "Food");
        assert!(bounded_text("name", "   ", 1, 4).is_err());
        assert!(bounded_text("name", "Groceries", 1, 4).is_err());
        assert_eq!(bounded_text("description", "", 0, 4).unwrap(), "");
    }

    #[test]
    fn blank_owner_is_rejected() {
        assert!(ensure_owner(&Owner::new(" ")).is_err());
        assert!(ensure_owner(&Owner::new("alice")).is_ok());
    }
}
