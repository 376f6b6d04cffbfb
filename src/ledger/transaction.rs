use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    account::Owner,
    ids::{AccountId, TransactionId},
};
use crate::core::errors::LedgerError;

/// Direction of money movement recorded by a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionKind::Income),
            "EXPENSE" => Ok(TransactionKind::Expense),
            other => Err(LedgerError::InvalidInput(format!(
                "unknown transaction kind `{}` (expected INCOME or EXPENSE)",
                other
            ))),
        }
    }
}

/// Caller-supplied fields of a transaction that has not been committed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub account_id: AccountId,
    pub amount: u64,
    pub category: String,
    pub description: String,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn new(
        account_id: AccountId,
        amount: u64,
        category: impl Into<String>,
        description: impl Into<String>,
        kind: TransactionKind,
    ) -> Self {
        Self {
            account_id,
            amount,
            category: category.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn income(account_id: AccountId, amount: u64, category: impl Into<String>) -> Self {
        Self::new(account_id, amount, category, "", TransactionKind::Income)
    }

    pub fn expense(account_id: AccountId, amount: u64, category: impl Into<String>) -> Self {
        Self::new(account_id, amount, category, "", TransactionKind::Expense)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An immutable, committed movement of money.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub account_id: AccountId,
    pub owner: Owner,
    pub amount: u64,
    pub category: String,
    pub description: String,
    pub kind: TransactionKind,
    pub recorded_at: DateTime<Utc>,
    /// Business date the transaction counts toward for budget periods.
    pub booked_on: NaiveDate,
}

impl Transaction {
    pub(crate) fn commit(
        id: TransactionId,
        owner: Owner,
        draft: TransactionDraft,
        recorded_at: DateTime<Utc>,
        booked_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            account_id: draft.account_id,
            owner,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            kind: draft.kind,
            recorded_at,
            booked_on,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}
