use std::result::Result as StdResult;

use thiserror::Error;

use crate::ledger::AccountId;

/// Stable numeric codes surfaced to callers alongside every [`LedgerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    InvalidInput = 100,
    NotFound = 101,
    AccountNotFound = 102,
    BudgetExceeded = 103,
    Storage = 200,
    Config = 201,
}

impl ErrorCode {
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Unified error type for the ledger engine and its host adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
    #[error(
        "Budget exceeded for `{category}`: {spent} spent + {attempted} requested exceeds limit {limit}"
    )]
    BudgetExceeded {
        category: String,
        limit: u64,
        spent: u64,
        attempted: u64,
    },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl LedgerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::InvalidInput(_) => ErrorCode::InvalidInput,
            LedgerError::NotFound(_) => ErrorCode::NotFound,
            LedgerError::AccountNotFound(_) => ErrorCode::AccountNotFound,
            LedgerError::BudgetExceeded { .. } => ErrorCode::BudgetExceeded,
            LedgerError::StorageError(_) => ErrorCode::Storage,
            LedgerError::ConfigError(_) => ErrorCode::Config,
        }
    }
}

pub type Result<T> = StdResult<T, LedgerError>;

/// Error surfaced by the operation shell.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::StorageError(err.to_string())
    }
}
