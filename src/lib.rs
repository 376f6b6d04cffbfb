#![doc(test(attr(deny(warnings))))]

//! Budget Ledger keeps accounts, categorised transactions, and per-category
//! spending budgets for authenticated callers, rejecting any expense that
//! would push a budget past its limit for the current period.

pub mod cli;
pub mod config;
pub mod core;
pub mod ledger;
pub mod utils;

use config::Config;

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with(&Config::default());
}

/// Initializes global tracing using the filter from `config`.
/// Only the first call in a process has any effect.
pub fn init_with(config: &Config) {
    utils::init_tracing(&config.log_filter);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Budget Ledger tracing initialized.");
}
