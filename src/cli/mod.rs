//! Line-oriented operation shell hosting a single [`LedgerEngine`](crate::core::LedgerEngine).

pub mod commands;
pub mod context;
pub mod output;
mod shell;

pub use shell::{run_cli, SCRIPT_ENV};
