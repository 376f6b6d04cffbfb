//! Persistent engine settings and their on-disk manager.

pub mod manager;
pub mod model;

pub use manager::ConfigManager;
pub use model::{Config, LedgerLimits};
