//! Engine core: errors, clock abstraction, services, and the engine facade.

pub mod engine;
pub mod errors;
pub mod services;
pub mod time;

pub use engine::LedgerEngine;
pub use errors::{CliError, ErrorCode, LedgerError, Result};
pub use time::{Clock, ManualClock, SystemClock};
