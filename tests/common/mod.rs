#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use budget_ledger::{
    core::{LedgerEngine, ManualClock},
    ledger::{AccountId, Owner},
};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn mid_january() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Engine over a manual clock parked at [`mid_january`].
pub fn setup_engine() -> (LedgerEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(mid_january()));
    (LedgerEngine::new(clock.clone()), clock)
}

pub fn alice() -> Owner {
    Owner::new("alice")
}

pub fn bob() -> Owner {
    Owner::new("bob")
}

pub fn open_account(engine: &mut LedgerEngine, owner: &Owner) -> AccountId {
    engine
        .create_account(owner, "Everyday")
        .expect("create account")
}

/// Fresh directory usable as `BUDGET_LEDGER_HOME`.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}
