//! Ledger domain models and the registries that hold them.

pub mod account;
pub mod budget;
pub mod ids;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod period;
pub mod transaction;

pub use account::{Account, Owner};
pub use budget::{Budget, BudgetPeriod, BudgetSettings, BudgetStatus};
pub use ids::{AccountId, IdAllocator, Sequence, TransactionId};
pub use ledger::Ledger;
pub use period::PeriodWindow;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
