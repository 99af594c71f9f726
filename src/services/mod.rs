//! Service layer for Money Lodge
//!
//! Business logic on top of storage. Every mutation is saved immediately and
//! recorded in the audit log.

pub mod budget;
pub mod entries;
pub mod month;

pub use budget::BudgetService;
pub use entries::EntryService;
pub use month::MonthService;
