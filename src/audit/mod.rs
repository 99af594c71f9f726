//! Audit logging system for Money Lodge
//!
//! Records every create, update and delete of a month's line items, budget
//! rows and settings, with before/after values, in an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use lodge_cli::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(
//!     EntityType::Income,
//!     income.id.to_string(),
//!     key.storage_key(),
//!     Some(income.source.clone()),
//!     &income,
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
