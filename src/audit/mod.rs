//! Audit logging for fintrack
//!
//! Records every create, update and delete of transactions and budgets with
//! before/after values in an append-only JSONL log.
//!
//! - `AuditEntry`: one operation on one record, built from a tracker
//!   [`StateChange`](crate::tracker::StateChange).
//! - `AuditLogger`: appends entries to the log file and reads them back.
//!   [`AuditLogger::into_subscriber`] wires it into a tracker.
//! - `summarize_changes`: the field-level summary stored with updates.

mod diff;
mod entry;
mod logger;

pub use diff::summarize_changes;
pub use entry::{Action, AuditEntry, RecordKind};
pub use logger::AuditLogger;
