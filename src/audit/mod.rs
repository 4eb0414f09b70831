//! Audit logging for expense changes
//!
//! Every create, update and delete performed through the services is
//! appended to a JSONL audit log together with before/after snapshots.
//!
//! - `AuditEntry`: one log line (timestamp, operation, expense id, snapshots)
//! - `AuditLogger`: appends and reads entries
//! - `generate_diff`: one-line summary of changed fields

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
