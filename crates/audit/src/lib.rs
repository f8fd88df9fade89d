//! Audit trail: immutable facts about every mutation.
//!
//! Rows are write-once. They document what happened; they are never a source
//! of truth for current state, and an audit write failure must never roll
//! back the business mutation it documents.

pub mod log;
pub mod snapshot;

pub use log::{AuditAction, AuditLog, AuditQuery, AuditRecorder, AuditWriteError, NewAuditLog};
pub use snapshot::{Snapshot, Snapshottable};
