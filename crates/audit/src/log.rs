//! Audit log rows and the recorder/query seams.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use stockledger_catalog::EntityKind;
use stockledger_core::{AuditLogId, DomainError, DomainResult, UserId};

use crate::snapshot::Snapshot;

/// Mutation kind recorded in the trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
        }
    }
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CREATE" => Ok(AuditAction::Create),
            "UPDATE" => Ok(AuditAction::Update),
            "DELETE" => Ok(AuditAction::Delete),
            other => Err(DomainError::validation(format!("unknown action: {other}"))),
        }
    }
}

/// One immutable audit row. `before`/`after` hold full entity snapshots:
/// CREATE has `before = None`, DELETE has `after = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: AuditLogId,
    pub user_id: UserId,
    pub entity: EntityKind,
    pub entity_id: Uuid,
    pub action: AuditAction,
    pub before: Option<Snapshot>,
    pub after: Option<Snapshot>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A fact ready to be appended; the recorder assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditLog {
    pub user_id: UserId,
    pub entity: EntityKind,
    pub entity_id: Uuid,
    pub action: AuditAction,
    pub before: Option<Snapshot>,
    pub after: Option<Snapshot>,
    pub ip_address: Option<String>,
}

/// Failure to durably record an audit fact.
///
/// Non-fatal by contract: the triggering mutation has already committed and
/// is not rolled back. Callers log this and move on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("audit write failed: {0}")]
pub struct AuditWriteError(pub String);

/// Append-only audit sink.
pub trait AuditRecorder: Send + Sync {
    /// Append one immutable row. Must never block or reverse the business
    /// mutation it documents.
    fn record(&self, entry: NewAuditLog) -> Result<AuditLog, AuditWriteError>;
}

/// Read access to recorded audit rows.
pub trait AuditQuery: Send + Sync {
    /// All rows, in append order.
    fn audit_logs(&self) -> DomainResult<Vec<AuditLog>>;

    fn audit_log(&self, id: &AuditLogId) -> DomainResult<Option<AuditLog>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_uppercase() {
        assert_eq!(
            serde_json::to_value(AuditAction::Create).unwrap(),
            serde_json::json!("CREATE")
        );
        assert_eq!("delete".parse::<AuditAction>().unwrap(), AuditAction::Delete);
        assert!("purge".parse::<AuditAction>().is_err());
    }
}
