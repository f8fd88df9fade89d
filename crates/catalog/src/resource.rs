//! The seam the mutation service is generic over.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use stockledger_core::{DomainResult, Entity};

use crate::kind::EntityKind;

/// A mutable catalog record: created from a validated input, patched in
/// place, and soft-deleted by timestamp.
///
/// Implementations mint their own (time-ordered) identifier in `from_new`;
/// callers never supply one.
pub trait Resource: Entity + Clone + Send + Sync + 'static
where
    Self::Id: Copy + Into<Uuid>,
{
    /// Entity type discriminator recorded in the audit trail.
    const KIND: EntityKind;

    /// Validated creation input.
    type New;

    /// Partial update. Absent fields are left untouched.
    type Patch;

    /// Validate the input, apply defaults, and mint a new record.
    fn from_new(new: Self::New, now: DateTime<Utc>) -> DomainResult<Self>;

    /// Apply a partial update, re-validating any changed fields.
    fn apply_patch(&mut self, patch: Self::Patch) -> DomainResult<()>;

    /// The record's uniqueness key, if the entity type has one.
    ///
    /// Uniqueness is enforced across all rows including soft-deleted ones,
    /// so a deleted SKU cannot be reused by a new product.
    fn unique_key(&self) -> Option<&str>;

    fn created_at(&self) -> DateTime<Utc>;

    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Mark the record soft-deleted. The row stays in the store to preserve
    /// audit linkage; hard delete has no code path.
    fn mark_deleted(&mut self, at: DateTime<Utc>);

    /// The identifier as a raw UUID, for audit rows keyed across entity types.
    fn uuid(&self) -> Uuid {
        (*self.id()).into()
    }
}
