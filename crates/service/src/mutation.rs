//! The mutation service: create, update, soft-delete, bulk create.

use std::sync::Arc;

use chrono::Utc;

use stockledger_audit::{AuditAction, AuditRecorder, NewAuditLog, Snapshottable};
use stockledger_catalog::Resource;
use stockledger_core::{DomainError, DomainResult, UserId};
use stockledger_store::{EntityStore, ResourceStore};

/// Result of a bulk create: partial success is the expected outcome, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOutcome<T> {
    /// How many items were actually inserted.
    pub created: usize,
    /// The inserted entities, in input order.
    pub items: Vec<T>,
}

/// Orchestrates validation, the entity write, and the audit write.
///
/// The audit sink is a separate handle from the store: recording is
/// best-effort after the entity commit, and a failure there is logged
/// without altering the outcome of the business mutation. Audit
/// completeness is secondary to operational availability.
pub struct MutationService<S> {
    store: Arc<S>,
    audit: Arc<dyn AuditRecorder>,
}

impl<S: EntityStore> MutationService<S> {
    pub fn new(store: Arc<S>, audit: Arc<dyn AuditRecorder>) -> Self {
        Self { store, audit }
    }

    /// Create one entity. Fails with `Conflict` if its uniqueness key is
    /// already taken (soft-deleted rows included).
    pub fn create<T>(&self, new: T::New, actor: UserId, ip: Option<&str>) -> DomainResult<T>
    where
        T: Resource + Snapshottable,
        S: ResourceStore<T>,
    {
        let entity = T::from_new(new, Utc::now())?;
        if let Some(key) = entity.unique_key() {
            if ResourceStore::<T>::find_by_unique_key(self.store.as_ref(), key)?.is_some() {
                return Err(DomainError::conflict(format!(
                    "{} already exists: {key}",
                    T::KIND
                )));
            }
        }
        ResourceStore::<T>::insert(self.store.as_ref(), entity.clone())?;

        self.record_audit(NewAuditLog {
            user_id: actor,
            entity: T::KIND,
            entity_id: entity.uuid(),
            action: AuditAction::Create,
            before: None,
            after: Some(entity.snapshot()),
            ip_address: ip.map(str::to_string),
        });
        tracing::info!(kind = %T::KIND, id = %entity.uuid(), "entity created");
        Ok(entity)
    }

    /// Patch one entity. Fails with `NotFound` for absent or soft-deleted
    /// rows; re-validates uniqueness when the unique field changes.
    pub fn update<T>(
        &self,
        id: T::Id,
        patch: T::Patch,
        actor: UserId,
        ip: Option<&str>,
    ) -> DomainResult<T>
    where
        T: Resource + Snapshottable,
        S: ResourceStore<T>,
    {
        let before = self.load_live::<T>(&id)?;

        let mut after = before.clone();
        after.apply_patch(patch)?;

        if let Some(key) = after.unique_key() {
            if before.unique_key() != Some(key) {
                let taken = ResourceStore::<T>::find_by_unique_key(self.store.as_ref(), key)?
                    .is_some_and(|row| row.id() != after.id());
                if taken {
                    return Err(DomainError::conflict(format!(
                        "{} already exists: {key}",
                        T::KIND
                    )));
                }
            }
        }
        ResourceStore::<T>::update(self.store.as_ref(), after.clone())?;

        self.record_audit(NewAuditLog {
            user_id: actor,
            entity: T::KIND,
            entity_id: after.uuid(),
            action: AuditAction::Update,
            before: Some(before.snapshot()),
            after: Some(after.snapshot()),
            ip_address: ip.map(str::to_string),
        });
        tracing::info!(kind = %T::KIND, id = %after.uuid(), "entity updated");
        Ok(after)
    }

    /// Soft-delete one entity: the row stays, `deleted_at` is set, and the
    /// audit row keeps the pre-image for forensic reconstruction.
    ///
    /// A second call for the same id is `NotFound`; it never produces a
    /// second DELETE audit row.
    pub fn soft_delete<T>(&self, id: T::Id, actor: UserId, ip: Option<&str>) -> DomainResult<T>
    where
        T: Resource + Snapshottable,
        S: ResourceStore<T>,
    {
        let before = self.load_live::<T>(&id)?;

        let mut deleted = before.clone();
        deleted.mark_deleted(Utc::now());
        ResourceStore::<T>::update(self.store.as_ref(), deleted.clone())?;

        self.record_audit(NewAuditLog {
            user_id: actor,
            entity: T::KIND,
            entity_id: deleted.uuid(),
            action: AuditAction::Delete,
            before: Some(before.snapshot()),
            after: None,
            ip_address: ip.map(str::to_string),
        });
        tracing::info!(kind = %T::KIND, id = %deleted.uuid(), "entity soft-deleted");
        Ok(deleted)
    }

    /// Create many entities, skipping (not failing) items whose unique key
    /// is already taken. Validation errors still fail the whole call; they
    /// never reach the store.
    pub fn bulk_create<T>(
        &self,
        items: Vec<T::New>,
        actor: UserId,
        ip: Option<&str>,
    ) -> DomainResult<BulkOutcome<T>>
    where
        T: Resource + Snapshottable,
        S: ResourceStore<T>,
    {
        let mut inserted = Vec::new();
        for new in items {
            match self.create::<T>(new, actor, ip) {
                Ok(entity) => inserted.push(entity),
                Err(DomainError::Conflict(_) | DomainError::Integrity(_)) => continue,
                Err(err) => return Err(err),
            }
        }
        tracing::info!(kind = %T::KIND, created = inserted.len(), "bulk create finished");
        Ok(BulkOutcome {
            created: inserted.len(),
            items: inserted,
        })
    }

    fn load_live<T>(&self, id: &T::Id) -> DomainResult<T>
    where
        T: Resource,
        S: ResourceStore<T>,
    {
        ResourceStore::<T>::get(self.store.as_ref(), id)?
            .filter(|row| row.deleted_at().is_none())
            .ok_or(DomainError::NotFound)
    }

    fn record_audit(&self, entry: NewAuditLog) {
        if let Err(err) = self.audit.record(entry) {
            // The business mutation has already committed; never unwind it.
            tracing::warn!(error = %err, "audit write failed");
        }
    }
}
