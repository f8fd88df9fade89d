//! Storage seams the mutation service and read paths are written against.

use stockledger_audit::{AuditQuery, AuditRecorder};
use stockledger_catalog::{Category, Location, Product, Resource, Supplier};
use stockledger_core::DomainResult;
use stockledger_stock::StockLedger;

/// Keyed record storage for one catalog entity type.
///
/// Inserts are unique-constraint-checked and updates are conditional; both
/// execute atomically with their constraint checks, so two concurrent
/// creates cannot both pass a uniqueness pre-check and both land.
pub trait ResourceStore<T: Resource>: Send + Sync {
    fn get(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// Insert a new row. Fails with `Integrity` if the row's uniqueness key
    /// (or id) already exists, soft-deleted rows included.
    fn insert(&self, entity: T) -> DomainResult<()>;

    /// Overwrite an existing row. Fails with `NotFound` if the id is absent
    /// and with `Integrity` if the new uniqueness key collides with another
    /// row.
    fn update(&self, entity: T) -> DomainResult<()>;

    /// Every row, soft-deleted included. Visibility is the query layer's
    /// concern, not the store's.
    fn list(&self) -> DomainResult<Vec<T>>;

    /// Exact-match lookup by uniqueness key, across all rows.
    fn find_by_unique_key(&self, key: &str) -> DomainResult<Option<T>>;
}

/// The full storage surface the subsystem runs against: one `ResourceStore`
/// per catalog entity, the stock ledger, and the audit sink.
pub trait EntityStore:
    ResourceStore<Product>
    + ResourceStore<Category>
    + ResourceStore<Location>
    + ResourceStore<Supplier>
    + StockLedger
    + AuditRecorder
    + AuditQuery
    + Send
    + Sync
    + 'static
{
}

impl<S> EntityStore for S where
    S: ResourceStore<Product>
        + ResourceStore<Category>
        + ResourceStore<Location>
        + ResourceStore<Supplier>
        + StockLedger
        + AuditRecorder
        + AuditQuery
        + Send
        + Sync
        + 'static
{
}
