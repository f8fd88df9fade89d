//! In-memory store for tests, development, and single-process deployments.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use stockledger_audit::{
    AuditLog, AuditQuery, AuditRecorder, AuditWriteError, NewAuditLog,
};
use stockledger_catalog::{Category, Location, Product, Resource, Supplier};
use stockledger_core::{
    AuditLogId, DomainError, DomainResult, LocationId, ProductId,
};
use stockledger_stock::{StockLedger, StockRow, validate_quantity};

use crate::resource_store::ResourceStore;

fn poisoned() -> DomainError {
    DomainError::integrity("store lock poisoned")
}

/// One keyed table. Constraint checks run under the same write lock as the
/// mutation itself, so check-then-act races cannot slip through.
#[derive(Debug)]
struct Table<T: Resource> {
    rows: RwLock<HashMap<T::Id, T>>,
}

impl<T: Resource> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> Table<T> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    fn get(&self, id: &T::Id) -> DomainResult<Option<T>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.get(id).cloned())
    }

    fn contains(&self, id: &T::Id) -> DomainResult<bool> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.contains_key(id))
    }

    fn insert(&self, entity: T) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        if let Some(key) = entity.unique_key() {
            if rows.values().any(|row| row.unique_key() == Some(key)) {
                return Err(DomainError::integrity(format!(
                    "{} uniqueness key already exists: {key}",
                    T::KIND
                )));
            }
        }
        if rows.contains_key(entity.id()) {
            return Err(DomainError::integrity(format!("{} id already exists", T::KIND)));
        }
        rows.insert(*entity.id(), entity);
        Ok(())
    }

    fn update(&self, entity: T) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        if !rows.contains_key(entity.id()) {
            return Err(DomainError::not_found());
        }
        if let Some(key) = entity.unique_key() {
            if rows
                .values()
                .any(|row| row.id() != entity.id() && row.unique_key() == Some(key))
            {
                return Err(DomainError::integrity(format!(
                    "{} uniqueness key already exists: {key}",
                    T::KIND
                )));
            }
        }
        rows.insert(*entity.id(), entity);
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<T>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows.values().cloned().collect())
    }

    fn find_by_unique_key(&self, key: &str) -> DomainResult<Option<T>> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .values()
            .find(|row| row.unique_key() == Some(key))
            .cloned())
    }
}

/// In-memory implementation of the full storage surface.
#[derive(Debug)]
pub struct InMemoryStore {
    products: Table<Product>,
    categories: Table<Category>,
    locations: Table<Location>,
    suppliers: Table<Supplier>,
    stock: RwLock<HashMap<(ProductId, LocationId), StockRow>>,
    audit: RwLock<Vec<AuditLog>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            products: Table::new(),
            categories: Table::new(),
            locations: Table::new(),
            suppliers: Table::new(),
            stock: RwLock::new(HashMap::new()),
            audit: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_resource_store {
    ($field:ident, $t:ty, $id:ty) => {
        impl ResourceStore<$t> for InMemoryStore {
            fn get(&self, id: &$id) -> DomainResult<Option<$t>> {
                self.$field.get(id)
            }

            fn insert(&self, entity: $t) -> DomainResult<()> {
                self.$field.insert(entity)
            }

            fn update(&self, entity: $t) -> DomainResult<()> {
                self.$field.update(entity)
            }

            fn list(&self) -> DomainResult<Vec<$t>> {
                self.$field.list()
            }

            fn find_by_unique_key(&self, key: &str) -> DomainResult<Option<$t>> {
                self.$field.find_by_unique_key(key)
            }
        }
    };
}

impl_resource_store!(products, Product, stockledger_core::ProductId);
impl_resource_store!(categories, Category, stockledger_core::CategoryId);
impl_resource_store!(locations, Location, stockledger_core::LocationId);
impl_resource_store!(suppliers, Supplier, stockledger_core::SupplierId);

impl StockLedger for InMemoryStore {
    fn set_quantity(
        &self,
        product_id: ProductId,
        location_id: LocationId,
        quantity: i64,
    ) -> DomainResult<StockRow> {
        validate_quantity(quantity)?;
        if !self.products.contains(&product_id)? {
            return Err(DomainError::not_found());
        }
        if !self.locations.contains(&location_id)? {
            return Err(DomainError::not_found());
        }

        let now = Utc::now();
        let mut stock = self.stock.write().map_err(|_| poisoned())?;
        let row = stock
            .entry((product_id, location_id))
            .and_modify(|row| {
                row.quantity = quantity;
                row.updated_at = now;
            })
            .or_insert_with(|| StockRow {
                product_id,
                location_id,
                quantity,
                updated_at: now,
            });
        Ok(row.clone())
    }

    fn get_by_product(&self, product_id: ProductId) -> DomainResult<Vec<StockRow>> {
        let stock = self.stock.read().map_err(|_| poisoned())?;
        let mut rows: Vec<StockRow> = stock
            .values()
            .filter(|row| row.product_id == product_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| Uuid::from(row.location_id));
        Ok(rows)
    }

    fn get_by_location(&self, location_id: LocationId) -> DomainResult<Vec<StockRow>> {
        let stock = self.stock.read().map_err(|_| poisoned())?;
        let mut rows: Vec<StockRow> = stock
            .values()
            .filter(|row| row.location_id == location_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| Uuid::from(row.product_id));
        Ok(rows)
    }
}

impl AuditRecorder for InMemoryStore {
    fn record(&self, entry: NewAuditLog) -> Result<AuditLog, AuditWriteError> {
        let mut logs = self
            .audit
            .write()
            .map_err(|_| AuditWriteError("audit lock poisoned".to_string()))?;
        let log = AuditLog {
            id: AuditLogId::new(),
            user_id: entry.user_id,
            entity: entry.entity,
            entity_id: entry.entity_id,
            action: entry.action,
            before: entry.before,
            after: entry.after,
            ip_address: entry.ip_address,
            created_at: Utc::now(),
        };
        logs.push(log.clone());
        Ok(log)
    }
}

impl AuditQuery for InMemoryStore {
    fn audit_logs(&self) -> DomainResult<Vec<AuditLog>> {
        let logs = self.audit.read().map_err(|_| poisoned())?;
        Ok(logs.clone())
    }

    fn audit_log(&self, id: &AuditLogId) -> DomainResult<Option<AuditLog>> {
        let logs = self.audit.read().map_err(|_| poisoned())?;
        Ok(logs.iter().find(|log| log.id == *id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_catalog::{NewLocation, NewProduct};

    fn product(sku: &str) -> Product {
        Product::from_new(
            NewProduct {
                sku: sku.to_string(),
                name: format!("Product {sku}"),
                description: None,
                category_id: None,
                min_stock_level: None,
                max_stock_level: None,
                reorder_point: None,
                unit_price_cents: None,
                is_active: None,
            },
            Utc::now(),
        )
        .unwrap()
    }

    fn location(code: &str) -> Location {
        Location::from_new(
            NewLocation {
                code: code.to_string(),
                name: format!("Location {code}"),
                kind: None,
                capacity: None,
                is_active: None,
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn insert_rejects_duplicate_sku() {
        let store = InMemoryStore::new();
        ResourceStore::<Product>::insert(&store, product("SKU-1")).unwrap();

        let err = ResourceStore::<Product>::insert(&store, product("SKU-1")).unwrap_err();
        match err {
            DomainError::Integrity(_) => {}
            other => panic!("expected Integrity, got {other:?}"),
        }
    }

    #[test]
    fn soft_deleted_rows_still_hold_their_sku() {
        let store = InMemoryStore::new();
        let mut deleted = product("SKU-1");
        deleted.mark_deleted(Utc::now());
        ResourceStore::<Product>::insert(&store, deleted).unwrap();

        // A deleted SKU is not reusable by a new product.
        let err = ResourceStore::<Product>::insert(&store, product("SKU-1")).unwrap_err();
        match err {
            DomainError::Integrity(_) => {}
            other => panic!("expected Integrity, got {other:?}"),
        }
    }

    #[test]
    fn update_rejects_stealing_another_rows_key() {
        let store = InMemoryStore::new();
        let a = product("SKU-1");
        let b = product("SKU-2");
        ResourceStore::<Product>::insert(&store, a).unwrap();
        ResourceStore::<Product>::insert(&store, b.clone()).unwrap();

        let mut hijack = b;
        hijack
            .apply_patch(stockledger_catalog::ProductPatch {
                sku: Some("SKU-1".to_string()),
                ..Default::default()
            })
            .unwrap();
        let err = ResourceStore::<Product>::update(&store, hijack).unwrap_err();
        match err {
            DomainError::Integrity(_) => {}
            other => panic!("expected Integrity, got {other:?}"),
        }
    }

    #[test]
    fn update_of_missing_row_is_not_found() {
        let store = InMemoryStore::new();
        let err = ResourceStore::<Product>::update(&store, product("SKU-1")).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn set_quantity_converges_to_the_last_write() {
        let store = InMemoryStore::new();
        let p = product("SKU-1");
        let loc = location("WH-A");
        let (product_id, location_id) = (p.id_typed(), loc.id_typed());
        ResourceStore::<Product>::insert(&store, p).unwrap();
        ResourceStore::<Location>::insert(&store, loc).unwrap();

        store.set_quantity(product_id, location_id, 50).unwrap();
        store.set_quantity(product_id, location_id, 30).unwrap();

        let rows = store.get_by_product(product_id).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location_id, location_id);
        assert_eq!(rows[0].quantity, 30);
    }

    #[test]
    fn set_quantity_requires_known_product_and_location() {
        let store = InMemoryStore::new();
        let p = product("SKU-1");
        let loc = location("WH-A");
        let (product_id, location_id) = (p.id_typed(), loc.id_typed());
        ResourceStore::<Product>::insert(&store, p).unwrap();

        // Location never inserted.
        let err = store.set_quantity(product_id, location_id, 5).unwrap_err();
        assert_eq!(err, DomainError::NotFound);

        ResourceStore::<Location>::insert(&store, location("WH-B")).unwrap();
        let err = store
            .set_quantity(ProductId::new(), location_id, 5)
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn set_quantity_rejects_negative() {
        let store = InMemoryStore::new();
        let err = store
            .set_quantity(ProductId::new(), LocationId::new(), -3)
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn audit_rows_append_in_order() {
        use stockledger_audit::AuditAction;
        use stockledger_catalog::EntityKind;
        use stockledger_core::UserId;

        let store = InMemoryStore::new();
        let actor = UserId::new();
        for action in [AuditAction::Create, AuditAction::Update, AuditAction::Delete] {
            store
                .record(NewAuditLog {
                    user_id: actor,
                    entity: EntityKind::Product,
                    entity_id: Uuid::now_v7(),
                    action,
                    before: None,
                    after: None,
                    ip_address: None,
                })
                .unwrap();
        }

        let logs = store.audit_logs().unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].action, AuditAction::Create);
        assert_eq!(logs[2].action, AuditAction::Delete);

        let found = store.audit_log(&logs[1].id).unwrap().unwrap();
        assert_eq!(found, logs[1]);
    }
}
