//! Read paths: list, get, stock composition, audit history.
//!
//! These bypass the mutation service entirely. Soft-delete visibility is an
//! explicit parameter on every path; the HTTP layer always passes `Live`.

use std::sync::Arc;

use stockledger_audit::{AuditLog, AuditQuery};
use stockledger_catalog::{Category, Location, Product, Resource, Supplier};
use stockledger_core::{
    AuditLogId, CategoryId, DomainError, DomainResult, LocationId, ProductId, SupplierId,
};
use stockledger_query::{
    AuditFilter, Page, Pagination, ProductFilter, SupplierFilter, Visibility, newest_first,
    newest_first_audit,
};
use stockledger_store::{EntityStore, ResourceStore};
use stockledger_stock::{StockLedger, StockRow, total_quantity};

pub struct ReadService<S> {
    store: Arc<S>,
}

impl<S: EntityStore> ReadService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn list_products(
        &self,
        filter: &ProductFilter,
        page: Pagination,
    ) -> DomainResult<Page<Product>> {
        let mut rows = ResourceStore::<Product>::list(self.store.as_ref())?;
        rows.retain(|row| filter.matches(row));
        newest_first(&mut rows);
        Ok(page.paginate(rows))
    }

    pub fn get_product(&self, id: ProductId, visibility: Visibility) -> DomainResult<Product> {
        self.get_visible::<Product>(&id, visibility)
    }

    /// Categories for the lookup path, ordered by name ascending.
    pub fn list_categories(&self, visibility: Visibility) -> DomainResult<Vec<Category>> {
        let mut rows = ResourceStore::<Category>::list(self.store.as_ref())?;
        rows.retain(|row| visibility.admits(row));
        rows.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(rows)
    }

    pub fn get_category(&self, id: CategoryId, visibility: Visibility) -> DomainResult<Category> {
        self.get_visible::<Category>(&id, visibility)
    }

    pub fn list_locations(
        &self,
        visibility: Visibility,
        page: Pagination,
    ) -> DomainResult<Page<Location>> {
        let mut rows = ResourceStore::<Location>::list(self.store.as_ref())?;
        rows.retain(|row| visibility.admits(row));
        newest_first(&mut rows);
        Ok(page.paginate(rows))
    }

    pub fn get_location(&self, id: LocationId, visibility: Visibility) -> DomainResult<Location> {
        self.get_visible::<Location>(&id, visibility)
    }

    pub fn list_suppliers(
        &self,
        filter: &SupplierFilter,
        page: Pagination,
    ) -> DomainResult<Page<Supplier>> {
        let mut rows = ResourceStore::<Supplier>::list(self.store.as_ref())?;
        rows.retain(|row| filter.matches(row));
        newest_first(&mut rows);
        Ok(page.paginate(rows))
    }

    pub fn get_supplier(&self, id: SupplierId, visibility: Visibility) -> DomainResult<Supplier> {
        self.get_visible::<Supplier>(&id, visibility)
    }

    /// A product's stock rows plus its cross-location total.
    pub fn product_stock(&self, id: ProductId) -> DomainResult<(Vec<StockRow>, i64)> {
        if ResourceStore::<Product>::get(self.store.as_ref(), &id)?.is_none() {
            return Err(DomainError::NotFound);
        }
        let rows = self.store.get_by_product(id)?;
        let total = total_quantity(&rows);
        Ok((rows, total))
    }

    pub fn location_stock(&self, id: LocationId) -> DomainResult<Vec<StockRow>> {
        if ResourceStore::<Location>::get(self.store.as_ref(), &id)?.is_none() {
            return Err(DomainError::NotFound);
        }
        self.store.get_by_location(id)
    }

    pub fn list_audit(
        &self,
        filter: &AuditFilter,
        page: Pagination,
    ) -> DomainResult<Page<AuditLog>> {
        let mut rows = self.store.audit_logs()?;
        rows.retain(|row| filter.matches(row));
        newest_first_audit(&mut rows);
        Ok(page.paginate(rows))
    }

    pub fn get_audit(&self, id: AuditLogId) -> DomainResult<AuditLog> {
        self.store.audit_log(&id)?.ok_or(DomainError::NotFound)
    }

    fn get_visible<T>(&self, id: &T::Id, visibility: Visibility) -> DomainResult<T>
    where
        T: Resource,
        S: ResourceStore<T>,
    {
        ResourceStore::<T>::get(self.store.as_ref(), id)?
            .filter(|row| visibility.admits(row))
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use stockledger_catalog::{NewCategory, NewProduct};
    use stockledger_store::InMemoryStore;

    fn seeded() -> (Arc<InMemoryStore>, ReadService<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let reads = ReadService::new(store.clone());
        (store, reads)
    }

    fn insert_product(store: &InMemoryStore, sku: &str, name: &str, age_minutes: i64) -> Product {
        let product = Product::from_new(
            NewProduct {
                sku: sku.to_string(),
                name: name.to_string(),
                description: None,
                category_id: None,
                min_stock_level: None,
                max_stock_level: None,
                reorder_point: None,
                unit_price_cents: None,
                is_active: None,
            },
            Utc::now() - Duration::minutes(age_minutes),
        )
        .unwrap();
        ResourceStore::<Product>::insert(store, product.clone()).unwrap();
        product
    }

    #[test]
    fn product_listing_is_newest_first() {
        let (store, reads) = seeded();
        insert_product(&store, "SKU-1", "Oldest", 30);
        insert_product(&store, "SKU-2", "Middle", 20);
        insert_product(&store, "SKU-3", "Newest", 10);

        let page = reads
            .list_products(&ProductFilter::default(), Pagination::default())
            .unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn filtered_total_drives_the_page_meta() {
        let (store, reads) = seeded();
        for i in 0..5 {
            insert_product(&store, &format!("ROD-{i}"), &format!("Steel Rod {i}"), i);
        }
        for i in 0..3 {
            insert_product(&store, &format!("NUT-{i}"), &format!("Hex Nut {i}"), i + 10);
        }

        let filter = ProductFilter {
            search: Some("rod".to_string()),
            ..ProductFilter::default()
        };
        let page = reads
            .list_products(&filter, Pagination { page: 1, limit: 2 })
            .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn get_product_hides_soft_deleted_rows_by_default() {
        let (store, reads) = seeded();
        let product = insert_product(&store, "SKU-1", "Steel Rod", 5);
        let mut deleted = product.clone();
        deleted.mark_deleted(Utc::now());
        ResourceStore::<Product>::update(&*store, deleted).unwrap();

        let err = reads
            .get_product(product.id_typed(), Visibility::Live)
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);

        let found = reads
            .get_product(product.id_typed(), Visibility::IncludeDeleted)
            .unwrap();
        assert_eq!(found.id_typed(), product.id_typed());
    }

    #[test]
    fn categories_list_by_name_ascending() {
        let (store, reads) = seeded();
        for name in ["Fasteners", "Steel Rods", "Bearings"] {
            let category = Category::from_new(
                NewCategory {
                    name: name.to_string(),
                    description: None,
                },
                Utc::now(),
            )
            .unwrap();
            ResourceStore::<Category>::insert(&*store, category).unwrap();
        }

        let names: Vec<String> = reads
            .list_categories(Visibility::Live)
            .unwrap()
            .into_iter()
            .map(|c| c.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bearings", "Fasteners", "Steel Rods"]);
    }

    #[test]
    fn product_stock_requires_a_known_product() {
        let (_, reads) = seeded();
        let err = reads.product_stock(ProductId::new()).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn product_stock_composes_the_total() {
        use stockledger_catalog::NewLocation;

        let (store, reads) = seeded();
        let product = insert_product(&store, "SKU-1", "Steel Rod", 5);
        let mut location_ids = Vec::new();
        for code in ["WH-A", "WH-B"] {
            let location = Location::from_new(
                NewLocation {
                    code: code.to_string(),
                    name: code.to_string(),
                    kind: None,
                    capacity: None,
                    is_active: None,
                },
                Utc::now(),
            )
            .unwrap();
            location_ids.push(location.id_typed());
            ResourceStore::<Location>::insert(&*store, location).unwrap();
        }
        store
            .set_quantity(product.id_typed(), location_ids[0], 30)
            .unwrap();
        store
            .set_quantity(product.id_typed(), location_ids[1], 12)
            .unwrap();

        let (rows, total) = reads.product_stock(product.id_typed()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(total, 42);
    }
}
