//! Filter predicates built from caller-supplied filter sets.

use uuid::Uuid;

use stockledger_audit::{AuditAction, AuditLog};
use stockledger_catalog::{EntityKind, Product, Resource, Supplier};
use stockledger_core::{CategoryId, UserId};

/// Soft-delete visibility, an explicit parameter on every read path rather
/// than an implicit always-on predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Rows with a null `deleted_at` only.
    #[default]
    Live,
    /// Every row, soft-deleted included.
    IncludeDeleted,
}

impl Visibility {
    pub fn admits<T: Resource>(self, row: &T) -> bool {
        match self {
            Visibility::Live => row.deleted_at().is_none(),
            Visibility::IncludeDeleted => true,
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Product list filter. All supplied keys are applied as a conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub is_active: Option<bool>,
    /// Case-insensitive substring match against name OR sku.
    pub search: Option<String>,
    pub visibility: Visibility,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.visibility.admits(product) {
            return false;
        }
        if let Some(category_id) = self.category_id {
            if product.category_id() != Some(category_id) {
                return false;
            }
        }
        if let Some(active) = self.is_active {
            if product.is_active() != active {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !contains_ci(product.name(), search) && !contains_ci(product.sku(), search) {
                return false;
            }
        }
        true
    }
}

/// Supplier list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierFilter {
    pub is_active: Option<bool>,
    /// Case-insensitive substring match against name, email, or phone.
    pub search: Option<String>,
    pub visibility: Visibility,
}

impl SupplierFilter {
    pub fn matches(&self, supplier: &Supplier) -> bool {
        if !self.visibility.admits(supplier) {
            return false;
        }
        if let Some(active) = self.is_active {
            if supplier.is_active() != active {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let contact = supplier.contact();
            let hit = contains_ci(supplier.name(), search)
                || contact
                    .email
                    .as_deref()
                    .is_some_and(|email| contains_ci(email, search))
                || contact
                    .phone
                    .as_deref()
                    .is_some_and(|phone| contains_ci(phone, search));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Audit trail filter. All supplied keys are exact matches, applied as a
/// conjunction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub entity: Option<EntityKind>,
    pub action: Option<AuditAction>,
    pub user_id: Option<UserId>,
    /// Set together with `entity` for a single entity's history.
    pub entity_id: Option<Uuid>,
}

impl AuditFilter {
    pub fn matches(&self, log: &AuditLog) -> bool {
        if let Some(entity) = self.entity {
            if log.entity != entity {
                return false;
            }
        }
        if let Some(action) = self.action {
            if log.action != action {
                return false;
            }
        }
        if let Some(user_id) = self.user_id {
            if log.user_id != user_id {
                return false;
            }
        }
        if let Some(entity_id) = self.entity_id {
            if log.entity_id != entity_id {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockledger_catalog::{ContactInfo, NewProduct, NewSupplier};

    fn product(sku: &str, name: &str, active: bool) -> Product {
        Product::from_new(
            NewProduct {
                sku: sku.to_string(),
                name: name.to_string(),
                description: None,
                category_id: None,
                min_stock_level: None,
                max_stock_level: None,
                reorder_point: None,
                unit_price_cents: None,
                is_active: Some(active),
            },
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn search_matches_name_or_sku_case_insensitively() {
        let by_name = product("SKU-001", "Steel Rod 8mm", true);
        let by_sku = product("ROD-010", "Hex Bolt M10", true);
        let neither = product("SKU-002", "Hex Nut M10", true);

        let filter = ProductFilter {
            search: Some("rod".to_string()),
            ..ProductFilter::default()
        };
        assert!(filter.matches(&by_name));
        assert!(filter.matches(&by_sku));
        assert!(!filter.matches(&neither));
    }

    #[test]
    fn live_visibility_excludes_soft_deleted_rows() {
        // 2 matching active, 3 non-matching active, 1 matching but deleted.
        let mut rows = vec![
            product("SKU-001", "Steel Rod 8mm", true),
            product("SKU-002", "Steel Rod 10mm", true),
            product("SKU-003", "Hex Bolt M10", true),
            product("SKU-004", "Hex Nut M10", true),
            product("SKU-005", "Washer M10", true),
            product("SKU-006", "Steel Rod 12mm", true),
        ];
        rows[5].mark_deleted(Utc::now());

        let filter = ProductFilter {
            is_active: Some(true),
            search: Some("rod".to_string()),
            ..ProductFilter::default()
        };
        let matched: Vec<&Product> = rows.iter().filter(|p| filter.matches(p)).collect();
        assert_eq!(matched.len(), 2);

        let include_deleted = ProductFilter {
            visibility: Visibility::IncludeDeleted,
            ..filter
        };
        let matched = rows.iter().filter(|p| include_deleted.matches(p)).count();
        assert_eq!(matched, 3);
    }

    #[test]
    fn inactive_filter_is_exact() {
        let active = product("SKU-001", "Steel Rod 8mm", true);
        let inactive = product("SKU-002", "Steel Rod 10mm", false);

        let filter = ProductFilter {
            is_active: Some(false),
            ..ProductFilter::default()
        };
        assert!(!filter.matches(&active));
        assert!(filter.matches(&inactive));
    }

    #[test]
    fn supplier_search_covers_contact_fields() {
        let supplier = Supplier::from_new(
            NewSupplier {
                name: "SteelWorks Ltd".to_string(),
                contact: Some(ContactInfo {
                    email: Some("sales@steelworks.example".to_string()),
                    phone: Some("+91-98765-43210".to_string()),
                    address: None,
                }),
                is_active: None,
            },
            Utc::now(),
        )
        .unwrap();

        for needle in ["steelworks", "SALES@", "98765"] {
            let filter = SupplierFilter {
                search: Some(needle.to_string()),
                ..SupplierFilter::default()
            };
            assert!(filter.matches(&supplier), "needle {needle:?} should match");
        }

        let miss = SupplierFilter {
            search: Some("copper".to_string()),
            ..SupplierFilter::default()
        };
        assert!(!miss.matches(&supplier));
    }
}
