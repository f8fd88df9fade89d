//! Full-entity snapshots for audit before/after capture.
//!
//! Snapshots are full copies, not diffs, so reconstructing "what changed" is
//! a pure comparison. The union is keyed by entity type to keep the
//! reconstruction path type-safe.

use serde::{Deserialize, Serialize};

use stockledger_catalog::{Category, EntityKind, Location, Product, Supplier};

/// A full copy of an entity's state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity")]
pub enum Snapshot {
    Product(Product),
    Category(Category),
    Location(Location),
    Supplier(Supplier),
}

impl Snapshot {
    pub fn kind(&self) -> EntityKind {
        match self {
            Snapshot::Product(_) => EntityKind::Product,
            Snapshot::Category(_) => EntityKind::Category,
            Snapshot::Location(_) => EntityKind::Location,
            Snapshot::Supplier(_) => EntityKind::Supplier,
        }
    }
}

/// Capture a snapshot of a catalog record.
pub trait Snapshottable {
    fn snapshot(&self) -> Snapshot;
}

impl Snapshottable for Product {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Product(self.clone())
    }
}

impl Snapshottable for Category {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Category(self.clone())
    }
}

impl Snapshottable for Location {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Location(self.clone())
    }
}

impl Snapshottable for Supplier {
    fn snapshot(&self) -> Snapshot {
        Snapshot::Supplier(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockledger_catalog::{NewProduct, Resource};

    fn product() -> Product {
        Product::from_new(
            NewProduct {
                sku: "SKU-001".to_string(),
                name: "Steel Rod 8mm".to_string(),
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

    #[test]
    fn snapshot_is_tagged_by_entity_type() {
        let snap = product().snapshot();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["entity"], "Product");
        assert_eq!(json["sku"], "SKU-001");

        let back: Snapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
        assert_eq!(back.kind(), EntityKind::Product);
    }
}
