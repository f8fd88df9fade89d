//! Product record and its business rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};

use crate::kind::EntityKind;
use crate::resource::Resource;

/// Creation defaults applied when the caller omits stock thresholds.
const DEFAULT_MIN_STOCK: u32 = 10;
const DEFAULT_MAX_STOCK: u32 = 1000;
const DEFAULT_REORDER_POINT: u32 = 50;

/// A product in the catalog.
///
/// The SKU is unique across all products including soft-deleted ones. A
/// product carries no quantity of its own; per-location quantities live in
/// the stock ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    description: Option<String>,
    category_id: Option<CategoryId>,
    min_stock_level: u32,
    max_stock_level: u32,
    reorder_point: u32,
    unit_price_cents: u64,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub min_stock_level: Option<u32>,
    pub max_stock_level: Option<u32>,
    pub reorder_point: Option<u32>,
    pub unit_price_cents: Option<u64>,
    pub is_active: Option<bool>,
}

/// Partial update for a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub min_stock_level: Option<u32>,
    pub max_stock_level: Option<u32>,
    pub reorder_point: Option<u32>,
    pub unit_price_cents: Option<u64>,
    pub is_active: Option<bool>,
}

impl Product {
    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn min_stock_level(&self) -> u32 {
        self.min_stock_level
    }

    pub fn max_stock_level(&self) -> u32 {
        self.max_stock_level
    }

    pub fn reorder_point(&self) -> u32 {
        self.reorder_point
    }

    pub fn unit_price_cents(&self) -> u64 {
        self.unit_price_cents
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Resource for Product {
    const KIND: EntityKind = EntityKind::Product;

    type New = NewProduct;
    type Patch = ProductPatch;

    fn from_new(new: NewProduct, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: ProductId::new(),
            sku: new.sku,
            name: new.name,
            description: new.description,
            category_id: new.category_id,
            min_stock_level: new.min_stock_level.unwrap_or(DEFAULT_MIN_STOCK),
            max_stock_level: new.max_stock_level.unwrap_or(DEFAULT_MAX_STOCK),
            reorder_point: new.reorder_point.unwrap_or(DEFAULT_REORDER_POINT),
            unit_price_cents: new.unit_price_cents.unwrap_or(0),
            is_active: new.is_active.unwrap_or(true),
            created_at: now,
            deleted_at: None,
        })
    }

    fn apply_patch(&mut self, patch: ProductPatch) -> DomainResult<()> {
        if let Some(sku) = patch.sku {
            if sku.trim().is_empty() {
                return Err(DomainError::validation("SKU cannot be empty"));
            }
            self.sku = sku;
        }
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(min) = patch.min_stock_level {
            self.min_stock_level = min;
        }
        if let Some(max) = patch.max_stock_level {
            self.max_stock_level = max;
        }
        if let Some(reorder) = patch.reorder_point {
            self.reorder_point = reorder;
        }
        if let Some(price) = patch.unit_price_cents {
            self.unit_price_cents = price;
        }
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
        Ok(())
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.sku)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted_at = Some(at);
    }
}
