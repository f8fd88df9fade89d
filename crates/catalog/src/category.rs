//! Category record.
//!
//! Products reference categories weakly (id + lookup); deleting a category
//! never cascades into products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{CategoryId, DomainError, DomainResult, Entity};

use crate::kind::EntityKind;
use crate::resource::Resource;

/// A product category. Name is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Category {
    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Resource for Category {
    const KIND: EntityKind = EntityKind::Category;

    type New = NewCategory;
    type Patch = CategoryPatch;

    fn from_new(new: NewCategory, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: CategoryId::new(),
            name: new.name,
            description: new.description,
            created_at: now,
            deleted_at: None,
        })
    }

    fn apply_patch(&mut self, patch: CategoryPatch) -> DomainResult<()> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        Ok(())
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
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
