//! Warehouse location record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, Entity, LocationId};

use crate::kind::EntityKind;
use crate::resource::Resource;

/// A physical storage location. Code is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    id: LocationId,
    code: String,
    name: String,
    kind: String,
    capacity: Option<u32>,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub code: String,
    pub name: String,
    pub kind: Option<String>,
    pub capacity: Option<u32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub capacity: Option<u32>,
    pub is_active: Option<bool>,
}

impl Location {
    pub fn id_typed(&self) -> LocationId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn capacity(&self) -> Option<u32> {
        self.capacity
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Resource for Location {
    const KIND: EntityKind = EntityKind::Location;

    type New = NewLocation;
    type Patch = LocationPatch;

    fn from_new(new: NewLocation, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.code.trim().is_empty() {
            return Err(DomainError::validation("code cannot be empty"));
        }
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id: LocationId::new(),
            code: new.code,
            name: new.name,
            kind: new.kind.unwrap_or_else(|| "storage".to_string()),
            capacity: new.capacity,
            is_active: new.is_active.unwrap_or(true),
            created_at: now,
            deleted_at: None,
        })
    }

    fn apply_patch(&mut self, patch: LocationPatch) -> DomainResult<()> {
        if let Some(code) = patch.code {
            if code.trim().is_empty() {
                return Err(DomainError::validation("code cannot be empty"));
            }
            self.code = code;
        }
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
            self.name = name;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = Some(capacity);
        }
        if let Some(active) = patch.is_active {
            self.is_active = active;
        }
        Ok(())
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.code)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_new_defaults_kind_and_active_flag() {
        let location = Location::from_new(
            NewLocation {
                code: "WH-A".to_string(),
                name: "Warehouse A".to_string(),
                kind: None,
                capacity: Some(5000),
                is_active: None,
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(location.kind(), "storage");
        assert!(location.is_active());
        assert_eq!(location.unique_key(), Some("WH-A"));
    }

    #[test]
    fn from_new_rejects_blank_code() {
        let err = Location::from_new(
            NewLocation {
                code: String::new(),
                name: "Warehouse A".to_string(),
                kind: None,
                capacity: None,
                is_active: None,
            },
            Utc::now(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
