//! Entity type discriminator used by audit records and filters.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockledger_core::DomainError;

/// The entity types the mutation service operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Product,
    Category,
    Location,
    Supplier,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Product => "Product",
            EntityKind::Category => "Category",
            EntityKind::Location => "Location",
            EntityKind::Supplier => "Supplier",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product" => Ok(EntityKind::Product),
            "category" => Ok(EntityKind::Category),
            "location" => Ok(EntityKind::Location),
            "supplier" => Ok(EntityKind::Supplier),
            other => Err(DomainError::validation(format!(
                "unknown entity type: {other}"
            ))),
        }
    }
}
