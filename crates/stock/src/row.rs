//! Stock rows and the ledger seam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockledger_core::{DomainError, DomainResult, LocationId, ProductId};

/// One `(product, location)` stock row. The pair is unique at all times; an
/// upsert on an existing pair mutates `quantity` in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub product_id: ProductId,
    pub location_id: LocationId,
    pub quantity: i64,
    pub updated_at: DateTime<Utc>,
}

/// Quantity constraint enforced at the ledger boundary.
pub fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation(format!(
            "quantity must be non-negative, got {quantity}"
        )));
    }
    Ok(())
}

/// A product's cross-location total, composed on read.
pub fn total_quantity(rows: &[StockRow]) -> i64 {
    rows.iter().map(|r| r.quantity).sum()
}

/// Last-write-wins quantity ledger.
///
/// `set_quantity` is an overwrite, not a counter: callers computing deltas
/// must read-then-write within one transactional scope or accept lost
/// updates under concurrent writers.
pub trait StockLedger: Send + Sync {
    /// Overwrite the quantity for a pair, inserting the row if absent.
    ///
    /// Rejects negative quantity with `Validation`; unknown product or
    /// location ids signal `NotFound`.
    fn set_quantity(
        &self,
        product_id: ProductId,
        location_id: LocationId,
        quantity: i64,
    ) -> DomainResult<StockRow>;

    /// Stock rows for a product, in deterministic order.
    fn get_by_product(&self, product_id: ProductId) -> DomainResult<Vec<StockRow>>;

    /// Stock rows for a location, in deterministic order.
    fn get_by_location(&self, location_id: LocationId) -> DomainResult<Vec<StockRow>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_is_a_validation_error() {
        let err = validate_quantity(-1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(50).is_ok());
    }

    #[test]
    fn total_sums_across_locations() {
        let product_id = ProductId::new();
        let rows = vec![
            StockRow {
                product_id,
                location_id: LocationId::new(),
                quantity: 30,
                updated_at: Utc::now(),
            },
            StockRow {
                product_id,
                location_id: LocationId::new(),
                quantity: 12,
                updated_at: Utc::now(),
            },
        ];
        assert_eq!(total_quantity(&rows), 42);
        assert_eq!(total_quantity(&[]), 0);
    }
}
