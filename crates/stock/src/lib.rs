//! Stock ledger contract: authoritative quantity-by-location state.
//!
//! A product has no single quantity; its cross-location total is composed on
//! read from the rows returned here.

pub mod row;

pub use row::{StockLedger, StockRow, total_quantity, validate_quantity};
