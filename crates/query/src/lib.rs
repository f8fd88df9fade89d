//! Query/filter engine: caller-supplied filter sets and deterministic
//! pagination over catalog and audit state.
//!
//! Read paths bypass the mutation service entirely; everything here is pure
//! predicate evaluation over rows the store hands back.

pub mod filter;
pub mod pagination;

pub use filter::{AuditFilter, ProductFilter, SupplierFilter, Visibility};
pub use pagination::{Page, Pagination, newest_first, newest_first_audit};
