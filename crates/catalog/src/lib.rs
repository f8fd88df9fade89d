//! Catalog domain module: products, categories, locations, suppliers.
//!
//! This crate contains the persistent record types and their business rules
//! (creation defaults, patch validation, uniqueness keys), implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod kind;
pub mod location;
pub mod product;
pub mod resource;
pub mod supplier;

pub use category::{Category, CategoryPatch, NewCategory};
pub use kind::EntityKind;
pub use location::{Location, LocationPatch, NewLocation};
pub use product::{NewProduct, Product, ProductPatch};
pub use resource::Resource;
pub use supplier::{ContactInfo, NewSupplier, Supplier, SupplierPatch};
