//! REST surface for the inventory ledger & audit subsystem.
//!
//! Deliberately thin glue: routing, DTO mapping, and error translation.
//! Authentication and authorization happen upstream; this layer only
//! extracts the actor identity it is handed and passes it to the core.

pub mod app;
pub mod context;
