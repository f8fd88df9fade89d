//! Persistent store abstractions and the in-memory implementation.
//!
//! The ledger is specified against an abstract store with transactional
//! guarantees, not a specific engine. The in-memory store here executes each
//! read-modify-write atomically under a per-table write lock, the in-process
//! analogue of a read-committed transaction.

pub mod memory;
pub mod resource_store;

pub use memory::InMemoryStore;
pub use resource_store::{EntityStore, ResourceStore};
