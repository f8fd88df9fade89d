//! Mutation and read services over the entity store.
//!
//! The mutation service is the only entry point that changes catalog state:
//! it composes validation, the entity write, and the audit write as one
//! logical operation. Read paths bypass it entirely.

pub mod mutation;
pub mod reads;

pub use mutation::{BulkOutcome, MutationService};
pub use reads::ReadService;
