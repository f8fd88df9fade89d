//! Process-wide observability wiring.

pub mod tracing;
