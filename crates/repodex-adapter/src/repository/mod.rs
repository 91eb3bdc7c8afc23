//! Persistence Adapters - Store implementations
//!
//! These implement the port traits from repodex-domain.

pub mod in_memory;
