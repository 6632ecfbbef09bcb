//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process account and blog stores shared across workers.
//!
//! Adapters are thin translators between domain types and their storage.
//! They contain no business logic.

pub mod memory;
