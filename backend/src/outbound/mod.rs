//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store and directory used in development and tests
//! - **persistence**: PostgreSQL-backed repositories using Diesel
//!
//! Adapters translate between domain types and storage representations. They
//! contain no business logic.

pub mod memory;
pub mod persistence;
