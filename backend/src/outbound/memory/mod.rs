//! In-process adapters for development runs and integration tests.
//!
//! State lives behind `std::sync::RwLock`; a poisoned lock surfaces as a
//! query error rather than a panic. Nothing here survives a restart.

mod complaint_store;
mod user_directory;

pub use complaint_store::InMemoryComplaintRepository;
pub use user_directory::InMemoryUserDirectory;
