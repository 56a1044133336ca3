//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and the table definitions (`schema.rs`)
//! stay private to this module. Connections come from a `bb8` pool through
//! `diesel-async`, and every database failure is mapped onto the port's
//! error type before leaving the adapter.
//!
//! # Example
//!
//! ```ignore
//! use complaint_desk::outbound::persistence::{
//!     DbPool, DieselComplaintRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/complaints").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/complaints")).await?;
//! let complaints = DieselComplaintRepository::new(pool);
//! ```

mod diesel_complaint_repository;
mod diesel_error_mapping;
mod diesel_user_directory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_complaint_repository::DieselComplaintRepository;
pub use diesel_user_directory::DieselUserDirectory;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
