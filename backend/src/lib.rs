//! Complaint desk backend: filing, triage and reporting of user complaints.
//!
//! The crate follows a hexagonal layout. [`domain`] owns the complaint
//! lifecycle and the ports it depends on, [`inbound`] exposes it over HTTP and
//! [`outbound`] provides the in-memory and PostgreSQL adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
