//! Infrastructure adapters for formsmith.
//!
//! This crate implements the ports defined in
//! `formsmith_core::application::ports`: routing tables, CSRF tokens and
//! validation messages. File access lives here too (route manifests).

pub mod csrf;
pub mod error_bag;
pub mod router;

// Re-export commonly used adapters
pub use csrf::{SessionCsrfToken, StaticCsrfToken};
pub use error_bag::MemoryErrorBag;
pub use router::{InMemoryRouter, RouteManifest};
