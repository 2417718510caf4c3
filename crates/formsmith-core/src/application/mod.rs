//! Application layer for formsmith.
//!
//! This layer contains:
//! - **Services**: `FormBuilder` and its helpers
//! - **Ports**: traits for the router, CSRF token and error bag
//! - **Session**: the stack of open forms
//! - **Errors**: application-specific error types
//!
//! Rendering rules live in `crate::domain`; this layer feeds them.

pub mod error;
pub mod ports;
pub mod services;
pub mod session;

pub use services::{FormBuilder, FormScope, RouteResolver};

pub use ports::{CsrfTokenProvider, ErrorBag, Router};

pub use error::ApplicationError;
pub use session::FormStateStack;
