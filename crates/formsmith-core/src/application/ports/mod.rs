//! Application ports (traits) for external collaborators.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the form builder, implemented in
//!   `formsmith-adapters`
//!   - `Router`: named routes, controller actions, current and absolute URLs
//!   - `CsrfTokenProvider`: the session's CSRF token
//!   - `ErrorBag`: validation messages per field
//!
//! - **Driving (Input) Ports**: the `FormBuilder` service API itself

pub mod output;

pub use output::{CsrfTokenProvider, ErrorBag, Router};

#[cfg(test)]
pub use output::{MockCsrfTokenProvider, MockErrorBag, MockRouter};
