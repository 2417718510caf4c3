//! Driven (output) ports - implemented by infrastructure.
//!
//! Lookups here never fail: an unknown route is `None`, a field without
//! errors is an empty list. The form builder degrades instead of erroring.

use crate::domain::RouteEntry;

/// Port for URL generation.
///
/// Implemented by:
/// - `formsmith_adapters::router::InMemoryRouter`
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    /// Look up a named route.
    fn route(&self, name: &str) -> Option<RouteEntry>;

    /// URL for a `Controller@action` reference.
    fn action(&self, controller_action: &str) -> Option<String>;

    /// URL of the request being rendered. Forms with no target post here.
    fn current_url(&self) -> String;

    /// Fully qualified form of a path (`/x` → `https://host/x`).
    fn absolute(&self, path: &str) -> String;
}

/// Port for the session's CSRF token.
///
/// Implemented by:
/// - `formsmith_adapters::csrf::StaticCsrfToken`
/// - `formsmith_adapters::csrf::SessionCsrfToken`
#[cfg_attr(test, mockall::automock)]
pub trait CsrfTokenProvider: Send + Sync {
    fn token(&self) -> String;
}

/// Port for validation messages.
///
/// Implemented by:
/// - `formsmith_adapters::error_bag::MemoryErrorBag`
#[cfg_attr(test, mockall::automock)]
pub trait ErrorBag: Send + Sync {
    /// Messages for a field key (dotted form for nested names), in order.
    fn errors_for(&self, key: &str) -> Vec<String>;
}

