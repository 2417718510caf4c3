// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Rendering itself never fails; these errors come from parsing user input
/// (method names, input type names, controller references, option values).
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Unknown input type '{0}'")]
    UnknownInputType(String),

    #[error("Invalid controller reference '{value}': {reason}")]
    InvalidControllerAction { value: String, reason: String },

    #[error("Invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("Invalid label position '{0}'")]
    InvalidLabelPosition(String),

    #[error("Invalid route manifest: {0}")]
    InvalidManifest(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("No route named '{0}'")]
    RouteNotFound(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidMethod(method) => vec![
                format!("'{method}' is not a usable HTTP verb"),
                "Use one of: GET, POST, PUT, PATCH, DELETE".into(),
            ],
            Self::UnknownInputType(name) => vec![
                format!("'{name}' is not a known input type"),
                "Known types: text, password, file, color, date, datetime, datetime-local, \
                 email, number, range, search, tel, time, url, month, week, hidden"
                    .into(),
                "Pass an explicit `type` option to emit an arbitrary type attribute".into(),
            ],
            Self::InvalidControllerAction { value, .. } => vec![
                format!("Could not parse '{value}'"),
                "Controller references look like `UserController@edit`".into(),
            ],
            Self::InvalidOption { key, .. } => vec![
                format!("Check the value given for '{key}'"),
                "Flags take true/false, class options take a string".into(),
            ],
            Self::InvalidLabelPosition(_) => vec!["Use `before` or `after`".into()],
            Self::InvalidManifest(_) => vec![
                "Route manifests are TOML with `[[routes]]` and `[[actions]]` tables".into(),
                "Each route needs `name`, `url` and `method`".into(),
            ],
            Self::RouteNotFound(name) => vec![
                format!("Route '{name}' is not registered with the router"),
                "Check the route manifest or pass an explicit `url` option".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMethod(_)
            | Self::UnknownInputType(_)
            | Self::InvalidControllerAction { .. }
            | Self::InvalidOption { .. }
            | Self::InvalidLabelPosition(_)
            | Self::InvalidManifest(_) => ErrorCategory::Validation,
            Self::RouteNotFound(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
