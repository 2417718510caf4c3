//! Application layer errors.
//!
//! These errors represent misuse of the rendering session or failures in
//! the machinery around it, not rendering rules. Option and parsing errors
//! are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a form-building session.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// An operation needs an open form and there is none.
    #[error("No form is open (during {operation})")]
    NoActiveFormContext { operation: &'static str },

    /// Shared adapter state is unusable (poisoned lock).
    #[error("Adapter state is unavailable")]
    StateLock,

    /// An adapter failed to load or reach its backing data.
    #[error("{adapter} failed: {reason}")]
    AdapterFailure {
        adapter: &'static str,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoActiveFormContext { operation } => vec![
                format!("`{operation}` was called without a matching open_form()"),
                "Open a form first, or disable `require_form` to render stray inputs".into(),
            ],
            Self::StateLock => vec![
                "A previous render panicked while holding adapter state".into(),
                "Recreate the adapter before rendering again".into(),
            ],
            Self::AdapterFailure { adapter, .. } => {
                vec![format!("Check the data backing the {adapter}")]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoActiveFormContext { .. } => ErrorCategory::State,
            Self::StateLock => ErrorCategory::Internal,
            Self::AdapterFailure { .. } => ErrorCategory::Configuration,
        }
    }
}
