//! CSRF token providers.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;
use uuid::Uuid;

use formsmith_core::application::ports::CsrfTokenProvider;

/// Always returns the same token. Used for tests and for rendering against a
/// token issued elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCsrfToken(String);

impl StaticCsrfToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CsrfTokenProvider for StaticCsrfToken {
    fn token(&self) -> String {
        self.0.clone()
    }
}

/// Per-session random token.
///
/// The token is generated once and reused by every form rendered for the
/// session until [`SessionCsrfToken::regenerate`] is called.
#[derive(Debug, Clone)]
pub struct SessionCsrfToken {
    current: Arc<RwLock<String>>,
}

impl SessionCsrfToken {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(fresh_token())),
        }
    }

    /// Replace the token, e.g. after login. Returns the new value.
    pub fn regenerate(&self) -> String {
        let token = fresh_token();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = token.clone();
        debug!("Regenerated CSRF token");
        token
    }
}

impl Default for SessionCsrfToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CsrfTokenProvider for SessionCsrfToken {
    fn token(&self) -> String {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn fresh_token() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_is_returned_verbatim() {
        assert_eq!(StaticCsrfToken::new("abc").token(), "abc");
    }

    #[test]
    fn session_token_is_stable_until_regenerated() {
        let csrf = SessionCsrfToken::new();
        let first = csrf.token();
        assert_eq!(first.len(), 32);
        assert_eq!(csrf.token(), first);

        let shared = csrf.clone();
        let second = shared.regenerate();
        assert_ne!(second, first);
        assert_eq!(csrf.token(), second);
    }
}
