use crate::domain::value_objects::HttpMethod;
use serde::{Deserialize, Serialize};

/// A named route as reported by a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub url: String,
    pub method: HttpMethod,
    /// `Controller@action` the route dispatches to, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl RouteEntry {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Outcome of resolving a form target.
///
/// Carries everything the form tag needs: where to post, how, and which
/// hidden fields follow the opening tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    pub url: String,
    pub method: HttpMethod,
    /// `Controller@action` reference used as the id basis, if any.
    pub controller_action: Option<String>,
}

impl ResolvedRoute {
    pub fn requires_spoofing(&self) -> bool {
        self.method.requires_spoofing()
    }

    pub fn requires_csrf(&self) -> bool {
        self.method.requires_csrf()
    }
}
