//! TOML route manifest loader.
//!
//! # Format
//!
//! ```toml
//! base_url    = "https://example.com"   # optional, used for absolute URLs
//! current_url = "/users/1/edit"         # optional, defaults to "/"
//!
//! [[routes]]
//! name   = "users.update"
//! url    = "/users/1"
//! method = "PUT"
//! action = "UserController@update"      # optional, gives forms an id basis
//!
//! [[actions]]
//! action = "UserController@search"
//! url    = "/users/search"
//! ```

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use formsmith_core::domain::{ControllerAction, DomainError, HttpMethod};

use super::InMemoryRouter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_current_url")]
    pub current_url: String,
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub name: String,
    pub url: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub action: String,
    pub url: String,
}

fn default_current_url() -> String {
    "/".into()
}

impl Default for RouteManifest {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            current_url: default_current_url(),
            routes: Vec::new(),
            actions: Vec::new(),
        }
    }
}

impl RouteManifest {
    /// Parse and validate manifest text.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidManifest`] on TOML errors, unknown methods,
    /// duplicate route names or malformed controller references.
    pub fn from_toml_str(raw: &str) -> Result<Self, DomainError> {
        let manifest: RouteManifest = toml::from_str(raw)
            .map_err(|e| DomainError::InvalidManifest(format!("failed to parse: {e}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, DomainError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            DomainError::InvalidManifest(format!("failed to read '{}': {e}", path.display()))
        })?;
        let manifest = Self::from_toml_str(&raw)?;
        debug!(
            routes = manifest.routes.len(),
            actions = manifest.actions.len(),
            "Loaded route manifest"
        );
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            if route.name.trim().is_empty() {
                return Err(DomainError::InvalidManifest("route with empty name".into()));
            }
            if !seen.insert(route.name.as_str()) {
                return Err(DomainError::InvalidManifest(format!(
                    "duplicate route name '{}'",
                    route.name
                )));
            }
            if let Some(action) = &route.action {
                check_controller_action(action)?;
            }
        }
        for spec in &self.actions {
            check_controller_action(&spec.action)?;
        }
        Ok(())
    }

    pub fn into_router(self) -> InMemoryRouter {
        let mut builder = InMemoryRouter::builder()
            .base_url(self.base_url)
            .current_url(self.current_url);
        for route in self.routes {
            builder = match route.action {
                Some(action) => builder.route_to(route.name, route.url, route.method, action),
                None => builder.route(route.name, route.url, route.method),
            };
        }
        for spec in self.actions {
            builder = builder.action(spec.action, spec.url);
        }
        builder.build()
    }
}

fn check_controller_action(reference: &str) -> Result<(), DomainError> {
    ControllerAction::parse(reference)
        .map(|_| ())
        .ok_or_else(|| DomainError::InvalidControllerAction {
            value: reference.to_string(),
            reason: "expected `Controller@action`".into(),
        })
}
