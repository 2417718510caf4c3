//! In-memory route table.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::debug;

use formsmith_core::{
    application::{ApplicationError, ports::Router},
    domain::{HttpMethod, RouteEntry},
    error::FormResult,
};

#[derive(Debug, Default)]
struct RouteTable {
    routes: HashMap<String, RouteEntry>,
    actions: HashMap<String, String>,
    base_url: String,
    current_url: String,
}

/// Thread-safe in-memory router.
///
/// Clones share the same table, so routes registered through one handle are
/// visible to every builder holding another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRouter {
    inner: Arc<RwLock<RouteTable>>,
}

impl InMemoryRouter {
    /// Create an empty router posting back to `/`.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> InMemoryRouterBuilder {
        InMemoryRouterBuilder::default()
    }

    /// Register or replace a named route.
    pub fn register_route(&self, name: &str, entry: RouteEntry) -> FormResult<()> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLock)?;
        debug!(route = %name, url = %entry.url, method = %entry.method, "Registering route");
        table.routes.insert(name.to_string(), entry);
        Ok(())
    }

    /// Register or replace a controller action URL.
    pub fn register_action(&self, controller_action: &str, url: &str) -> FormResult<()> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLock)?;
        table
            .actions
            .insert(controller_action.to_string(), url.to_string());
        Ok(())
    }

    /// Point the router at the request now being rendered.
    pub fn set_current_url(&self, url: &str) -> FormResult<()> {
        let mut table = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLock)?;
        table.current_url = url.to_string();
        Ok(())
    }

    /// Route names, sorted.
    pub fn route_names(&self) -> Vec<String> {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = table.routes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        table.routes.len() + table.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Router for InMemoryRouter {
    fn route(&self, name: &str) -> Option<RouteEntry> {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        table.routes.get(name).cloned()
    }

    fn action(&self, controller_action: &str) -> Option<String> {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        table.actions.get(controller_action).cloned()
    }

    fn current_url(&self) -> String {
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        table.current_url.clone()
    }

    fn absolute(&self, path: &str) -> String {
        if path.contains("://") {
            return path.to_string();
        }
        let table = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        if table.base_url.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            table.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Builder for [`InMemoryRouter`].
#[derive(Debug)]
pub struct InMemoryRouterBuilder {
    table: RouteTable,
}

impl Default for InMemoryRouterBuilder {
    fn default() -> Self {
        Self {
            table: RouteTable {
                current_url: "/".into(),
                ..RouteTable::default()
            },
        }
    }
}

impl InMemoryRouterBuilder {
    /// Scheme and host used by `absolute`, e.g. `https://example.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.table.base_url = url.into();
        self
    }

    pub fn current_url(mut self, url: impl Into<String>) -> Self {
        self.table.current_url = url.into();
        self
    }

    pub fn route(mut self, name: impl Into<String>, url: impl Into<String>, method: HttpMethod) -> Self {
        self.table
            .routes
            .insert(name.into(), RouteEntry::new(url, method));
        self
    }

    /// Named route that also records the controller action it dispatches to.
    pub fn route_to(
        mut self,
        name: impl Into<String>,
        url: impl Into<String>,
        method: HttpMethod,
        controller_action: impl Into<String>,
    ) -> Self {
        self.table.routes.insert(
            name.into(),
            RouteEntry::new(url, method).with_action(controller_action),
        );
        self
    }

    pub fn action(mut self, controller_action: impl Into<String>, url: impl Into<String>) -> Self {
        self.table
            .actions
            .insert(controller_action.into(), url.into());
        self
    }

    pub fn build(self) -> InMemoryRouter {
        InMemoryRouter {
            inner: Arc::new(RwLock::new(self.table)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> InMemoryRouter {
        InMemoryRouter::builder()
            .base_url("http://test.loc/")
            .current_url("/current")
            .route("putRouteName", "/put-url", HttpMethod::Put)
            .route_to("users.store", "/users", HttpMethod::Post, "UserController@store")
            .action("TestController@getWithoutRouteName", "/get-url-without-route-name")
            .build()
    }

    #[test]
    fn lookups() {
        let router = router();
        assert_eq!(router.route("putRouteName").unwrap().method, HttpMethod::Put);
        assert_eq!(
            router.route("users.store").unwrap().action.as_deref(),
            Some("UserController@store")
        );
        assert!(router.route("nope").is_none());
        assert_eq!(
            router.action("TestController@getWithoutRouteName").as_deref(),
            Some("/get-url-without-route-name")
        );
        assert_eq!(router.current_url(), "/current");
    }

    #[test]
    fn absolute_joins_base_once() {
        let router = router();
        assert_eq!(router.absolute("/x"), "http://test.loc/x");
        assert_eq!(router.absolute("x"), "http://test.loc/x");
        assert_eq!(router.absolute("https://other/x"), "https://other/x");
        assert_eq!(InMemoryRouter::new().absolute("/x"), "/x");
    }

    #[test]
    fn clones_share_registrations() {
        let router = InMemoryRouter::new();
        let handle = router.clone();
        handle
            .register_route("late", RouteEntry::new("/late", HttpMethod::Patch))
            .unwrap();
        handle.set_current_url("/now").unwrap();

        assert_eq!(router.route("late").unwrap().url, "/late");
        assert_eq!(router.current_url(), "/now");
        assert_eq!(router.route_names(), vec!["late".to_string()]);
    }
}
