//! Route Resolver - turns a form target into a URL and an HTTP method.
//!
//! Targets come in three shapes:
//! 1. empty: post back to the current URL
//! 2. `Controller@action`: URL from the router, method inferred from the
//!    action name
//! 3. anything else: a named route, URL and method from the route table
//!
//! An explicit `method` option beats whatever the target implies, and POST is
//! the fallback when nothing implies a method at all.

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::Router,
    domain::{ControllerAction, EffectiveOptions, HttpMethod, ResolvedRoute},
};

pub struct RouteResolver<'a> {
    router: &'a dyn Router,
}

impl<'a> RouteResolver<'a> {
    pub fn new(router: &'a dyn Router) -> Self {
        Self { router }
    }

    /// Resolve `target` under the form-level options (`method`, `url`,
    /// `absolute`).
    #[instrument(skip_all, fields(target = %target))]
    pub fn resolve(&self, target: &str, opts: &EffectiveOptions) -> ResolvedRoute {
        let target = target.trim();
        let (url, implied_method, controller_action) = self.lookup(target);

        let method = explicit_method(opts)
            .or(implied_method)
            .unwrap_or_default();

        let url = opts.text("url").map(str::to_string).unwrap_or(url);
        let url = if opts.flag("absolute") {
            self.router.absolute(&url)
        } else {
            url
        };

        debug!(%url, %method, "Resolved form target");

        ResolvedRoute {
            url,
            method,
            controller_action,
        }
    }

    fn lookup(&self, target: &str) -> (String, Option<HttpMethod>, Option<String>) {
        if target.is_empty() {
            return (self.router.current_url(), None, None);
        }

        if let Some(reference) = ControllerAction::parse(target) {
            let url = self.router.action(target).unwrap_or_else(|| {
                warn!(action = %target, "No URL registered for controller action");
                self.fallback_url(target)
            });
            let method = HttpMethod::infer_from_action(reference.action);
            return (url, Some(method), Some(target.to_string()));
        }

        match self.router.route(target) {
            Some(entry) => (entry.url, Some(entry.method), entry.action),
            None => {
                warn!(route = %target, "Unknown route; falling back");
                (self.fallback_url(target), None, None)
            }
        }
    }

    /// Path-like targets are used as-is; anything else posts back.
    fn fallback_url(&self, target: &str) -> String {
        if target.contains('/') && !target.contains('@') {
            target.to_string()
        } else {
            self.router.current_url()
        }
    }
}

fn explicit_method(opts: &EffectiveOptions) -> Option<HttpMethod> {
    let raw = opts.text("method")?;
    match raw.parse() {
        Ok(method) => Some(method),
        Err(err) => {
            warn!(method = %raw, error = %err, "Ignoring unusable method option");
            None
        }
    }
}
