//! Command handlers.
//!
//! The rendering commands share [`session`], which wires a [`FormBuilder`]
//! from configuration, `--routes`, `--errors` and `--set`.

pub mod completions;
pub mod config;
pub mod form;
pub mod init;
pub mod input;

use std::path::Path;

use tracing::{debug, instrument};

use formsmith_adapters::{InMemoryRouter, MemoryErrorBag, RouteManifest, SessionCsrfToken, StaticCsrfToken};
use formsmith_core::{application::FormBuilder, application::ports::CsrfTokenProvider};

use crate::{
    cli::{GlobalArgs, RenderArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

/// Build the form builder for one render.
#[instrument(skip_all)]
pub(crate) fn session(
    global: &GlobalArgs,
    config: AppConfig,
    render: &RenderArgs,
) -> CliResult<FormBuilder> {
    let mut form_config = config.render;
    for kv in &render.set {
        form_config
            .set_from_str(&kv.key, &kv.value)
            .map_err(|e| CliError::InvalidOption {
                key: kv.key.clone(),
                reason: e.to_string(),
            })?;
    }

    let routes = global.routes.as_ref().or(config.session.routes.as_ref());
    let router = match routes {
        Some(path) => {
            ensure_exists(path)?;
            RouteManifest::load(path)?.into_router()
        }
        None => InMemoryRouter::new(),
    };

    let csrf: Box<dyn CsrfTokenProvider> = match config.session.csrf_token {
        Some(token) => Box::new(StaticCsrfToken::new(token)),
        None => Box::new(SessionCsrfToken::new()),
    };

    let errors = match &render.errors {
        Some(path) => {
            ensure_exists(path)?;
            let raw = std::fs::read_to_string(path)
                .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
            MemoryErrorBag::from_json(&raw)?
        }
        None => MemoryErrorBag::new(),
    };

    debug!(routes = router.len(), overrides = render.set.len(), "Render session ready");
    Ok(FormBuilder::new(
        form_config,
        Box::new(router),
        csrf,
        Box::new(errors),
    ))
}

fn ensure_exists(path: &Path) -> CliResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
