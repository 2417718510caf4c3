//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns the file and environment handling; the core crate only
//! ever sees the resulting [`FormConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--set`, `--routes`; handled at the call-site, not here)
//! 2. Environment variables, `FORMSMITH__RENDER__BOOTSTRAP=true`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)
//!
//! ```toml
//! [render]
//! bootstrap = true
//! use_grid = true
//!
//! [session]
//! routes = "routes.toml"
//! csrf_token = "fixed-token"
//!
//! [output]
//! no_color = false
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use formsmith_core::domain::FormConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rendering options; a flat map of option keys.
    pub render: FormConfig,
    /// Where the request-scoped collaborators come from.
    pub session: SessionConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Route manifest. Relative paths resolve against the working directory.
    pub routes: Option<PathBuf>,
    /// Fixed CSRF token; a random one is generated per run when unset.
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path passed via `--config`; it must exist.
    /// Without it the default location is used if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        // `render` is left out of the seed: its keys have two spellings, and a
        // seeded `use_grid` would shadow a file's `use-grid`. `FormConfig`
        // restores its own defaults when deserialised.
        let mut seed =
            serde_json::to_value(AppConfig::default()).context("Failed to seed default config")?;
        if let Some(table) = seed.as_object_mut() {
            table.remove("render");
        }
        let defaults = Config::try_from(&seed).context("Failed to seed default config")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix("FORMSMITH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Configuration has an unexpected shape")?;
        config
            .render
            .validate()
            .context("Invalid value under [render]")?;

        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.formsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "formsmith", "formsmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".formsmith.toml"))
    }
}
