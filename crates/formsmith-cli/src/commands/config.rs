//! `formsmith config` — inspect configuration values.

use std::path::Path;

use crate::{
    cli::{ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&Path>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.value(
                &serde_json::json!({ "key": key, "value": value }),
                &format!("{key} = {}", display(&value)),
            )?;
        }

        ConfigCommands::List => {
            let json = to_json(&config)?;
            let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            if output.format() != OutputFormat::Json {
                output.header("Current Configuration:")?;
            }
            output.value(&json, &serialised)?;
        }

        ConfigCommands::Path => {
            let path = config_file
                .map(Path::to_path_buf)
                .unwrap_or_else(AppConfig::config_path);
            let shown = path.display().to_string();
            output.value(&serde_json::json!({ "path": shown }), &shown)?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn to_json(config: &AppConfig) -> CliResult<serde_json::Value> {
    serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

/// Look up a dotted key. Option keys under `render` accept either spelling
/// (`render.use-grid` or `render.use_grid`).
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<serde_json::Value> {
    let unknown = || CliError::UnknownConfigKey {
        key: key.to_string(),
    };
    let (section, rest) = key.split_once('.').ok_or_else(unknown)?;

    let json = to_json(config)?;
    let table = json.get(section).ok_or_else(unknown)?;
    let field = if section == "render" {
        formsmith_core::domain::canonical_key(rest)
    } else {
        rest.to_string()
    };
    table.get(&field).cloned().ok_or_else(unknown)
}

fn display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "(unset)".into(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
