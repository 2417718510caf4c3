//! Rendering configuration and option resolution.
//!
//! [`FormConfig`] is the explicit replacement for a process-wide settings
//! store: one value, owned by whoever renders, holding the built-in defaults
//! plus any overrides. [`resolve`] overlays the three option layers into an
//! [`EffectiveOptions`] for a single render call.

use crate::domain::entities::options::{OptionValue, Options, canonical_key};
use crate::domain::error::DomainError;
use crate::domain::value_objects::LabelPosition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in defaults. Every key a renderer reads with a non-empty default
/// appears here; keys that default to "unset" (`label_after`, `input_class`)
/// are simply absent.
pub const DEFAULTS: &[(&str, DefaultValue)] = &[
    ("bootstrap", DefaultValue::Flag(false)),
    ("use_grid", DefaultValue::Flag(false)),
    ("generate_id", DefaultValue::Flag(false)),
    ("form_group_wrapper", DefaultValue::Flag(true)),
    ("wrapper", DefaultValue::Flag(true)),
    ("require_form", DefaultValue::Flag(false)),
    ("label_position", DefaultValue::Text("before")),
    ("form_control_class", DefaultValue::Text("form-control")),
    ("form_group_class", DefaultValue::Text("form-group")),
    ("control_label_class", DefaultValue::Text("control-label")),
    ("label_grid_class", DefaultValue::Text("col-sm-2")),
    ("input_grid_class", DefaultValue::Text("col-sm-10")),
    ("offset_input_grid_class", DefaultValue::Text("col-sm-offset-2")),
    ("form_direction_class", DefaultValue::Text("form-horizontal")),
    ("error_class", DefaultValue::Text("help-block")),
    ("has_error_class", DefaultValue::Text("has-error")),
    ("input_group_class", DefaultValue::Text("input-group")),
    ("input_group_addon_class", DefaultValue::Text("input-group-addon")),
];

/// A built-in default value.
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    Flag(bool),
    Text(&'static str),
}

impl From<DefaultValue> for OptionValue {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::Flag(b) => OptionValue::Bool(b),
            DefaultValue::Text(s) => OptionValue::Text(s.to_string()),
        }
    }
}

/// Global rendering configuration.
///
/// ```
/// use formsmith_core::domain::FormConfig;
///
/// let config = FormConfig::default()
///     .with("bootstrap", true)
///     .with("use-grid", true);
///
/// assert!(config.flag("bootstrap"));
/// assert!(config.flag("use_grid"));
/// assert_eq!(config.text("form_control_class"), Some("form-control"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Options", into = "Options")]
pub struct FormConfig {
    values: Options,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            values: DEFAULTS.iter().map(|(k, v)| (*k, OptionValue::from(*v))).collect(),
        }
    }
}

impl From<Options> for FormConfig {
    /// Overrides on top of the defaults.
    fn from(overrides: Options) -> Self {
        let mut config = FormConfig::default();
        config.values.merge(&overrides);
        config
    }
}

impl From<FormConfig> for Options {
    fn from(config: FormConfig) -> Self {
        config.values
    }
}

impl FormConfig {
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.values.set(key, value);
    }

    /// Drop an override. Keys with a built-in default return to it.
    pub fn unset(&mut self, key: &str) {
        self.values.remove(key);
        if let Some((_, default)) = DEFAULTS
            .iter()
            .find(|(k, _)| *k == canonical_key(key))
        {
            self.values.set(key, *default);
        }
    }

    /// Restore every built-in default and drop all overrides.
    pub fn reset(&mut self) {
        *self = FormConfig::default();
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Flag value; non-boolean values use their truthiness, absent is false.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.text(key)
    }

    pub fn options(&self) -> &Options {
        &self.values
    }

    /// Parse and validate a textual override, as given on a command line or
    /// in an environment variable.
    pub fn set_from_str(&mut self, key: &str, raw: &str) -> Result<(), DomainError> {
        let value = OptionValue::parse_loose(raw);
        validate(key, &value)?;
        self.set(key, value);
        Ok(())
    }

    /// Check every stored value against the shape its default implies.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.values.iter().try_for_each(|(k, v)| validate(k, v))
    }
}

fn validate(key: &str, value: &OptionValue) -> Result<(), DomainError> {
    let key = canonical_key(key);
    if key == "label_position" {
        let raw = value.as_text().ok_or_else(|| DomainError::InvalidOption {
            key: key.clone(),
            reason: "expected `before` or `after`".into(),
        })?;
        raw.parse::<LabelPosition>()?;
        return Ok(());
    }
    match DEFAULTS.iter().find(|(k, _)| *k == key) {
        Some((_, DefaultValue::Flag(_))) if value.as_bool().is_none() => Err(DomainError::InvalidOption {
            key,
            reason: format!("expected true or false, got '{value}'"),
        }),
        Some((_, DefaultValue::Text(_))) if value.as_text().is_none() => Err(DomainError::InvalidOption {
            key,
            reason: format!("expected a string, got '{value}'"),
        }),
        _ => Ok(()),
    }
}

/// Options in effect for one render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    values: Options,
}

/// Overlay global configuration, form-level options and call options.
///
/// Later layers win, including an explicit `false`. Keys absent from every
/// layer fall through to the built-in defaults already present in `global`.
pub fn resolve(global: &FormConfig, form: Option<&Options>, call: &Options) -> EffectiveOptions {
    let mut values = global.options().clone();
    if let Some(form) = form {
        values.merge(form);
    }
    values.merge(call);
    EffectiveOptions { values }
}

impl EffectiveOptions {
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains(key)
    }

    /// Feature flag: truthy value on, anything else (including absent) off.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// Non-empty text value.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.values.text(key).filter(|s| !s.is_empty())
    }

    pub fn map(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.values.map(key)
    }

    pub fn bootstrap(&self) -> bool {
        self.flag("bootstrap")
    }

    /// Grid layout only applies on top of bootstrap markup.
    pub fn grid(&self) -> bool {
        self.bootstrap() && self.flag("use_grid")
    }

    pub fn generate_id(&self) -> bool {
        self.flag("generate_id")
    }

    /// Both wrapper switches must be on for the outer group block.
    pub fn form_group_wrapper(&self) -> bool {
        self.flag("wrapper") && self.flag("form_group_wrapper")
    }

    pub fn wrapper(&self) -> bool {
        self.flag("wrapper")
    }

    pub fn label_position(&self) -> LabelPosition {
        self.text("label_position")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn options(&self) -> &Options {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let config = FormConfig::default();
        assert!(!config.flag("bootstrap"));
        assert!(!config.flag("use_grid"));
        assert!(!config.flag("generate_id"));
        assert!(config.flag("form_group_wrapper"));
        assert!(config.flag("wrapper"));
        assert!(config.get("label_after").is_none());
        assert_eq!(config.text("offset_input_grid_class"), Some("col-sm-offset-2"));
        assert_eq!(config.text("error_class"), Some("help-block"));
    }

    #[test]
    fn call_layer_beats_form_layer_beats_global() {
        let global = FormConfig::default().with("bootstrap", true).with("class", "g");
        let form = Options::new().with("bootstrap", false).with("wrapper", false);
        let call = Options::new().with("wrapper", true);

        let eff = resolve(&global, Some(&form), &call);
        assert!(!eff.bootstrap());
        assert!(eff.wrapper());
        assert_eq!(eff.text("class"), Some("g"));
    }

    #[test]
    fn explicit_false_overrides_true_default() {
        let eff = resolve(
            &FormConfig::default(),
            None,
            &Options::new().with("form-group-wrapper", false),
        );
        assert!(!eff.form_group_wrapper());
        assert!(eff.wrapper());
    }

    #[test]
    fn grid_requires_bootstrap() {
        let global = FormConfig::default().with("use-grid", true);
        assert!(!resolve(&global, None, &Options::new()).grid());

        let global = global.with("bootstrap", true);
        assert!(resolve(&global, None, &Options::new()).grid());
    }

    #[test]
    fn unset_restores_default() {
        let mut config = FormConfig::default().with("form_group_class", "x");
        config.unset("form-group-class");
        assert_eq!(config.text("form_group_class"), Some("form-group"));

        config.set("label_after", ":");
        config.unset("label_after");
        assert!(config.get("label_after").is_none());
    }

    #[test]
    fn set_from_str_validates_shape() {
        let mut config = FormConfig::default();
        config.set_from_str("bootstrap", "true").unwrap();
        assert!(config.flag("bootstrap"));

        assert!(config.set_from_str("bootstrap", "yes please").is_err());
        assert!(config.set_from_str("label_position", "sideways").is_err());
        assert!(config.set_from_str("label_after", "*").is_ok());
    }

    #[test]
    fn deserializes_overrides_on_top_of_defaults() {
        let config: FormConfig = serde_json::from_str(r#"{"use-grid": true}"#).unwrap();
        assert!(config.flag("use_grid"));
        assert_eq!(config.text("form_group_class"), Some("form-group"));
    }

    #[test]
    fn label_position_falls_back_to_before() {
        let eff = resolve(
            &FormConfig::default(),
            None,
            &Options::new().with("label_position", "diagonal"),
        );
        assert_eq!(eff.label_position(), LabelPosition::Before);
    }
}
