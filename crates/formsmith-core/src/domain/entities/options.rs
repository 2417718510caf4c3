//! Option bags passed to form and input calls.
//!
//! Options are a flat, ordered map of canonical keys to [`OptionValue`]s.
//! Keys are canonicalised on the way in (`use-grid` and `use_grid` address
//! the same entry), so callers may use whichever spelling reads best.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical spelling of an option key: hyphens become underscores.
pub fn canonical_key(key: &str) -> String {
    key.trim().replace('-', "_")
}

/// A single option value.
///
/// Booleans toggle features and attributes, text carries class names, ids,
/// messages and URLs, maps carry passthrough attributes (`attrs`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
    Map(BTreeMap<String, String>),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Truthiness used for feature flags.
    ///
    /// `false` and the empty string are off; any other text or map is on.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
            Self::Map(m) => !m.is_empty(),
        }
    }

    /// Parse a command-line style value: `true`/`false` become booleans,
    /// anything else stays text.
    pub fn parse_loose(raw: &str) -> Self {
        match raw.trim() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Map(m) => {
                let pairs: Vec<String> = m.iter().map(|(k, v)| format!("{k}={v}")).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// An ordered set of options keyed by canonical name.
///
/// ```
/// use formsmith_core::domain::Options;
///
/// let opts = Options::new()
///     .with("form-control-class", "custom")
///     .with("required", true)
///     .attr("data-role", "search");
///
/// assert_eq!(opts.text("form_control_class"), Some("custom"));
/// assert_eq!(opts.flag("required"), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, OptionValue>", into = "BTreeMap<String, OptionValue>")]
pub struct Options {
    entries: BTreeMap<String, OptionValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style insert of a single passthrough attribute into `attrs`.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        let mut attrs = self.map("attrs").cloned().unwrap_or_default();
        attrs.insert(name.to_string(), value.to_string());
        self.entries.insert("attrs".into(), OptionValue::Map(attrs));
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        self.entries.insert(canonical_key(key), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.entries.remove(&canonical_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(&canonical_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Boolean value, only when the key holds a boolean.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_text)
    }

    pub fn map(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.get(key).and_then(OptionValue::as_map)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: &Options) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Copy without the given keys.
    pub fn without(&self, keys: &[&str]) -> Options {
        let dropped: Vec<String> = keys.iter().map(|k| canonical_key(k)).collect();
        Options {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| !dropped.contains(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, OptionValue>> for Options {
    fn from(map: BTreeMap<String, OptionValue>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(k, v)| (canonical_key(&k), v))
                .collect(),
        }
    }
}

impl From<Options> for BTreeMap<String, OptionValue> {
    fn from(options: Options) -> Self {
        options.entries
    }
}

impl<K: AsRef<str>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (k, v) in iter {
            options.set(k.as_ref(), v);
        }
        options
    }
}
