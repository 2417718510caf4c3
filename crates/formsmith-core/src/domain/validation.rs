//! Validation-error selection.
//!
//! The error bag itself is an application port; this module only decides
//! which of its messages, if any, a field displays.

use crate::domain::config::EffectiveOptions;
use crate::domain::entities::OptionValue;
use crate::domain::entities::form_context::field_path;

/// How a field's errors are chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Read the bag; show only the first message unless `all` is set.
    Bag { all: bool },
    /// `error: "..."` forces a literal message, ignoring the bag.
    Literal(String),
    /// `error: false` hides errors even when the bag has some.
    Suppressed,
}

impl ErrorPolicy {
    pub fn from_options(opts: &EffectiveOptions) -> Self {
        match opts.get("error") {
            Some(OptionValue::Bool(false)) => Self::Suppressed,
            Some(OptionValue::Text(message)) if !message.is_empty() => {
                Self::Literal(message.clone())
            }
            _ => Self::Bag {
                all: opts.flag("all_errors"),
            },
        }
    }

    pub fn reads_bag(&self) -> bool {
        matches!(self, Self::Bag { .. })
    }

    /// Apply the policy to the messages the bag holds for a field.
    pub fn select(&self, bag_messages: Vec<String>) -> Vec<String> {
        match self {
            Self::Suppressed => Vec::new(),
            Self::Literal(message) => vec![message.clone()],
            Self::Bag { all: true } => bag_messages,
            Self::Bag { all: false } => bag_messages.into_iter().take(1).collect(),
        }
    }
}

/// Key an error bag stores a field's messages under.
///
/// Bracketed names use dot notation: `user[address][city]` → `user.address.city`.
pub fn bag_key(field_name: &str) -> String {
    field_path(field_name).collect::<Vec<_>>().join(".")
}
