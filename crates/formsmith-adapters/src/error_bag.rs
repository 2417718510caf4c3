//! Validation message store.

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

use serde::Deserialize;
use tracing::debug;

use formsmith_core::{
    application::{ApplicationError, ports::ErrorBag},
    domain::bag_key,
    error::FormResult,
};

/// In-memory error bag keyed by dotted field path.
///
/// Field names may be given in either bracket (`address[city]`) or dotted
/// (`address.city`) form; both land under the dotted key.
#[derive(Debug, Clone, Default)]
pub struct MemoryErrorBag {
    messages: Arc<RwLock<BTreeMap<String, Vec<String>>>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Messages {
    One(String),
    Many(Vec<String>),
}

impl MemoryErrorBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`add`](Self::add) for test fixtures.
    pub fn with(self, field: &str, message: impl Into<String>) -> Self {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(bag_key(field))
            .or_default()
            .push(message.into());
        self
    }

    /// Append a message for `field`.
    pub fn add(&self, field: &str, message: impl Into<String>) -> FormResult<()> {
        let mut messages = self
            .messages
            .write()
            .map_err(|_| ApplicationError::StateLock)?;
        messages
            .entry(bag_key(field))
            .or_default()
            .push(message.into());
        Ok(())
    }

    pub fn clear(&self) -> FormResult<()> {
        self.messages
            .write()
            .map_err(|_| ApplicationError::StateLock)?
            .clear();
        Ok(())
    }

    /// Load messages from a JSON object whose values are a message or a list
    /// of messages.
    ///
    /// ```
    /// use formsmith_adapters::MemoryErrorBag;
    /// use formsmith_core::application::ports::ErrorBag;
    ///
    /// let bag = MemoryErrorBag::from_json(r#"{"email": ["taken"], "address[city]": "required"}"#).unwrap();
    /// assert_eq!(bag.errors_for("address.city"), vec!["required"]);
    /// ```
    pub fn from_json(raw: &str) -> FormResult<Self> {
        let parsed: BTreeMap<String, Messages> =
            serde_json::from_str(raw).map_err(|e| ApplicationError::AdapterFailure {
                adapter: "error bag",
                reason: format!("invalid JSON: {e}"),
            })?;

        let mut messages: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (field, value) in parsed {
            let entry = messages.entry(bag_key(&field)).or_default();
            match value {
                Messages::One(message) => entry.push(message),
                Messages::Many(list) => entry.extend(list),
            }
        }
        debug!(fields = messages.len(), "Loaded error bag");

        Ok(Self {
            messages: Arc::new(RwLock::new(messages)),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl ErrorBag for MemoryErrorBag {
    fn errors_for(&self, key: &str) -> Vec<String> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&bag_key(key))
            .cloned()
            .unwrap_or_default()
    }
}
