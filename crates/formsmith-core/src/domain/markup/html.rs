//! Minimal HTML element builder.
//!
//! Only what the form and input renderers need: opening tags with escaped
//! attributes, boolean attributes, class lists and text wrapping. Attribute
//! order is the insertion order so output stays deterministic.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Escape text content.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape a value placed inside double quotes.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Attribute names that would break out of the tag are rejected.
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

/// Space-separated, de-duplicated list of CSS classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every whitespace-separated class in `classes`.
    pub fn push(&mut self, classes: &str) -> &mut Self {
        for class in classes.split_whitespace() {
            if !self.0.iter().any(|c| c == class) {
                self.0.push(class.to_string());
            }
        }
        self
    }

    pub fn push_opt(&mut self, classes: Option<&str>) -> &mut Self {
        if let Some(classes) = classes {
            self.push(classes);
        }
        self
    }

    pub fn push_if(&mut self, condition: bool, classes: Option<&str>) -> &mut Self {
        if condition {
            self.push_opt(classes);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// An element under construction.
#[derive(Debug, Clone)]
pub struct Tag {
    name: &'static str,
    /// `None` values are boolean attributes.
    attrs: Vec<(String, Option<String>)>,
}

impl Tag {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: impl AsRef<str>) -> Self {
        self.set(name, Some(value.as_ref().to_string()));
        self
    }

    pub fn attr_opt(self, name: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Boolean attribute, present only when `on`.
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.set(name, None);
        }
        self
    }

    /// `class` attribute, omitted when the list is empty.
    pub fn class(self, classes: &ClassList) -> Self {
        if classes.is_empty() {
            self
        } else {
            let joined = classes.to_string();
            self.attr("class", joined)
        }
    }

    /// Passthrough attributes. Names that are not valid HTML attribute names
    /// are skipped.
    pub fn attrs(mut self, extra: &BTreeMap<String, String>) -> Self {
        for (name, value) in extra {
            if is_valid_attr_name(name) {
                self.set(name, Some(value.clone()));
            } else {
                tracing::debug!(attribute = %name, "Skipping invalid attribute name");
            }
        }
        self
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    /// `<name attr="...">`
    pub fn open(&self) -> String {
        let mut out = String::with_capacity(16 + self.attrs.len() * 16);
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
        }
        out.push('>');
        out
    }

    /// Opening tag, raw inner markup, closing tag.
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{}{}", self.open(), inner, close(self.name))
    }

    /// Opening tag, escaped text, closing tag.
    pub fn text(&self, text: &str) -> String {
        self.wrap(&escape_text(text))
    }
}

pub fn close(name: &str) -> String {
    format!("</{name}>")
}
