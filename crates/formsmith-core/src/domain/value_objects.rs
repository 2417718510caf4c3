//! Domain value objects: HttpMethod, InputType, LabelPosition.
//!
//! # Design
//!
//! Pure value types with equality-by-value and no identity. Each has an
//! `as_str` form (what ends up in markup) and a `FromStr` parser (what users
//! type). The method decision table lives on [`HttpMethod`] itself so the
//! form renderer and the route resolver read it from one place.

use crate::domain::error::DomainError;
use crate::domain::identifier::kebab_case;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── HttpMethod ───────────────────────────────────────────────────────────────

/// The HTTP verb a form is meant to reach.
///
/// HTML forms can only submit GET or POST, so every other verb is sent as
/// POST with a `_method` hidden field carrying the real one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
    /// Any other token (e.g. `OPTIONS`, `PURGE`), stored uppercased.
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Other(verb) => verb,
        }
    }

    /// Value of the `<form method="...">` attribute.
    pub fn form_method(&self) -> &'static str {
        match self {
            Self::Get => "get",
            _ => "post",
        }
    }

    /// Whether a `_method` hidden field must carry the real verb.
    pub fn requires_spoofing(&self) -> bool {
        !matches!(self, Self::Get | Self::Post)
    }

    /// Whether a `_token` hidden field must be emitted.
    pub fn requires_csrf(&self) -> bool {
        !matches!(self, Self::Get)
    }

    /// Infer the verb from a controller action name.
    ///
    /// Actions starting with a lowercase `get` are read-only; everything else
    /// posts. The check is case-sensitive: `GetReport` posts.
    pub fn infer_from_action(action: &str) -> Self {
        if action.starts_with("get") {
            Self::Get
        } else {
            Self::Post
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidMethod(s.to_string()));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

// ── InputType ────────────────────────────────────────────────────────────────

/// Control types with a dedicated convenience method on the form builder.
///
/// To add a type: add the variant, its `as_str` arm, and an entry in `ALL`.
/// Parsing goes through the table, so nothing else changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    #[default]
    Text,
    Password,
    File,
    Hidden,
    Color,
    Date,
    Datetime,
    DatetimeLocal,
    Email,
    Number,
    Range,
    Search,
    Tel,
    Time,
    Url,
    Month,
    Week,
}

impl InputType {
    pub const ALL: [InputType; 17] = [
        Self::Text,
        Self::Password,
        Self::File,
        Self::Hidden,
        Self::Color,
        Self::Date,
        Self::Datetime,
        Self::DatetimeLocal,
        Self::Email,
        Self::Number,
        Self::Range,
        Self::Search,
        Self::Tel,
        Self::Time,
        Self::Url,
        Self::Month,
        Self::Week,
    ];

    /// Value of the `type` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::File => "file",
            Self::Hidden => "hidden",
            Self::Color => "color",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::DatetimeLocal => "datetime-local",
            Self::Email => "email",
            Self::Number => "number",
            Self::Range => "range",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Time => "time",
            Self::Url => "url",
            Self::Month => "month",
            Self::Week => "week",
        }
    }

    /// Controls that must never be pre-filled from a bound entity.
    pub const fn accepts_value(&self) -> bool {
        !matches!(self, Self::Password | Self::File)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = DomainError;

    /// Accepts both the attribute spelling (`datetime-local`) and the method
    /// spelling (`datetimeLocal`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = kebab_case(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownInputType(s.to_string()))
    }
}

// ── LabelPosition ────────────────────────────────────────────────────────────

/// Where the `<label>` goes relative to its control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Before,
    After,
}

impl LabelPosition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelPosition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "before" => Ok(Self::Before),
            "after" => Ok(Self::After),
            other => Err(DomainError::InvalidLabelPosition(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parsing_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("GET".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("put".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn unusual_verbs_are_kept_uppercased() {
        let method = "purge".parse::<HttpMethod>().unwrap();
        assert_eq!(method, HttpMethod::Other("PURGE".into()));
        assert_eq!(method.as_str(), "PURGE");
    }

    #[test]
    fn empty_or_garbage_method_is_rejected() {
        assert!("".parse::<HttpMethod>().is_err());
        assert!("po st".parse::<HttpMethod>().is_err());
        assert!("\"><script>".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn decision_table() {
        assert_eq!(HttpMethod::Get.form_method(), "get");
        assert!(!HttpMethod::Get.requires_spoofing());
        assert!(!HttpMethod::Get.requires_csrf());

        assert_eq!(HttpMethod::Post.form_method(), "post");
        assert!(!HttpMethod::Post.requires_spoofing());
        assert!(HttpMethod::Post.requires_csrf());

        for method in [
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
            HttpMethod::Other("PURGE".into()),
        ] {
            assert_eq!(method.form_method(), "post");
            assert!(method.requires_spoofing());
            assert!(method.requires_csrf());
        }
    }

    #[test]
    fn action_prefix_inference_is_case_sensitive() {
        assert_eq!(
            HttpMethod::infer_from_action("getWithoutRouteName"),
            HttpMethod::Get
        );
        assert_eq!(
            HttpMethod::infer_from_action("postWithoutRouteName"),
            HttpMethod::Post
        );
        assert_eq!(HttpMethod::infer_from_action("GetReport"), HttpMethod::Post);
        assert_eq!(HttpMethod::infer_from_action("update"), HttpMethod::Post);
    }

    #[test]
    fn input_type_accepts_method_spelling() {
        assert_eq!(
            "datetimeLocal".parse::<InputType>().unwrap(),
            InputType::DatetimeLocal
        );
        assert_eq!(
            "datetime-local".parse::<InputType>().unwrap(),
            InputType::DatetimeLocal
        );
        assert_eq!("EMAIL".parse::<InputType>().unwrap(), InputType::Email);
        assert!("blob".parse::<InputType>().is_err());
    }

    #[test]
    fn every_input_type_round_trips_through_its_attribute() {
        for kind in InputType::ALL {
            assert_eq!(kind.as_str().parse::<InputType>().unwrap(), kind);
        }
    }

    #[test]
    fn secret_inputs_never_take_values() {
        assert!(!InputType::Password.accepts_value());
        assert!(!InputType::File.accepts_value());
        assert!(InputType::Email.accepts_value());
    }

    #[test]
    fn defaults_are_post_and_text() {
        assert_eq!(HttpMethod::default(), HttpMethod::Post);
        assert_eq!(InputType::default(), InputType::Text);
        assert_eq!(LabelPosition::default(), LabelPosition::Before);
    }

    #[test]
    fn label_position_parses() {
        assert_eq!("after".parse::<LabelPosition>().unwrap(), LabelPosition::After);
        assert!("left".parse::<LabelPosition>().is_err());
    }
}
