//! The currently open form and the entity bound to it.

use crate::domain::entities::options::Options;
use crate::domain::entities::route::ResolvedRoute;
use crate::domain::identifier;
use crate::domain::value_objects::HttpMethod;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// Keys that configure the `<form>` tag itself and are never inherited by
/// the inputs rendered inside it.
pub const FORM_ONLY_KEYS: [&str; 9] = [
    "method",
    "url",
    "id",
    "class",
    "absolute",
    "attrs",
    "enctype",
    "has_files",
    "form_direction_class",
];

/// Snapshot of the data object a form is bound to.
///
/// Only the type name (for ids) and a JSON view of the fields (for default
/// values) are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundEntity {
    pub type_name: String,
    pub values: Value,
}

impl BoundEntity {
    /// Capture any serializable value.
    ///
    /// Serialization failures are not fatal: the entity still contributes its
    /// type name to ids, it just supplies no values.
    pub fn of<E: Serialize>(entity: &E) -> Self {
        let values = serde_json::to_value(entity).unwrap_or_else(|err| {
            warn!(
                entity = std::any::type_name::<E>(),
                error = %err,
                "Bound entity could not be serialized; values will not be inserted"
            );
            Value::Null
        });
        Self {
            type_name: std::any::type_name::<E>().to_string(),
            values,
        }
    }

    /// An entity known only by name, with no values.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            values: Value::Null,
        }
    }

    pub fn with_values(mut self, values: Value) -> Self {
        self.values = values;
        self
    }

    pub fn simple_name(&self) -> &str {
        identifier::simple_type_name(&self.type_name)
    }

    /// Scalar value of a field, rendered as attribute text.
    ///
    /// Bracketed names walk nested objects: `address[city]` reads
    /// `values.address.city`. Arrays, objects and nulls yield nothing.
    pub fn value_of(&self, field: &str) -> Option<String> {
        let mut node = &self.values;
        for segment in field_path(field) {
            node = node.get(segment)?;
        }
        match node {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

/// Split `a[b][c]` into `["a", "b", "c"]`. Empty brackets are dropped.
pub fn field_path(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(['[', ']'])
        .filter(|segment| !segment.is_empty())
}

/// State of one open form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormContext {
    pub controller_action: Option<String>,
    pub entity: Option<BoundEntity>,
    pub method: HttpMethod,
    pub url: String,
    /// Options given when the form was opened, minus [`FORM_ONLY_KEYS`].
    pub inherited: Options,
}

impl FormContext {
    pub fn new(route: ResolvedRoute, entity: Option<BoundEntity>, form_options: &Options) -> Self {
        Self {
            controller_action: route.controller_action,
            entity,
            method: route.method,
            url: route.url,
            inherited: form_options.without(&FORM_ONLY_KEYS),
        }
    }

    pub fn entity_type_name(&self) -> Option<&str> {
        self.entity.as_ref().map(|e| e.type_name.as_str())
    }

    /// Derived form id; `None` when the form has no id basis.
    pub fn derived_id(&self) -> Option<String> {
        identifier::derive_form_id(self.controller_action.as_deref(), self.entity_type_name())
    }

    /// Derived id for a field of this form.
    pub fn derived_field_id(&self, field_name: &str) -> Option<String> {
        identifier::derive_field_id(self.derived_id().as_deref(), field_name)
    }

    pub fn entity_value(&self, field_name: &str) -> Option<String> {
        self.entity.as_ref()?.value_of(field_name)
    }
}
