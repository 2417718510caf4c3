use crate::domain::value_objects::LabelPosition;
use std::collections::BTreeMap;

/// Everything the input renderer needs to know about one control.
///
/// Built fresh for each `input(...)` call from the effective options and the
/// open form; never retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Label text; `None` renders no `<label>`.
    pub label: Option<String>,
    /// Value of the `type` attribute.
    pub input_type: String,
    pub id: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
    pub readonly: bool,
    pub disabled: bool,
    pub autofocus: bool,
    /// Passthrough attributes, emitted after the known ones.
    pub attrs: BTreeMap<String, String>,
    pub errors: Vec<String>,
    pub label_position: LabelPosition,
    /// Text appended inside the label after the label text.
    pub label_after: Option<String>,
    pub input_group_before: Option<String>,
    pub input_group_after: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, input_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_type: input_type.into(),
            ..Self::default()
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_input_group(&self) -> bool {
        self.input_group_before.is_some() || self.input_group_after.is_some()
    }
}
