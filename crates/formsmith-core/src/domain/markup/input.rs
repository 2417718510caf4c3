//! Input control markup.
//!
//! Normal mode nests, outermost first:
//!
//! ```text
//! div.form-group            (wrapper && form_group_wrapper)
//!   label                   (unless suppressed; before or after the column)
//!   div.col                 (wrapper && (grid || wrapper_class))
//!     div.input-group       (input-group options, wrapper only)
//!       span.addon? input span.addon?
//!     span.help-block*      (selected errors)
//! ```
//!
//! Only-input mode is the bare `<input>`. Hidden fields are always bare.

use super::html::{ClassList, Tag, close};
use crate::domain::config::EffectiveOptions;
use crate::domain::entities::FieldDescriptor;
use crate::domain::value_objects::{InputType, LabelPosition};

/// Render a field according to the effective options.
pub fn render_input(field: &FieldDescriptor, opts: &EffectiveOptions) -> String {
    if opts.flag("only_input") || field.input_type == InputType::Hidden.as_str() {
        return control(field, opts);
    }

    let grid = opts.grid();
    let bootstrap = opts.bootstrap();

    let mut out = String::new();

    let group_wrapper = opts.form_group_wrapper();
    if group_wrapper {
        let mut classes = ClassList::new();
        classes
            .push_if(bootstrap, opts.text("form_group_class"))
            .push_if(bootstrap && field.has_errors(), opts.text("has_error_class"))
            .push_opt(opts.text("form_group_wrapper_class"));
        out.push_str(&Tag::new("div").class(&classes).open());
    }

    let label_html = field.label.as_deref().map(|text| label(field, text, opts));
    if field.label_position == LabelPosition::Before {
        if let Some(html) = &label_html {
            out.push_str(html);
        }
    }

    let wrapper_class = opts.text("wrapper_class");
    let column = opts.wrapper() && (grid || wrapper_class.is_some());
    if column {
        let mut classes = ClassList::new();
        classes
            .push_if(grid, opts.text("input_grid_class"))
            .push_if(grid && field.label.is_none(), opts.text("offset_input_grid_class"))
            .push_opt(wrapper_class);
        out.push_str(&Tag::new("div").class(&classes).open());
    }

    out.push_str(&grouped_control(field, opts));

    let error_classes = {
        let mut classes = ClassList::new();
        classes.push_opt(opts.text("error_class"));
        classes
    };
    for message in &field.errors {
        out.push_str(&Tag::new("span").class(&error_classes).text(message));
    }

    if column {
        out.push_str(&close("div"));
    }

    if field.label_position == LabelPosition::After {
        if let Some(html) = &label_html {
            out.push_str(html);
        }
    }

    if group_wrapper {
        out.push_str(&close("div"));
    }

    out
}

fn label(field: &FieldDescriptor, text: &str, opts: &EffectiveOptions) -> String {
    let mut classes = ClassList::new();
    classes
        .push_if(opts.bootstrap(), opts.text("control_label_class"))
        .push_if(opts.grid(), opts.text("label_grid_class"))
        .push_opt(opts.text("label_class"));

    let mut content = text.to_string();
    if let Some(after) = &field.label_after {
        content.push_str(after);
    }

    Tag::new("label")
        .attr_opt("for", field.id.as_deref())
        .class(&classes)
        .text(&content)
}

fn grouped_control(field: &FieldDescriptor, opts: &EffectiveOptions) -> String {
    let control = control(field, opts);
    if !field.has_input_group() {
        return control;
    }

    let mut addon_classes = ClassList::new();
    addon_classes.push_opt(opts.text("input_group_addon_class"));
    let addon = |text: &str| Tag::new("span").class(&addon_classes).text(text);

    let mut inner = String::new();
    if let Some(before) = &field.input_group_before {
        inner.push_str(&addon(before));
    }
    inner.push_str(&control);
    if let Some(after) = &field.input_group_after {
        inner.push_str(&addon(after));
    }

    if opts.wrapper() {
        let mut classes = ClassList::new();
        classes.push_opt(opts.text("input_group_class"));
        Tag::new("div").class(&classes).wrap(&inner)
    } else {
        inner
    }
}

fn control(field: &FieldDescriptor, opts: &EffectiveOptions) -> String {
    let mut classes = ClassList::new();
    classes
        .push_opt(opts.text("input_class"))
        .push_if(opts.bootstrap(), opts.text("form_control_class"))
        .push_opt(opts.text("class"));

    Tag::new("input")
        .attr("type", &field.input_type)
        .attr("name", &field.name)
        .attr_opt("id", field.id.as_deref())
        .class(&classes)
        .attr_opt("value", field.value.as_deref())
        .attr_opt("placeholder", field.placeholder.as_deref())
        .flag("required", field.required)
        .flag("readonly", field.readonly)
        .flag("disabled", field.disabled)
        .flag("autofocus", field.autofocus)
        .attrs(&field.attrs)
        .open()
}
