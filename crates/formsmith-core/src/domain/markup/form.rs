//! `<form>` opening and closing markup.

use super::html::{ClassList, Tag, close};
use crate::domain::config::EffectiveOptions;
use crate::domain::value_objects::HttpMethod;

/// Name of the hidden CSRF field.
pub const CSRF_FIELD: &str = "_token";
/// Name of the hidden method-spoofing field.
pub const METHOD_FIELD: &str = "_method";

const MULTIPART: &str = "multipart/form-data";

/// Inputs to the form tag that are not plain options.
#[derive(Debug, Clone, Copy)]
pub struct FormTag<'a> {
    pub method: &'a HttpMethod,
    pub action: &'a str,
    pub id: Option<&'a str>,
    /// Token for the `_token` field. Only read when the method needs one.
    pub csrf_token: Option<&'a str>,
}

/// Opening tag followed by the hidden CSRF and `_method` fields the method
/// calls for.
pub fn open_form(tag: &FormTag<'_>, opts: &EffectiveOptions) -> String {
    let mut classes = ClassList::new();
    classes
        .push_opt(opts.text("class"))
        .push_if(opts.grid(), opts.text("form_direction_class"));

    let enctype = opts
        .text("enctype")
        .or_else(|| opts.flag("has_files").then_some(MULTIPART));

    let mut form = Tag::new("form")
        .attr("method", tag.method.form_method())
        .attr("action", tag.action)
        .attr_opt("id", tag.id)
        .class(&classes)
        .attr_opt("enctype", enctype);
    if let Some(attrs) = opts.map("attrs") {
        form = form.attrs(attrs);
    }

    let mut out = form.open();
    if tag.method.requires_csrf() {
        out.push_str(&hidden(CSRF_FIELD, tag.csrf_token.unwrap_or_default()));
    }
    if tag.method.requires_spoofing() {
        out.push_str(&hidden(METHOD_FIELD, tag.method.as_str()));
    }
    out
}

pub fn close_form() -> String {
    close("form")
}

fn hidden(name: &str, value: &str) -> String {
    Tag::new("input")
        .attr("type", "hidden")
        .attr("name", name)
        .attr("value", value)
        .open()
}
