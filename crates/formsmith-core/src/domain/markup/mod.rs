//! HTML composition. Pure functions from descriptors and effective options to
//! strings; no ports, no state.

pub mod form;
pub mod html;
pub mod input;

pub use form::{CSRF_FIELD, FormTag, METHOD_FIELD, close_form, open_form};
pub use html::{ClassList, Tag, escape_attr, escape_text};
pub use input::render_input;
