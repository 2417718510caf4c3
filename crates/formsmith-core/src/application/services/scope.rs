//! Scoped form rendering.

use std::ops::Deref;

use crate::{application::services::FormBuilder, error::FormResult};

/// An open form that is closed when the guard goes away.
///
/// Derefs to the builder, so every input method is available on the scope.
///
/// ```rust,no_run
/// # use formsmith_core::{application::FormBuilder, domain::Options};
/// # fn render(builder: &mut FormBuilder) -> formsmith_core::error::FormResult<String> {
/// let scope = builder.form("users.update", None, &Options::new());
/// let mut html = scope.opening().to_string();
/// html.push_str(&scope.email("email", Some("Email"), &Options::new())?);
/// html.push_str(&scope.close()?);
/// # Ok(html)
/// # }
/// ```
pub struct FormScope<'a> {
    builder: &'a mut FormBuilder,
    opening: String,
    closed: bool,
}

impl<'a> FormScope<'a> {
    pub(crate) fn new(builder: &'a mut FormBuilder, opening: String) -> Self {
        Self {
            builder,
            opening,
            closed: false,
        }
    }

    /// Markup returned when the form was opened.
    pub fn opening(&self) -> &str {
        &self.opening
    }

    /// Close the form and return `</form>`.
    pub fn close(mut self) -> FormResult<String> {
        self.closed = true;
        self.builder.close_form()
    }
}

impl Deref for FormScope<'_> {
    type Target = FormBuilder;

    fn deref(&self) -> &FormBuilder {
        &*self.builder
    }
}

impl Drop for FormScope<'_> {
    fn drop(&mut self) {
        if !self.closed {
            self.builder.discard_form();
        }
    }
}
