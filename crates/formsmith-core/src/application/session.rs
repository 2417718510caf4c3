//! Per-session stack of open forms.
//!
//! Owned by one `FormBuilder`, which is itself confined to one rendering
//! session; nothing here is shared across threads.

use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::FormContext;

#[derive(Debug, Default)]
pub struct FormStateStack {
    frames: Vec<FormContext>,
}

impl FormStateStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a newly opened form. Opening inside another form is allowed but
    /// logged, since HTML does not permit nested forms.
    pub fn open(&mut self, context: FormContext) {
        if let Some(outer) = self.frames.last() {
            warn!(
                outer = %outer.url,
                inner = %context.url,
                depth = self.frames.len() + 1,
                "Opening a form while another is still open"
            );
        }
        self.frames.push(context);
        debug!(depth = self.frames.len(), "Form context opened");
    }

    pub fn current(&self) -> Option<&FormContext> {
        self.frames.last()
    }

    /// Pop the innermost form.
    pub fn close(&mut self) -> Result<FormContext, ApplicationError> {
        let context = self
            .frames
            .pop()
            .ok_or(ApplicationError::NoActiveFormContext {
                operation: "close_form",
            })?;
        debug!(depth = self.frames.len(), "Form context closed");
        Ok(context)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop every open form.
    pub fn clear(&mut self) {
        if !self.frames.is_empty() {
            debug!(dropped = self.frames.len(), "Clearing open form contexts");
        }
        self.frames.clear();
    }
}
