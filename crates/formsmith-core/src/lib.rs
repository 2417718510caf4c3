//! formsmith core - server-side HTML form building.
//!
//! Provides the domain and application layers: option resolution, id
//! derivation, HTTP method spoofing, CSRF fields, Bootstrap-style markup and
//! the form-state stack, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          formsmith-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (FormBuilder, FormScope, Resolver)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Router, CsrfTokenProvider, Bag)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    formsmith-adapters (Infrastructure)  │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): config, identifier, markup, validation
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formsmith_core::prelude::*;
//!
//! let mut forms = FormBuilder::new(FormConfig::default(), router, csrf, errors);
//!
//! let mut html = forms.open_form("users.update", Some(BoundEntity::of(&user)), &Options::new());
//! html += &forms.email("email", Some("Email"), &Options::new().with("required", true))?;
//! html += &forms.close_form()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormBuilder, FormScope,
        ports::{CsrfTokenProvider, ErrorBag, Router},
    };
    pub use crate::domain::{
        BoundEntity, FormConfig, HttpMethod, InputType, OptionValue, Options, RouteEntry,
    };
    pub use crate::error::{FormResult, FormsmithError};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
