//! Application services.
//!
//! - `FormBuilder`: the rendering API (forms, inputs, typed variants)
//! - `FormScope`: guard that closes a form on drop
//! - `RouteResolver`: form target → URL and method

pub mod form_builder;
pub mod route_resolver;
pub mod scope;

pub use form_builder::FormBuilder;
pub use route_resolver::RouteResolver;
pub use scope::FormScope;
