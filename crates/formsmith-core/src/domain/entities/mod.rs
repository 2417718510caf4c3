//! Domain entities: option bags, the open form, routes, field descriptors.

pub mod field;
pub mod form_context;
pub mod options;
pub mod route;

pub use field::FieldDescriptor;
pub use form_context::{BoundEntity, FORM_ONLY_KEYS, FormContext};
pub use options::{OptionValue, Options, canonical_key};
pub use route::{ResolvedRoute, RouteEntry};
