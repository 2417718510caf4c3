//! Router adapters.

pub mod manifest;
pub mod memory;

pub use manifest::{ActionSpec, RouteManifest, RouteSpec};
pub use memory::{InMemoryRouter, InMemoryRouterBuilder};
