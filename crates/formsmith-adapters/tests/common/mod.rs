//! Shared fixtures for adapter-backed rendering tests.

#![allow(dead_code)]

use formsmith_adapters::{InMemoryRouter, MemoryErrorBag, StaticCsrfToken};
use formsmith_core::{
    application::FormBuilder,
    domain::{BoundEntity, FormConfig, HttpMethod},
};
use serde::Serialize;

#[derive(Serialize, Default)]
pub struct TestEntity {
    #[serde(rename = "testName")]
    pub test_name: String,
}

pub fn entity() -> Option<BoundEntity> {
    Some(BoundEntity::of(&TestEntity::default()))
}

pub fn router() -> InMemoryRouter {
    InMemoryRouter::builder()
        .base_url("http://test.loc")
        .current_url("/")
        .route("putRouteName", "/put-url", HttpMethod::Put)
        .route("deleteRouteName", "/delete-url", HttpMethod::Delete)
        .route("getRouteName", "/get-url", HttpMethod::Get)
        .action(
            "TestController@getWithoutRouteName",
            "/get-url-without-route-name",
        )
        .action(
            "TestController@postWithoutRouteName",
            "/post-url-without-route-name",
        )
        .build()
}

pub fn builder() -> FormBuilder {
    builder_with_errors(MemoryErrorBag::new())
}

pub fn builder_with_errors(errors: MemoryErrorBag) -> FormBuilder {
    FormBuilder::new(
        FormConfig::default(),
        Box::new(router()),
        Box::new(StaticCsrfToken::new("test-token")),
        Box::new(errors),
    )
}
