// ============================================================================
//  DOMAIN LAYER
// ============================================================================

//! Core domain layer for formsmith.
//!
//! Pure rendering logic with no I/O. Routers, CSRF providers and error bags
//! are ports defined in the application layer; nothing here calls them.
//!
//! - **config**: defaults table and three-layer option resolution
//! - **identifier**: kebab-case ids from controller, entity and field names
//! - **value_objects**: HTTP method decision table, input types
//! - **validation**: which validation errors a field shows
//! - **markup**: form and input HTML

pub mod config;
pub mod entities;
pub mod error;
pub mod identifier;
pub mod markup;
pub mod validation;
pub mod value_objects;

pub use config::{DEFAULTS, EffectiveOptions, FormConfig, resolve};
pub use entities::{
    BoundEntity, FORM_ONLY_KEYS, FieldDescriptor, FormContext, OptionValue, Options,
    ResolvedRoute, RouteEntry, canonical_key,
};
pub use error::{DomainError, ErrorCategory};
pub use identifier::{ControllerAction, derive_field_id, derive_form_id, kebab_case};
pub use validation::{ErrorPolicy, bag_key};
pub use value_objects::{HttpMethod, InputType, LabelPosition};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module scenarios
    // ========================================================================

    #[test]
    fn input_type_names_share_the_identifier_case_rules() {
        for name in ["datetimeLocal", "DatetimeLocal", "datetime_local"] {
            assert_eq!(kebab_case(name), InputType::DatetimeLocal.as_str());
        }
    }

    #[test]
    fn form_context_ids_follow_configuration_switch() {
        let ctx = FormContext::new(
            ResolvedRoute {
                url: "/x".into(),
                method: HttpMethod::infer_from_action("getWithoutRouteName"),
                controller_action: Some("TestController@getWithoutRouteName".into()),
            },
            Some(BoundEntity::named("TestEntity")),
            &Options::new(),
        );

        let on = resolve(&FormConfig::default().with("generate_id", true), None, &Options::new());
        let off = resolve(&FormConfig::default(), None, &Options::new());

        assert_eq!(
            identifier::select_id(None, on.generate_id(), ctx.derived_id()).as_deref(),
            Some("get-without-route-name-test-entity")
        );
        assert_eq!(
            identifier::select_id(None, off.generate_id(), ctx.derived_id()),
            None
        );
    }

    #[test]
    fn method_serializes_as_verb() {
        let json = serde_json::to_string(&HttpMethod::Patch).unwrap();
        assert_eq!(json, "\"PATCH\"");
        let back: HttpMethod = serde_json::from_str("\"delete\"").unwrap();
        assert_eq!(back, HttpMethod::Delete);
    }
}
