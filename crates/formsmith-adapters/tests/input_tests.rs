//! Input markup rendered through the real adapters.

mod common;

use std::collections::BTreeMap;

use common::{TestEntity, builder, builder_with_errors, entity};
use formsmith_adapters::MemoryErrorBag;
use formsmith_core::{
    application::FormBuilder,
    domain::{BoundEntity, InputType, OptionValue, Options},
    error::ErrorCategory,
};

const TARGET: &str = "TestController@getWithoutRouteName";
const LABEL: Option<&str> = Some("Test label");

fn none() -> Options {
    Options::new()
}

fn open(forms: &mut FormBuilder) {
    forms.open_form(TARGET, entity(), &Options::new());
}

#[test]
fn renders_an_input() {
    let forms = builder();
    let html = forms.input("testName", None, &none()).unwrap();
    assert!(html.contains("<input"));
    assert!(html.contains(r#"name="testName""#));
}

#[test]
fn validation_errors() {
    let bag = MemoryErrorBag::new();
    let forms = builder_with_errors(bag.clone());

    let html = forms
        .input("testName", LABEL, &Options::new().with("error", "Test error message"))
        .unwrap();
    assert!(html.contains("Test error message"));

    bag.add("testName", "Test error message").unwrap();
    assert!(forms.input("testName", LABEL, &none()).unwrap().contains("Test error message"));

    let suppressed = forms
        .input("testName", LABEL, &Options::new().with("error", false))
        .unwrap();
    assert!(!suppressed.contains("Test error message"));

    bag.add("testName", "Test error message 2").unwrap();
    assert!(!forms.input("testName", LABEL, &none()).unwrap().contains("Test error message 2"));

    let all = forms
        .input("testName", LABEL, &Options::new().with("all-errors", true))
        .unwrap();
    assert!(all.contains("Test error message"));
    assert!(all.contains("Test error message 2"));
}

#[test]
fn errors_for_nested_names_use_dotted_keys() {
    let bag = MemoryErrorBag::new().with("address.city", "City is required");
    let mut forms = builder_with_errors(bag);
    forms.config_mut().set("bootstrap", true);

    let html = forms.input("address[city]", None, &none()).unwrap();
    assert!(html.contains(r#"<span class="help-block">City is required</span>"#));
    assert!(html.contains("has-error"));
}

#[test]
fn attrs_parameter() {
    let forms = builder();
    let html = forms
        .input("testName", LABEL, &Options::new().attr("test-attr", "test-attr-value"))
        .unwrap();
    assert!(html.contains(r#"test-attr="test-attr-value""#));

    let mut attrs = BTreeMap::new();
    attrs.insert("data-x".to_string(), "1".to_string());
    let html = forms
        .input("testName", None, &Options::new().with("attrs", OptionValue::Map(attrs)))
        .unwrap();
    assert!(html.contains(r#"data-x="1""#));
}

#[test]
fn input_ids() {
    let mut forms = builder();
    open(&mut forms);
    let custom = Options::new().with("id", "custom-test-id");

    forms.config_mut().set("generate_id", true);
    assert!(
        forms
            .input("testName", LABEL, &none())
            .unwrap()
            .contains(r#"id="get-without-route-name-test-entity-test-name""#)
    );
    assert!(forms.input("testName", LABEL, &custom).unwrap().contains(r#"id="custom-test-id""#));

    forms.config_mut().set("generate_id", false);
    assert!(
        !forms
            .input("testName", LABEL, &none())
            .unwrap()
            .contains(r#"id="get-without-route-name-test-entity-test-name""#)
    );
    assert!(forms.input("testName", LABEL, &custom).unwrap().contains(r#"id="custom-test-id""#));

    forms.close_form().unwrap();
}

#[test]
fn common_boolean_attributes() {
    let mut forms = builder();
    open(&mut forms);

    for attr in ["required", "readonly", "disabled", "autofocus"] {
        let on = forms.input("testName", LABEL, &Options::new().with(attr, true)).unwrap();
        assert!(on.contains(attr), "{attr}");

        let off = forms.input("testName", LABEL, &Options::new().with(attr, false)).unwrap();
        assert!(!off.contains(attr), "{attr}");

        assert!(!forms.input("testName", LABEL, &none()).unwrap().contains(attr), "{attr}");
    }

    forms.close_form().unwrap();
}

#[test]
fn input_types() {
    let mut forms = builder();
    open(&mut forms);

    let custom = Options::new().with("type", "test-type");
    assert!(forms.input("testName", LABEL, &custom).unwrap().contains(r#"type="test-type""#));
    assert!(
        forms
            .email("testName", LABEL, &custom)
            .unwrap()
            .contains(r#"type="test-type""#)
    );

    let rendered = [
        forms.password("testName", LABEL, &none()),
        forms.file("testName", LABEL, &none()),
        forms.color("testName", LABEL, &none()),
        forms.date("testName", LABEL, &none()),
        forms.datetime("testName", LABEL, &none()),
        forms.datetime_local("testName", LABEL, &none()),
        forms.email("testName", LABEL, &none()),
        forms.number("testName", LABEL, &none()),
        forms.range("testName", LABEL, &none()),
        forms.search("testName", LABEL, &none()),
        forms.tel("testName", LABEL, &none()),
        forms.time("testName", LABEL, &none()),
        forms.url("testName", LABEL, &none()),
        forms.month("testName", LABEL, &none()),
        forms.week("testName", LABEL, &none()),
    ];
    let expected = [
        "password",
        "file",
        "color",
        "date",
        "datetime",
        "datetime-local",
        "email",
        "number",
        "range",
        "search",
        "tel",
        "time",
        "url",
        "month",
        "week",
    ];
    for (html, kind) in rendered.into_iter().zip(expected) {
        assert!(html.unwrap().contains(&format!(r#"type="{kind}""#)), "{kind}");
    }

    let via_kind = forms
        .typed_input(InputType::DatetimeLocal, "testName", LABEL, &none())
        .unwrap();
    assert!(via_kind.contains(r#"type="datetime-local""#));

    forms.close_form().unwrap();
}

#[test]
fn hidden_inputs_are_bare() {
    let mut forms = builder();
    forms.config_mut().set("bootstrap", true);
    open(&mut forms);

    let html = forms.hidden("testName", LABEL, &none()).unwrap();
    assert!(html.starts_with("<input"));
    assert!(!html.contains("<label"));
    assert!(!html.contains("<div"));
}

#[test]
fn form_control_class() {
    let mut forms = builder();

    forms.config_mut().set("bootstrap", true);
    open(&mut forms);
    assert!(forms.input("testName", LABEL, &none()).unwrap().contains("form-control"));
    let custom = forms
        .input(
            "testName",
            LABEL,
            &Options::new().with("form-control-class", "custom-from-control"),
        )
        .unwrap();
    assert!(!custom.contains("form-control"));
    assert!(custom.contains("custom-from-control"));
    forms.close_form().unwrap();

    forms.config_mut().set("bootstrap", false);
    open(&mut forms);
    assert!(!forms.input("testName", LABEL, &none()).unwrap().contains("form-control"));
    forms.close_form().unwrap();
}

#[test]
fn per_call_class() {
    let mut forms = builder();
    open(&mut forms);

    let with_class = forms
        .input("testName", LABEL, &Options::new().with("class", "test-class"))
        .unwrap();
    let without = forms.input("testName", LABEL, &none()).unwrap();
    assert!(with_class.contains("test-class"));
    assert!(!without.contains("test-class"));

    forms.close_form().unwrap();
}

#[test]
fn input_group_addons() {
    let mut forms = builder();
    open(&mut forms);

    let grouped = forms
        .input(
            "testName",
            LABEL,
            &Options::new()
                .with("input-group", "test-group")
                .with("input-group-after", ".00"),
        )
        .unwrap();
    assert!(grouped.contains(r#"<div class="input-group"><span class="input-group-addon">test-group</span><input"#));
    assert!(grouped.contains(r#"<span class="input-group-addon">.00</span></div>"#));
    assert!(!forms.input("testName", LABEL, &none()).unwrap().contains("test-group"));

    forms.close_form().unwrap();
}

#[test]
fn only_input_parameter() {
    let mut forms = builder();
    open(&mut forms);

    let bare = forms.input("testName", LABEL, &Options::new().with("only-input", true)).unwrap();
    assert!(bare.starts_with("<input"));

    let wrapped = forms.input("testName", LABEL, &Options::new().with("only-input", false)).unwrap();
    assert!(!wrapped.starts_with("<input"));
    assert!(!forms.input("testName", LABEL, &none()).unwrap().starts_with("<input"));

    forms.close_form().unwrap();
}

#[test]
fn wrappers() {
    let mut forms = builder();
    {
        let config = forms.config_mut();
        config.set("bootstrap", true);
        config.set("generate_id", true);
        config.set("use_grid", true);
        config.set("form_group_wrapper", true);
        config.set("label_after", "label-after-sign");
    }
    let field_for = r#"for="get-without-route-name-test-entity-test-name""#;

    open(&mut forms);
    let html = forms.input("testName", LABEL, &none()).unwrap();
    assert!(html.starts_with("<div"));
    for class in ["form-group", "control-label", "col-sm-2", "col-sm-10"] {
        assert!(html.contains(class), "{class}");
    }
    assert!(html.contains("<label"));
    assert!(html.contains(field_for));
    assert!(html.contains("</label>"));
    assert!(html.contains("Test labellabel-after-sign"));
    forms.close_form().unwrap();

    forms.config_mut().set("bootstrap", false);
    open(&mut forms);
    let html = forms.input("testName", LABEL, &none()).unwrap();
    assert!(html.starts_with("<div"));
    for class in ["form-group", "control-label", "col-sm-2", "col-sm-10"] {
        assert!(!html.contains(class), "{class}");
    }
    assert!(html.contains(field_for));
    assert!(html.contains("label-after-sign"));
    forms.close_form().unwrap();

    forms.config_mut().set("bootstrap", true);
    forms.config_mut().set("use_grid", false);
    open(&mut forms);
    let html = forms.input("testName", LABEL, &none()).unwrap();
    assert!(html.starts_with("<div"));
    assert!(html.contains("form-group"));
    assert!(html.contains("control-label"));
    assert!(!html.contains("col-sm-2"));
    assert!(!html.contains("col-sm-10"));
    assert!(html.contains(field_for));
    forms.close_form().unwrap();

    forms.config_mut().set("use_grid", true);
    forms.config_mut().set("generate_id", false);
    open(&mut forms);
    assert!(!forms.input("testName", LABEL, &none()).unwrap().contains(r#"for=""#));

    forms.config_mut().set("generate_id", true);
    forms.config_mut().set("form_group_wrapper", false);
    open(&mut forms);
    assert!(!forms.input("testName", LABEL, &none()).unwrap().starts_with("<div"));

    forms.config_mut().set("wrapper", false);
    open(&mut forms);
    assert!(!forms.input("testName", LABEL, &none()).unwrap().contains("div"));
    assert_eq!(forms.open_forms(), 3);

    forms.reset();
    {
        let config = forms.config_mut();
        config.set("bootstrap", true);
        config.set("use_grid", true);
    }

    open(&mut forms);
    let html = forms.input("testName", LABEL, &Options::new().with("label", false)).unwrap();
    assert!(!html.contains("<label"));
    assert!(html.contains("col-sm-offset-2"));
    forms.close_form().unwrap();

    open(&mut forms);
    let classes = [
        ("wrapper-class", "test-wrapper-class"),
        ("form-group-wrapper-class", "test-form-group-wrapper-class"),
        ("label-class", "test-label-class"),
        ("control-label-class", "test-control-label-class"),
        ("form-group-class", "test-form-group-class"),
        ("form-control-class", "test-form-control-class"),
        ("label-grid-class", "test-label-grid-class"),
        ("input-grid-class", "test-input-grid-class"),
    ];
    let options: Options = classes
        .iter()
        .map(|(key, value)| (*key, OptionValue::from(*value)))
        .collect();
    let html = forms.input("testName", LABEL, &options).unwrap();
    for (_, class) in classes {
        assert!(html.contains(class), "{class}");
    }
    forms.close_form().unwrap();
}

#[test]
fn label_position_after() {
    let forms = builder();
    let html = forms
        .input("testName", LABEL, &Options::new().with("label-position", "after"))
        .unwrap();
    let input_at = html.find("<input").unwrap();
    let label_at = html.find("<label").unwrap();
    assert!(input_at < label_at);
}

#[test]
fn label_text_option_overrides_argument() {
    let forms = builder();
    let html = forms
        .input("testName", LABEL, &Options::new().with("label", "Other <b>"))
        .unwrap();
    assert!(html.contains("Other &lt;b&gt;"));
    assert!(!html.contains("Test label"));
}

#[test]
fn values_come_from_bound_entity() {
    let mut forms = builder();
    let user = TestEntity {
        test_name: "Ada \"Countess\"".into(),
    };
    forms.open_form(TARGET, Some(BoundEntity::of(&user)), &none());

    let html = forms.input("testName", LABEL, &none()).unwrap();
    assert!(html.contains(r#"value="Ada &quot;Countess&quot;""#));

    let explicit = forms
        .input("testName", LABEL, &Options::new().with("value", "typed"))
        .unwrap();
    assert!(explicit.contains(r#"value="typed""#));

    assert!(!forms.password("testName", LABEL, &none()).unwrap().contains("value="));
    assert!(!forms.input("missing", LABEL, &none()).unwrap().contains("value="));

    forms.close_form().unwrap();
}

#[test]
fn require_form_rejects_stray_inputs() {
    let mut forms = builder();
    forms.config_mut().set("require_form", true);

    let err = forms.input("testName", LABEL, &none()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::State);

    open(&mut forms);
    assert!(forms.input("testName", LABEL, &none()).is_ok());
}
