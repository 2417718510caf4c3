//! Form Builder - the rendering API.
//!
//! Coordinates one rendering session:
//! 1. resolve the form target (route, controller action, current URL)
//! 2. record the open form on the session stack
//! 3. render inputs against the open form's ids, values and options
//! 4. pop the stack on close
//!
//! One builder per request or template render. It owns its configuration
//! and its form stack, so two renders never see each other's state.

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError, FormStateStack,
        ports::{CsrfTokenProvider, ErrorBag, Router},
        services::{FormScope, RouteResolver},
    },
    domain::{
        BoundEntity, EffectiveOptions, ErrorPolicy, FieldDescriptor, FormConfig, FormContext,
        InputType, OptionValue, Options, bag_key,
        identifier::select_id,
        markup::{self, FormTag},
        resolve,
    },
    error::FormResult,
};

/// Server-side form builder.
pub struct FormBuilder {
    config: FormConfig,
    router: Box<dyn Router>,
    csrf: Box<dyn CsrfTokenProvider>,
    errors: Box<dyn ErrorBag>,
    stack: FormStateStack,
}

/// Generates one `fn <kind>(name, label, options)` per typed variant.
macro_rules! typed_inputs {
    ($($(#[$doc:meta])* $method:ident => $kind:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $method(
                &self,
                name: &str,
                label: Option<&str>,
                options: &Options,
            ) -> FormResult<String> {
                self.typed_input(InputType::$kind, name, label, options)
            }
        )*
    };
}

impl FormBuilder {
    /// Create a builder with the given configuration and adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use formsmith_core::{application::FormBuilder, domain::FormConfig};
    ///
    /// let builder = FormBuilder::new(
    ///     FormConfig::default(),
    ///     Box::new(router),    // impl Router
    ///     Box::new(csrf),      // impl CsrfTokenProvider
    ///     Box::new(error_bag), // impl ErrorBag
    /// );
    /// ```
    pub fn new(
        config: FormConfig,
        router: Box<dyn Router>,
        csrf: Box<dyn CsrfTokenProvider>,
        errors: Box<dyn ErrorBag>,
    ) -> Self {
        Self {
            config,
            router,
            csrf,
            errors,
            stack: FormStateStack::new(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FormConfig {
        &mut self.config
    }

    /// The innermost open form, if any.
    pub fn current_form(&self) -> Option<&FormContext> {
        self.stack.current()
    }

    pub fn open_forms(&self) -> usize {
        self.stack.depth()
    }

    /// Close every open form and restore the default configuration.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.config.reset();
    }

    // ========================================================================
    // Forms
    // ========================================================================

    /// Open a form and return its opening markup.
    ///
    /// `target` is a route name, a `Controller@action` reference or empty for
    /// the current URL. The form stays open, and its options act as defaults
    /// for every input, until [`close_form`](Self::close_form).
    #[instrument(skip_all, fields(target = %target))]
    pub fn open_form(
        &mut self,
        target: &str,
        entity: Option<BoundEntity>,
        options: &Options,
    ) -> String {
        let effective = resolve(&self.config, None, options);
        let route = RouteResolver::new(self.router.as_ref()).resolve(target, &effective);
        let context = FormContext::new(route, entity, options);

        let id = select_id(
            effective.text("id"),
            effective.generate_id(),
            context.derived_id(),
        );
        let token = context.method.requires_csrf().then(|| self.csrf.token());

        let html = markup::open_form(
            &FormTag {
                method: &context.method,
                action: &context.url,
                id: id.as_deref(),
                csrf_token: token.as_deref(),
            },
            &effective,
        );

        debug!(method = %context.method, url = %context.url, id = ?id, "Form opened");
        self.stack.open(context);
        html
    }

    /// Close the innermost form.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::NoActiveFormContext`] when no form is open.
    pub fn close_form(&mut self) -> FormResult<String> {
        self.stack.close()?;
        Ok(markup::close_form())
    }

    /// Open a form and return a guard that closes it.
    ///
    /// Dropping the guard without calling [`FormScope::close`] still pops the
    /// form, so an early return cannot leave it open.
    pub fn form(
        &mut self,
        target: &str,
        entity: Option<BoundEntity>,
        options: &Options,
    ) -> FormScope<'_> {
        let opening = self.open_form(target, entity, options);
        FormScope::new(self, opening)
    }

    pub(crate) fn discard_form(&mut self) {
        if self.stack.close().is_ok() {
            warn!("Form scope dropped without close(); form context discarded");
        }
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Render an input control.
    ///
    /// The control type is the `type` option, or `text`.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::NoActiveFormContext`] when `require_form` is on
    /// and no form is open.
    pub fn input(&self, name: &str, label: Option<&str>, options: &Options) -> FormResult<String> {
        self.render_field(None, name, label, options)
    }

    /// Render an input with a fixed type. An explicit `type` option still wins.
    pub fn typed_input(
        &self,
        kind: InputType,
        name: &str,
        label: Option<&str>,
        options: &Options,
    ) -> FormResult<String> {
        self.render_field(Some(kind), name, label, options)
    }

    typed_inputs! {
        text => Text,
        /// Never pre-filled from the bound entity.
        password => Password,
        /// Never pre-filled from the bound entity.
        file => File,
        /// Always rendered bare, without label or wrappers.
        hidden => Hidden,
        color => Color,
        date => Date,
        datetime => Datetime,
        datetime_local => DatetimeLocal,
        email => Email,
        number => Number,
        range => Range,
        search => Search,
        tel => Tel,
        time => Time,
        url => Url,
        month => Month,
        week => Week,
    }

    #[instrument(skip_all, fields(name = %name))]
    fn render_field(
        &self,
        kind: Option<InputType>,
        name: &str,
        label: Option<&str>,
        options: &Options,
    ) -> FormResult<String> {
        let form = self.stack.current();
        let effective = resolve(&self.config, form.map(|f| &f.inherited), options);

        if form.is_none() && effective.flag("require_form") {
            return Err(ApplicationError::NoActiveFormContext { operation: "input" }.into());
        }

        let field = self.describe(kind, name, label, form, &effective);
        Ok(markup::render_input(&field, &effective))
    }

    fn describe(
        &self,
        kind: Option<InputType>,
        name: &str,
        label: Option<&str>,
        form: Option<&FormContext>,
        opts: &EffectiveOptions,
    ) -> FieldDescriptor {
        let input_type = opts
            .text("type")
            .map(str::to_string)
            .unwrap_or_else(|| kind.unwrap_or_default().as_str().to_string());
        let accepts_value = input_type
            .parse::<InputType>()
            .map_or(true, |t| t.accepts_value());

        let mut field = FieldDescriptor::new(name, input_type);

        field.label = match opts.get("label") {
            Some(OptionValue::Bool(false)) => None,
            Some(OptionValue::Text(text)) => Some(text.clone()),
            _ => label.map(str::to_string),
        };
        field.label_after = opts.text("label_after").map(str::to_string);
        field.label_position = opts.label_position();

        field.id = select_id(
            opts.text("id"),
            opts.generate_id(),
            form.and_then(|f| f.derived_field_id(name)),
        );

        if accepts_value {
            field.value = opts
                .text("value")
                .map(str::to_string)
                .or_else(|| form.and_then(|f| f.entity_value(name)));
        }

        field.placeholder = opts.text("placeholder").map(str::to_string);
        field.required = opts.flag("required");
        field.readonly = opts.flag("readonly");
        field.disabled = opts.flag("disabled");
        field.autofocus = opts.flag("autofocus");
        field.attrs = opts.map("attrs").cloned().unwrap_or_default();

        field.input_group_before = opts.text("input_group").map(str::to_string);
        field.input_group_after = opts.text("input_group_after").map(str::to_string);

        let policy = ErrorPolicy::from_options(opts);
        let bag = if policy.reads_bag() {
            self.errors.errors_for(&bag_key(name))
        } else {
            Vec::new()
        };
        field.errors = policy.select(bag);

        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockCsrfTokenProvider, MockErrorBag, MockRouter};
    use crate::domain::{HttpMethod, RouteEntry};
    use crate::error::FormsmithError;
    use mockall::predicate::eq;
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestEntity {
        #[serde(rename = "testName")]
        test_name: String,
        secret: String,
    }

    fn router() -> MockRouter {
        let mut router = MockRouter::new();
        router.expect_current_url().returning(|| "/current".into());
        router
            .expect_absolute()
            .returning(|p| format!("http://test.loc{p}"));
        router.expect_route().returning(|name| match name {
            "putRouteName" => Some(RouteEntry::new("/put-url", HttpMethod::Put)),
            "getRouteName" => Some(RouteEntry::new("/get-url", HttpMethod::Get)),
            _ => None,
        });
        router.expect_action().returning(|action| match action {
            "TestController@getWithoutRouteName" => Some("/get-url-without-route-name".into()),
            "TestController@postWithoutRouteName" => Some("/post-url-without-route-name".into()),
            _ => None,
        });
        router
    }

    fn csrf() -> MockCsrfTokenProvider {
        let mut csrf = MockCsrfTokenProvider::new();
        csrf.expect_token().returning(|| "secret-token".into());
        csrf
    }

    fn no_errors() -> MockErrorBag {
        let mut bag = MockErrorBag::new();
        bag.expect_errors_for().returning(|_| Vec::new());
        bag
    }

    fn builder_with(config: FormConfig, bag: MockErrorBag) -> FormBuilder {
        FormBuilder::new(config, Box::new(router()), Box::new(csrf()), Box::new(bag))
    }

    fn builder(config: FormConfig) -> FormBuilder {
        builder_with(config, no_errors())
    }

    fn entity() -> BoundEntity {
        BoundEntity::of(&TestEntity {
            test_name: "Ada".into(),
            secret: "hunter2".into(),
        })
    }

    #[test]
    fn get_forms_skip_the_token_provider() {
        let mut csrf = MockCsrfTokenProvider::new();
        csrf.expect_token().times(0);
        let mut builder = FormBuilder::new(
            FormConfig::default(),
            Box::new(router()),
            Box::new(csrf),
            Box::new(no_errors()),
        );

        let html = builder.open_form("getRouteName", None, &Options::new());
        assert!(html.contains(r#"method="get""#));
        assert!(!html.contains("_token"));
    }

    #[test]
    fn put_route_is_spoofed_with_token() {
        let mut builder = builder(FormConfig::default());
        let html = builder.open_form("putRouteName", None, &Options::new());
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"action="/put-url""#));
        assert!(html.contains(r#"name="_token" value="secret-token""#));
        assert!(html.contains(r#"name="_method" value="PUT""#));
    }

    #[test]
    fn form_id_follows_generate_id() {
        let mut builder = builder(FormConfig::default().with("generate_id", true));
        let html = builder.open_form("TestController@getWithoutRouteName", None, &Options::new());
        assert!(html.contains(r#"id="get-without-route-name-test""#));

        builder.config_mut().set("generate_id", false);
        let html = builder.open_form("TestController@getWithoutRouteName", None, &Options::new());
        assert!(!html.contains("id=\""));

        let html = builder.open_form("", None, &Options::new().with("id", "test-id"));
        assert!(html.contains(r#"id="test-id""#));
    }

    #[test]
    fn input_ids_use_the_open_form() {
        let mut builder = builder(FormConfig::default());
        builder.open_form("TestController@getWithoutRouteName", Some(entity()), &Options::new());

        // generate_id is read at render time, not at open time
        builder.config_mut().set("generate_id", true);
        let html = builder.input("testName", Some("Test label"), &Options::new()).unwrap();
        assert!(html.contains(r#"id="get-without-route-name-test-entity-test-name""#));
        assert!(html.contains(r#"for="get-without-route-name-test-entity-test-name""#));

        let html = builder
            .input("testName", Some("Test label"), &Options::new().with("id", "custom-test-id"))
            .unwrap();
        assert!(html.contains(r#"id="custom-test-id""#));

        builder.config_mut().set("generate_id", false);
        let html = builder.input("testName", Some("Test label"), &Options::new()).unwrap();
        assert!(!html.contains("get-without-route-name-test-entity-test-name"));
    }

    #[test]
    fn closing_resets_the_context() {
        let mut builder = builder(FormConfig::default().with("generate_id", true));
        builder.open_form("TestController@getWithoutRouteName", Some(entity()), &Options::new());
        assert_eq!(builder.close_form().unwrap(), "</form>");
        assert!(builder.current_form().is_none());

        let html = builder.input("testName", Some("Test label"), &Options::new()).unwrap();
        assert!(!html.contains("id=\""));
        assert!(!html.contains("value=\"Ada\""));
    }

    #[test]
    fn close_without_open_is_an_error() {
        let mut builder = builder(FormConfig::default());
        let err = builder.close_form().unwrap_err();
        assert!(matches!(
            err,
            FormsmithError::Application(ApplicationError::NoActiveFormContext { .. })
        ));
    }

    #[test]
    fn require_form_rejects_stray_inputs() {
        let strict = builder(FormConfig::default().with("require_form", true));
        assert!(strict.input("testName", None, &Options::new()).is_err());

        let lenient = builder(FormConfig::default());
        assert!(lenient.input("testName", None, &Options::new()).is_ok());
    }

    #[test]
    fn form_options_are_inherited_except_form_only_keys() {
        let mut builder = builder(FormConfig::default());
        builder.open_form(
            "",
            None,
            &Options::new()
                .with("bootstrap", true)
                .with("class", "form-only")
                .with("id", "form-id"),
        );

        let html = builder.input("testName", None, &Options::new()).unwrap();
        assert!(html.contains("form-control"));
        assert!(!html.contains("form-only"));
        assert!(!html.contains("form-id"));

        let html = builder
            .input("testName", None, &Options::new().with("bootstrap", false))
            .unwrap();
        assert!(!html.contains("form-control"));
    }

    #[test]
    fn values_come_from_option_then_entity() {
        let mut builder = builder(FormConfig::default());
        builder.open_form("", Some(entity()), &Options::new());

        let html = builder.input("testName", None, &Options::new()).unwrap();
        assert!(html.contains(r#"value="Ada""#));

        let html = builder
            .input("testName", None, &Options::new().with("value", "Grace"))
            .unwrap();
        assert!(html.contains(r#"value="Grace""#));

        let html = builder.password("secret", None, &Options::new()).unwrap();
        assert!(!html.contains("hunter2"));
        assert!(!html.contains("value="));
    }

    #[test]
    fn typed_variants_set_type() {
        let builder = builder(FormConfig::default());
        let cases: [(fn(&FormBuilder, &str, Option<&str>, &Options) -> FormResult<String>, &str); 4] = [
            (FormBuilder::email, "email"),
            (FormBuilder::datetime_local, "datetime-local"),
            (FormBuilder::week, "week"),
            (FormBuilder::file, "file"),
        ];
        for (render, expected) in cases {
            let html = render(&builder, "testName", Some("Test label"), &Options::new()).unwrap();
            assert!(html.contains(&format!(r#"type="{expected}""#)), "{html}");
        }

        let html = builder
            .email("testName", None, &Options::new().with("type", "test-type"))
            .unwrap();
        assert!(html.contains(r#"type="test-type""#));
    }

    #[test]
    fn errors_come_from_the_bag_by_dotted_key() {
        let mut bag = MockErrorBag::new();
        bag.expect_errors_for()
            .with(eq("user.name"))
            .returning(|_| vec!["Too short".into(), "Not unique".into()]);
        let builder = builder_with(FormConfig::default(), bag);

        let html = builder.input("user[name]", None, &Options::new()).unwrap();
        assert!(html.contains("Too short"));
        assert!(!html.contains("Not unique"));

        let html = builder
            .input("user[name]", None, &Options::new().with("all_errors", true))
            .unwrap();
        assert!(html.contains("Not unique"));
    }

    #[test]
    fn literal_and_suppressed_errors_skip_the_bag() {
        let mut bag = MockErrorBag::new();
        bag.expect_errors_for().times(0);
        let builder = builder_with(FormConfig::default(), bag);

        let html = builder
            .input("testName", None, &Options::new().with("error", "Forced"))
            .unwrap();
        assert!(html.contains("Forced"));

        let html = builder
            .input("testName", None, &Options::new().with("error", false))
            .unwrap();
        assert!(!html.contains("help-block"));
    }

    #[test]
    fn label_option_overrides_argument() {
        let builder = builder(FormConfig::default());
        let html = builder
            .input("testName", Some("Arg"), &Options::new().with("label", "Opt"))
            .unwrap();
        assert!(html.contains(">Opt</label>"));

        let html = builder
            .input("testName", Some("Arg"), &Options::new().with("label", false))
            .unwrap();
        assert!(!html.contains("<label"));
    }

    #[test]
    fn scope_closes_on_drop() {
        let mut builder = builder(FormConfig::default());
        {
            let scope = builder.form("", None, &Options::new());
            assert!(scope.opening().starts_with("<form"));
            assert_eq!(scope.open_forms(), 1);
        }
        assert_eq!(builder.open_forms(), 0);

        let scope = builder.form("", None, &Options::new());
        let html = scope.input("testName", None, &Options::new()).unwrap();
        assert!(html.contains("testName"));
        assert_eq!(scope.close().unwrap(), "</form>");
        assert_eq!(builder.open_forms(), 0);
    }

    #[test]
    fn reset_clears_state() {
        let mut builder = builder(FormConfig::default().with("bootstrap", true));
        builder.open_form("", None, &Options::new());
        builder.reset();
        assert_eq!(builder.open_forms(), 0);
        assert!(!builder.config().flag("bootstrap"));
    }
}
