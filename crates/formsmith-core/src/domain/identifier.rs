//! Deterministic `id`/`for` derivation.
//!
//! Everything here is a pure function of its arguments. Whether a derived id
//! is actually emitted is decided by the caller from the effective
//! `generate_id` flag; an explicit `id` option bypasses this module entirely.
//!
//! ## Scheme
//!
//! ```text
//! form id  = kebab(action) "-" kebab(entity type | controller base)
//! field id = form id "-" kebab(field name)
//! ```
//!
//! `TestController@getWithoutRouteName` bound to `TestEntity`, field
//! `testName` → `get-without-route-name-test-entity-test-name`.

/// Separator between id segments.
const SEGMENT_SEPARATOR: &str = "-";

/// Convert a string to kebab-case.
///
/// Handles camelCase, PascalCase, acronyms (`HTTPServer` → `http-server`) and
/// treats every non-alphanumeric character as a word separator, so bracketed
/// field names collapse cleanly (`user[first_name]` → `user-first-name`).
pub fn kebab_case(s: &str) -> String {
    split_words(s).join(SEGMENT_SEPARATOR)
}

fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(&next) = chars.peek() {
            // "testName" → "test" + "Name", "field2Name" → "field2" + "Name"
            if (c.is_lowercase() || c.is_ascii_digit()) && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }

            // "HTTPServer" → "HTTP" + "Server"
            if c.is_uppercase()
                && next.is_uppercase()
                && chars.clone().nth(1).is_some_and(|n| n.is_lowercase())
            {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

/// A parsed `Controller@action` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerAction<'a> {
    pub controller: &'a str,
    pub action: &'a str,
}

impl<'a> ControllerAction<'a> {
    /// Split on the last `@`. Returns `None` for plain route names.
    pub fn parse(reference: &'a str) -> Option<Self> {
        let (controller, action) = reference.rsplit_once('@')?;
        if action.is_empty() {
            return None;
        }
        Some(Self { controller, action })
    }

    /// Controller name without namespace and without the `Controller` suffix.
    ///
    /// `App\Http\Controllers\UserController` → `User`.
    pub fn controller_base(&self) -> &'a str {
        let simple = simple_type_name(self.controller);
        simple.strip_suffix("Controller").unwrap_or(simple)
    }
}

/// Last path segment of a type name, generics stripped.
///
/// Accepts Rust paths (`my_app::models::User<T>`), backslash namespaces and
/// slash-separated names.
pub fn simple_type_name(type_name: &str) -> &str {
    let without_generics = type_name
        .split_once('<')
        .map_or(type_name, |(head, _)| head);
    without_generics
        .rsplit([':', '\\', '/'])
        .next()
        .unwrap_or(without_generics)
}

/// Id basis for a form, if one can be derived.
///
/// Needs a `Controller@action` reference; plain route names and empty targets
/// have no basis. When no entity is bound the controller base name takes the
/// entity's place.
pub fn derive_form_id(controller_action: Option<&str>, entity_type: Option<&str>) -> Option<String> {
    let reference = ControllerAction::parse(controller_action?)?;
    let action = kebab_case(reference.action);
    if action.is_empty() {
        return None;
    }

    let subject = match entity_type {
        Some(type_name) => kebab_case(simple_type_name(type_name)),
        None => kebab_case(reference.controller_base()),
    };

    Some(join_segments(&action, &subject))
}

/// Id for a field inside a form with the given basis.
pub fn derive_field_id(form_id: Option<&str>, field_name: &str) -> Option<String> {
    let basis = form_id?;
    let field = kebab_case(field_name);
    if field.is_empty() {
        return None;
    }
    Some(join_segments(basis, &field))
}

/// The id an element ends up with: an explicit one always, a derived one only
/// when generation is on.
pub fn select_id(explicit: Option<&str>, generate_id: bool, derived: Option<String>) -> Option<String> {
    match explicit {
        Some(id) => Some(id.to_string()),
        None if generate_id => derived,
        None => None,
    }
}

fn join_segments(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (_, true) => left.to_string(),
        (true, false) => right.to_string(),
        (false, false) => format!("{left}{SEGMENT_SEPARATOR}{right}"),
    }
}
