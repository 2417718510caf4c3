//! `formsmith form` — render a complete form.

use formsmith_core::domain::{BoundEntity, Options};
use tracing::instrument;

use crate::{
    cli::{FieldSpec, FormArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(target = %args.target))]
pub fn execute(
    args: FormArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut forms = super::session(&global, config, &args.render)?;

    let entity = entity(&args)?;
    let scope = forms.form(&args.target, entity, &form_options(&args));

    let mut html = scope.opening().to_string();
    for field in &args.fields {
        html.push_str(&render_field(&scope, field)?);
    }
    html.push_str(&scope.close()?);

    output.markup(&html)?;
    Ok(())
}

fn entity(args: &FormArgs) -> CliResult<Option<BoundEntity>> {
    let Some(type_name) = &args.entity else {
        return Ok(None);
    };
    let mut entity = BoundEntity::named(type_name.as_str());
    if let Some(raw) = &args.values {
        let values: serde_json::Value =
            serde_json::from_str(raw).with_cli_context(|| "--values is not valid JSON")?;
        if !values.is_object() {
            return Err(CliError::InvalidInput {
                message: "--values must be a JSON object".into(),
                source: None,
            });
        }
        entity = entity.with_values(values);
    }
    Ok(Some(entity))
}

fn form_options(args: &FormArgs) -> Options {
    let mut options = Options::new();
    if let Some(method) = &args.method {
        options.set("method", method.as_str());
    }
    if let Some(id) = &args.id {
        options.set("id", id.as_str());
    }
    if let Some(class) = &args.class {
        options.set("class", class.as_str());
    }
    if let Some(url) = &args.url {
        options.set("url", url.as_str());
    }
    if args.absolute {
        options.set("absolute", true);
    }
    if args.has_files {
        options.set("has_files", true);
    }
    options
}

fn render_field(forms: &formsmith_core::application::FormBuilder, field: &FieldSpec) -> CliResult<String> {
    let mut options = Options::new();
    if let Some(kind) = &field.kind {
        options.set("type", kind.as_str());
    }
    Ok(forms.input(&field.name, field.label.as_deref(), &options)?)
}
