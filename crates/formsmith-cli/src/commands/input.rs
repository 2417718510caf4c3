//! `formsmith input` — render a single control outside any form.

use formsmith_core::domain::Options;
use tracing::instrument;

use crate::{
    cli::{GlobalArgs, InputArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: InputArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let forms = super::session(&global, config, &args.render)?;
    let html = forms.input(&args.name, args.label.as_deref(), &input_options(&args))?;
    output.markup(&html)?;
    Ok(())
}

fn input_options(args: &InputArgs) -> Options {
    let text = [
        ("type", &args.kind),
        ("id", &args.id),
        ("class", &args.class),
        ("value", &args.value),
        ("error", &args.error),
    ];
    let mut options: Options = text
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect();
    if args.all_errors {
        options.set("all_errors", true);
    }
    if args.only_input {
        options.set("only_input", true);
    }
    options
}
