//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No rendering logic lives here.

use std::{path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "formsmith",
    bin_name = "formsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Server-side HTML form markup",
    long_about = "formsmith renders HTML forms and inputs with CSRF tokens, \
                  method spoofing, derived ids and Bootstrap-style wrappers.",
    after_help = "EXAMPLES:\n\
        \x20 formsmith form users.update --routes routes.toml --field email:email:Email\n\
        \x20 formsmith input email --type email --label Email --set bootstrap=true\n\
        \x20 formsmith config list\n\
        \x20 formsmith completions bash > /usr/share/bash-completion/completions/formsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a complete form.
    #[command(
        visible_alias = "f",
        about = "Render a form",
        after_help = "EXAMPLES:\n\
            \x20 formsmith form ''                                  # post to the current URL\n\
            \x20 formsmith form putRouteName --field title::Title\n\
            \x20 formsmith form UserController@update --entity User --set generate_id=true"
    )]
    Form(FormArgs),

    /// Render a single input.
    #[command(
        visible_alias = "i",
        about = "Render an input",
        after_help = "EXAMPLES:\n\
            \x20 formsmith input name --label Name\n\
            \x20 formsmith input email --type email --error 'Email is taken'\n\
            \x20 formsmith input q --only-input"
    )]
    Input(InputArgs),

    /// Initialise a formsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 formsmith init\n\
            \x20 formsmith init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 formsmith completions bash > ~/.local/share/bash-completion/completions/formsmith\n\
            \x20 formsmith completions zsh  > ~/.zfunc/_formsmith\n\
            \x20 formsmith completions fish > ~/.config/fish/completions/formsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the formsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 formsmith config get render.bootstrap\n\
            \x20 formsmith config list\n\
            \x20 formsmith config path"
    )]
    Config(ConfigCommands),
}

// ── shared render flags ───────────────────────────────────────────────────────

/// Flags shared by every rendering command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Override a rendering option for this run.
    #[arg(
        short = 's',
        long = "set",
        value_name = "KEY=VALUE",
        help = "Override a rendering option (repeatable)"
    )]
    pub set: Vec<KeyValue>,

    /// JSON validation messages, keyed by field name.
    #[arg(
        long = "errors",
        value_name = "FILE",
        help = "JSON file of validation messages"
    )]
    pub errors: Option<PathBuf>,
}

// ── form ──────────────────────────────────────────────────────────────────────

/// Arguments for `formsmith form`.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// Route name, `Controller@action`, or empty for the current URL.
    #[arg(value_name = "TARGET", default_value = "", help = "Route name or Controller@action")]
    pub target: String,

    #[arg(short = 'm', long = "method", value_name = "METHOD", help = "HTTP method")]
    pub method: Option<String>,

    /// Type name of the bound entity; contributes to derived ids.
    #[arg(long = "entity", value_name = "TYPE", help = "Bound entity type name")]
    pub entity: Option<String>,

    /// Entity field values as a JSON object.
    #[arg(
        long = "values",
        value_name = "JSON",
        requires = "entity",
        help = "Bound entity values (JSON object)"
    )]
    pub values: Option<String>,

    #[arg(long = "id", value_name = "ID", help = "Explicit form id")]
    pub id: Option<String>,

    #[arg(long = "class", value_name = "CLASS", help = "Extra form class")]
    pub class: Option<String>,

    #[arg(long = "url", value_name = "URL", help = "Override the action URL")]
    pub url: Option<String>,

    #[arg(long = "absolute", help = "Emit an absolute action URL")]
    pub absolute: bool,

    #[arg(long = "has-files", help = "Use multipart/form-data encoding")]
    pub has_files: bool,

    /// Field to render inside the form.
    #[arg(
        long = "field",
        value_name = "NAME[:TYPE[:LABEL]]",
        help = "Field to render (repeatable)"
    )]
    pub fields: Vec<FieldSpec>,

    #[command(flatten)]
    pub render: RenderArgs,
}

// ── input ─────────────────────────────────────────────────────────────────────

/// Arguments for `formsmith input`.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Field name, e.g. `email` or `user[email]`.
    #[arg(value_name = "NAME", help = "Field name")]
    pub name: String,

    #[arg(short = 'l', long = "label", value_name = "LABEL", help = "Label text")]
    pub label: Option<String>,

    #[arg(short = 't', long = "type", value_name = "TYPE", help = "Input type")]
    pub kind: Option<String>,

    #[arg(long = "id", value_name = "ID", help = "Explicit id")]
    pub id: Option<String>,

    #[arg(long = "class", value_name = "CLASS", help = "Extra input class")]
    pub class: Option<String>,

    #[arg(long = "value", value_name = "VALUE", help = "Control value")]
    pub value: Option<String>,

    /// Literal error message; replaces any messages from `--errors`.
    #[arg(long = "error", value_name = "MSG", help = "Show this error message")]
    pub error: Option<String>,

    #[arg(long = "all-errors", help = "Show every message, not just the first")]
    pub all_errors: bool,

    #[arg(long = "only-input", help = "Render the bare control")]
    pub only_input: bool,

    #[command(flatten)]
    pub render: RenderArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `formsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `formsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `formsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `render.bootstrap`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value parsers ─────────────────────────────────────────────────────────────

/// `KEY=VALUE` pair from `--set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl FromStr for KeyValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty key in '{s}'"));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// `NAME[:TYPE[:LABEL]]` from `--field`. An empty TYPE means `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: Option<String>,
    pub label: Option<String>,
}

impl FromStr for FieldSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(format!("missing field name in '{s}'"));
        }
        let non_empty = |p: Option<&str>| p.filter(|v| !v.is_empty()).map(str::to_string);
        let kind = non_empty(parts.next());
        let label = non_empty(parts.next());
        Ok(Self {
            name: name.to_string(),
            kind,
            label,
        })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
