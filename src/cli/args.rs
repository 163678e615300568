use crate::config::settings::Overrides;
use crate::constants::{exit_codes, verbosity};
use crate::types::Engine;
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Renders localized messages from template resources.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render a named template and print the message.
    Render(RenderArgs),
    /// Print the path of the resource a template name resolves to.
    Locate(LocateArgs),
}

impl Commands {
    pub fn verbose(&self) -> u8 {
        match self {
            Commands::Render(args) => args.lookup.verbose,
            Commands::Locate(args) => args.lookup.verbose,
        }
    }
}

/// Arguments shared by every command that looks templates up.
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Template name, without locale tag or suffix.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory holding the letterpress configuration file.
    #[arg(long = "config-dir", value_name = "DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Directory holding template resources; overrides the configuration.
    #[arg(short, long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Locale tag such as `de-DE`; overrides the configuration.
    #[arg(short, long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Render engine; overrides the configuration.
    #[arg(short, long, value_enum)]
    pub engine: Option<Engine>,

    /// Text used for placeholders that cannot be resolved.
    #[arg(long = "default-value")]
    pub default_value: Option<String>,

    /// Model as a JSON object, or `-` to read from stdin.
    #[arg(short, long, conflicts_with = "model_file")]
    pub model: Option<String>,

    /// Path of a JSON file holding the model.
    #[arg(long = "model-file", value_name = "PATH")]
    pub model_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    #[command(flatten)]
    pub lookup: LookupArgs,
}

impl LookupArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            resource_root: self.resources.clone(),
            locale: self.locale.clone(),
            ..Default::default()
        }
    }
}

impl RenderArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            engine: self.engine,
            default_value: self.default_value.clone(),
            ..self.lookup.overrides()
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument
            || e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        {
            let mut command = Cli::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
