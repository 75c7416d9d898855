//! Argument parsing and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stepper_core::{Orientation, StepperLayout};
use stepper_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};

use crate::commands::{handle_classes, handle_render, handle_stylesheet};
use crate::error::CliResult;

/// Parses CLI arguments, installs logging, and executes the requested command.
/// Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.into(),
        build_sha: build_sha(),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let command = command_label(&cli.command);
    match dispatch(cli) {
        Ok(()) => {
            tracing::debug!(command, "command completed");
            0
        }
        Err(err) => {
            let exit_code = err.exit_code();
            let message = err.display_message();
            tracing::debug!(command, exit_code, error = %message, "command failed");
            eprintln!("error: {message}");
            exit_code
        }
    }
}

fn dispatch(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Render(args) => handle_render(&args, cli.output),
        Command::Classes(args) => handle_classes(&args),
        Command::Stylesheet => {
            handle_stylesheet();
            Ok(())
        }
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Render(_) => "render",
        Command::Classes(_) => "classes",
        Command::Stylesheet => "stylesheet",
    }
}

#[derive(Parser)]
#[command(name = "stepper", version, about = "Derive stepper layouts from JSON documents")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "STEPPER_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: String,
    #[arg(
        long,
        global = true,
        env = "STEPPER_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    log_format: LogFormatArg,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    output: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Derive the annotated steps and connectors for a document.
    Render(DocumentArgs),
    /// Print the container class and forwarded attributes for a document.
    Classes(DocumentArgs),
    /// Print the stepper stylesheet.
    Stylesheet,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct DocumentArgs {
    /// Path to a JSON stepper document, or `-` to read stdin.
    pub(crate) document: PathBuf,
    #[command(flatten)]
    pub(crate) overrides: LayoutOverrides,
}

/// Layout settings that replace the document's values when given.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct LayoutOverrides {
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) active_step: Option<i64>,
    #[arg(long)]
    pub(crate) linear: Option<bool>,
    #[arg(long, value_parser = parse_orientation)]
    pub(crate) orientation: Option<Orientation>,
    #[arg(long)]
    pub(crate) alternative_label: Option<bool>,
}

impl LayoutOverrides {
    pub(crate) fn apply(&self, layout: &mut StepperLayout) {
        if let Some(active_step) = self.active_step {
            layout.active_step = active_step;
        }
        if let Some(linear) = self.linear {
            layout.linear = linear;
        }
        if let Some(orientation) = self.orientation {
            layout.orientation = orientation;
        }
        if let Some(alternative_label) = self.alternative_label {
            layout.alternative_label = alternative_label;
        }
    }
}

fn parse_orientation(value: &str) -> Result<Orientation, String> {
    value.parse().map_err(|err: stepper_core::StepperError| err.to_string())
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
enum LogFormatArg {
    #[default]
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}
