//! Command dispatch

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{render, OutputFormat};
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::ServiceContainer;

/// Run the command described by `cli`, writing results to stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let settings = Settings::load_from(cli.config.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with(cli, settings, &mut out)
}

/// Run a conversion for `cli` with already loaded `settings`.
pub fn execute_with<W: Write>(cli: &Cli, settings: Settings, out: &mut W) -> CliResult<()> {
    debug!("settings: {:?}", settings);
    let format = cli.format.unwrap_or(settings.format);
    let container = ServiceContainer::new(settings);
    convert(&container, cli.file.as_deref().map(Path::new), format, out)
}

/// Convert `file` and write the rendered tree to `out`.
///
/// Nothing is written when the conversion fails.
#[instrument(level = "debug", skip(container, out))]
pub fn convert<W: Write>(
    container: &ServiceContainer,
    file: Option<&Path>,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()> {
    let root = container.conversion_service().convert(file)?;
    let rendered = render(&root, format)?;
    output::data(out, &rendered)?;
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
