//! fitform CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use fitform::cli::{Cli, CommandDispatcher};
use fitform::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("fitform=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fitform=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("fitform starting with args: {:?}", cli);

    let flag_mode = if cli.quiet {
        Some(OutputMode::Quiet)
    } else if cli.verbose {
        Some(OutputMode::Verbose)
    } else {
        None
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(project_root).with_config_override(cli.config.clone());

    let config = match dispatcher.load_config() {
        Ok(config) => config,
        Err(e) => {
            create_ui(false, flag_mode.unwrap_or_default()).error(&format!("Error: {}", e));
            return ExitCode::from(2);
        }
    };

    let output_mode = flag_mode.unwrap_or_else(|| config.settings.default_output.into());
    tracing::debug!("Output mode: {:?}", output_mode);

    let is_interactive = !cli.non_interactive && !config.settings.non_interactive;
    let mut ui = create_ui(is_interactive, output_mode);

    match dispatcher.dispatch(&cli, &config, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
