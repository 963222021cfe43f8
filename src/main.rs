use std::fs;
use std::process::ExitCode;

use clap::Parser;
use pbgui::adapter::inbound::cli::command::{Cli, ColorChoice};
use pbgui::adapter::inbound::cli::output::{self, OutputConfig};
use pbgui::adapter::inbound::cli::{diagnostic, dispatch, paths};
use pbgui::infrastructure::{AppConfig, Console};
use tracing::debug;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => output::detect_color(),
    };
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose, color));

    let config_path = cli.config.clone().unwrap_or_else(paths::default_config);
    let config = match AppConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            let content = fs::read_to_string(&config_path).ok();
            let report = diagnostic::config_report(&config_path, content.as_deref(), &e);
            eprintln!("{report:?}");
            return ExitCode::FAILURE;
        }
    };

    config.logging.with_verbosity(cli.verbose).init();
    debug!(config = %config_path.display(), "Configuration loaded");

    let console = match Console::build(config) {
        Ok(console) => console,
        Err(e) => {
            debug!(error = ?e, "Failed to start console");
            output::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match dispatch(cli.command.unwrap_or_default(), &console) {
        Ok(code) => code,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
