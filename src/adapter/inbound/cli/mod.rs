//! CLI module graph and command dispatch.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod password;
pub mod paths;
pub mod picker;
pub mod prompt;
pub mod welcome;

use std::process::ExitCode;

use command::{Commands, ConfigCommand};

use crate::error::Result;
use crate::port::inbound::ConsolePort;

/// Run one command against the wired console.
pub fn dispatch(command: Commands, console: &dyn ConsolePort) -> Result<ExitCode> {
    let ok = match command {
        Commands::Welcome => {
            welcome::execute(console)?;
            true
        }
        Commands::Check => check::execute(console)?,
        Commands::Password => password::execute(console)?,
        Commands::Config(ConfigCommand::Show) => {
            config::execute_show(console)?;
            true
        }
        Commands::Config(ConfigCommand::Set { field, value }) => {
            config::execute_set(console, field, &value)?;
            true
        }
    };
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
