//! Command-line interface definitions.
//!
//! The default command is the interactive entry page. `check` runs one
//! reconcile and validation pass for scripts and service managers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ConfigField;

/// Passivbot console: entry page, configuration check and password
#[derive(Parser, Debug)]
#[command(name = "pbgui")]
#[command(version)]
pub struct Cli {
    /// Application config file [default: ~/.pbgui/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug, Default)]
pub enum Commands {
    /// Open the entry page (log in, review and fix the configuration)
    #[default]
    Welcome,

    /// Validate the configuration once; exits non-zero when not ready
    Check,

    /// Change the console password
    Password,

    /// Read or write persisted settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `pbgui config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the persisted `main` settings.
    Show,
    /// Persist one setting, with the same rules as a form edit.
    Set {
        /// Setting name (pbdir, pbvenv, pb7dir, pb7venv, pbname, role).
        field: ConfigField,
        /// New value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "pbgui");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn no_subcommand_means_welcome() {
        let cli = Cli::try_parse_from(["pbgui"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Welcome));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pbgui", "check", "--json", "-vv", "--color", "never"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn config_set_parses_field_names() {
        let cli = Cli::try_parse_from(["pbgui", "config", "set", "main.pb7dir", "/opt/pb7"])
            .unwrap();
        match cli.command {
            Some(Commands::Config(ConfigCommand::Set { field, value })) => {
                assert_eq!(field, ConfigField::Pb7Dir);
                assert_eq!(value, "/opt/pb7");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_set_rejects_unknown_field() {
        assert!(Cli::try_parse_from(["pbgui", "config", "set", "password", "x"]).is_err());
    }
}
