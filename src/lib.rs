//! pbgui - entry page and bootstrap for a multi-instance Passivbot console.
//!
//! Before anything else runs, the console checks that both engine
//! generations (V6 and V7) are installed with working interpreters, that a
//! bot name, a role, users and the coin data feed are configured, and keeps
//! one instance of each long-lived collaborator per session.
//!
//! # Architecture
//!
//! - [`domain`] - Engines, settings fields, path rules, readiness reasons
//! - [`port`] - Traits at the seams: settings store, collaborators, auth,
//!   navigation, secrets
//! - [`application`] - Validator, session bootstrapper, visit flow and
//!   password change
//! - [`adapter`] - TOML settings and secrets files, file-system
//!   collaborators, the CLI
//! - [`infrastructure`] - Application config, logging, wiring
//!
//! # Example
//!
//! ```no_run
//! use pbgui::application::SessionContext;
//! use pbgui::infrastructure::{AppConfig, Console};
//! use pbgui::port::inbound::ConsolePort;
//! use pbgui::port::outbound::NoProgress;
//!
//! let console = Console::build(AppConfig::default())?;
//! let mut session = SessionContext::new();
//! console.bootstrapper().reconcile(&mut session, &NoProgress);
//! let readiness = console.validator().evaluate(&mut session);
//! println!("ready: {}", readiness.is_ready());
//! # Ok::<(), pbgui::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
