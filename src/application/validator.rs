//! Configuration readiness validation.
//!
//! Readiness is decided by an ordered list of named rules. Rules run in
//! [`RULES`] order and the first failure wins, so the order is the priority
//! of the reasons a user sees.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::application::session::SessionContext;
use crate::application::settings::load_main_settings;
use crate::domain::path::{has_entry_point, has_interpreter_name, is_regular_file};
use crate::domain::{ConfigIssue, Engine, MainSettings, Readiness, Role};
use crate::port::outbound::{CoinDataStatus, CollaboratorFactory, SettingsStore, UserDirectory};

/// Inputs a rule may consult.
pub struct ValidationContext<'a> {
    /// Settings as persisted right now.
    pub settings: &'a MainSettings,
    /// `None` when the user registry could not be built.
    pub users: Option<&'a dyn UserDirectory>,
    /// Coin data API status, queried by the last rule only.
    pub coin_data: &'a dyn CoinDataStatus,
}

/// One readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    PathSet(Engine),
    PathExists(Engine),
    EntryPointPresent(Engine),
    VenvSet(Engine),
    VenvIsFile(Engine),
    VenvIsInterpreter(Engine),
    NodeNamePresent,
    RoleRecognized,
    UsersConfigured,
    CoinDataAvailable,
}

/// Rules in priority order. Both engine generations are required.
pub const RULES: [ValidationRule; 16] = [
    ValidationRule::PathSet(Engine::V6),
    ValidationRule::PathExists(Engine::V6),
    ValidationRule::EntryPointPresent(Engine::V6),
    ValidationRule::VenvSet(Engine::V6),
    ValidationRule::VenvIsFile(Engine::V6),
    ValidationRule::VenvIsInterpreter(Engine::V6),
    ValidationRule::PathSet(Engine::V7),
    ValidationRule::PathExists(Engine::V7),
    ValidationRule::EntryPointPresent(Engine::V7),
    ValidationRule::VenvSet(Engine::V7),
    ValidationRule::VenvIsFile(Engine::V7),
    ValidationRule::VenvIsInterpreter(Engine::V7),
    ValidationRule::NodeNamePresent,
    ValidationRule::RoleRecognized,
    ValidationRule::UsersConfigured,
    ValidationRule::CoinDataAvailable,
];

impl ValidationRule {
    /// Stable rule name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PathSet(_) => "path_set",
            Self::PathExists(_) => "path_exists",
            Self::EntryPointPresent(_) => "entry_point_present",
            Self::VenvSet(_) => "venv_set",
            Self::VenvIsFile(_) => "venv_is_file",
            Self::VenvIsInterpreter(_) => "venv_is_interpreter",
            Self::NodeNamePresent => "node_name_present",
            Self::RoleRecognized => "role_recognized",
            Self::UsersConfigured => "users_configured",
            Self::CoinDataAvailable => "coin_data_available",
        }
    }

    /// Run this rule alone.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigIssue`] describing why the rule failed. A coin
    /// data query error counts as the API being unavailable.
    pub fn check(self, ctx: &ValidationContext<'_>) -> Result<(), ConfigIssue> {
        match self {
            Self::PathSet(engine) => {
                if is_blank(install_dir(ctx, engine)) {
                    return Err(ConfigIssue::PathNotConfigured { engine });
                }
            }
            Self::PathExists(engine) => {
                let path = install_dir(ctx, engine);
                if !Path::new(path).exists() {
                    return Err(ConfigIssue::PathMissing {
                        engine,
                        path: path.to_string(),
                    });
                }
            }
            Self::EntryPointPresent(engine) => {
                let path = install_dir(ctx, engine);
                if !has_entry_point(engine, path) {
                    return Err(ConfigIssue::EntryPointMissing {
                        engine,
                        path: path.to_string(),
                    });
                }
            }
            Self::VenvSet(engine) => {
                if is_blank(venv(ctx, engine)) {
                    return Err(ConfigIssue::VenvNotConfigured { engine });
                }
            }
            Self::VenvIsFile(engine) => {
                let path = venv(ctx, engine);
                if !is_regular_file(path) {
                    return Err(ConfigIssue::VenvNotFile {
                        engine,
                        path: path.to_string(),
                    });
                }
            }
            Self::VenvIsInterpreter(engine) => {
                let path = venv(ctx, engine);
                if !has_interpreter_name(path) {
                    return Err(ConfigIssue::VenvNotInterpreter {
                        engine,
                        path: path.to_string(),
                    });
                }
            }
            Self::NodeNamePresent => {
                if is_blank(&ctx.settings.pbname) {
                    return Err(ConfigIssue::NodeNameMissing);
                }
            }
            Self::RoleRecognized => {
                if ctx.settings.role.parse::<Role>().is_err() {
                    return Err(ConfigIssue::RoleInvalid);
                }
            }
            Self::UsersConfigured => {
                let configured = ctx.users.is_some_and(|users| !users.list().is_empty());
                if !configured {
                    return Err(ConfigIssue::NoUsers);
                }
            }
            Self::CoinDataAvailable => {
                let available = match ctx.coin_data.fetch_api_status() {
                    Ok(available) => available,
                    Err(e) => {
                        warn!(error = %e, "Coin data API status check failed");
                        false
                    }
                };
                if !available {
                    return Err(ConfigIssue::CoinDataUnavailable);
                }
            }
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn install_dir<'a>(ctx: &ValidationContext<'a>, engine: Engine) -> &'a str {
    ctx.settings.path(engine.dir_field())
}

fn venv<'a>(ctx: &ValidationContext<'a>, engine: Engine) -> &'a str {
    ctx.settings.path(engine.venv_field())
}

/// Run every rule in order; the first failure decides.
#[must_use]
pub fn evaluate_rules(ctx: &ValidationContext<'_>) -> Readiness {
    for rule in RULES {
        if let Err(issue) = rule.check(ctx) {
            debug!(rule = rule.name(), "Validation rule failed");
            return Readiness::NotReady(issue);
        }
    }
    Readiness::Ready
}

/// Decides whether the console is ready, reading settings fresh each time.
pub struct ConfigValidator<'a> {
    store: &'a dyn SettingsStore,
    factory: &'a dyn CollaboratorFactory,
}

impl<'a> ConfigValidator<'a> {
    /// `factory` supplies the coin data checker for each evaluation.
    pub fn new(store: &'a dyn SettingsStore, factory: &'a dyn CollaboratorFactory) -> Self {
        Self { store, factory }
    }

    /// Evaluate readiness and record the outcome in the session.
    ///
    /// The only side effect is writing or clearing
    /// [`SessionContext::config_error`]; settings are never modified.
    pub fn evaluate(&self, session: &mut SessionContext) -> Readiness {
        let settings = load_main_settings(self.store);
        let coin_data = self.factory.coin_data();
        let readiness = evaluate_rules(&ValidationContext {
            settings: &settings,
            users: session.collaborators.users(),
            coin_data: coin_data.as_ref(),
        });

        match &readiness {
            Readiness::Ready => {
                debug!("Configuration ready");
                session.config_error = None;
            }
            Readiness::NotReady(issue) => {
                info!(reason = %issue, "Configuration not ready");
                session.config_error = Some(issue.clone());
            }
        }
        readiness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::collaborators::{StaticCoinData, StaticUsers};

    fn context<'a>(
        settings: &'a MainSettings,
        users: &'a StaticUsers,
        coin: &'a StaticCoinData,
    ) -> ValidationContext<'a> {
        ValidationContext {
            settings,
            users: Some(users),
            coin_data: coin,
        }
    }

    #[test]
    fn rule_order_is_v6_then_v7_then_identity_then_collaborators() {
        let names: Vec<_> = RULES.iter().map(|rule| rule.name()).collect();
        assert_eq!(names.len(), 16);
        assert_eq!(RULES[0], ValidationRule::PathSet(Engine::V6));
        assert_eq!(RULES[6], ValidationRule::PathSet(Engine::V7));
        assert_eq!(RULES[8], ValidationRule::EntryPointPresent(Engine::V7));
        assert_eq!(RULES[12], ValidationRule::NodeNamePresent);
        assert_eq!(RULES[15], ValidationRule::CoinDataAvailable);
    }

    #[test]
    fn empty_settings_fail_on_v6_path() {
        let settings = MainSettings::default();
        let users = StaticUsers::new(vec!["u".into()]);
        let coin = StaticCoinData::available();
        assert_eq!(
            evaluate_rules(&context(&settings, &users, &coin)),
            Readiness::NotReady(ConfigIssue::PathNotConfigured { engine: Engine::V6 })
        );
    }

    #[test]
    fn whitespace_path_counts_as_unset() {
        let settings = MainSettings {
            pbdir: "   ".into(),
            ..MainSettings::default()
        };
        let users = StaticUsers::new(Vec::new());
        let coin = StaticCoinData::available();
        assert_eq!(
            ValidationRule::PathSet(Engine::V6).check(&context(&settings, &users, &coin)),
            Err(ConfigIssue::PathNotConfigured { engine: Engine::V6 })
        );
    }

    #[test]
    fn role_must_match_exactly() {
        let users = StaticUsers::new(Vec::new());
        let coin = StaticCoinData::available();
        for role in ["", "Master", "primary"] {
            let settings = MainSettings {
                role: role.into(),
                ..MainSettings::default()
            };
            assert_eq!(
                ValidationRule::RoleRecognized.check(&context(&settings, &users, &coin)),
                Err(ConfigIssue::RoleInvalid)
            );
        }
        let settings = MainSettings {
            role: "slave".into(),
            ..MainSettings::default()
        };
        assert!(ValidationRule::RoleRecognized
            .check(&context(&settings, &users, &coin))
            .is_ok());
    }

    #[test]
    fn missing_user_registry_means_no_users() {
        let settings = MainSettings::default();
        let coin = StaticCoinData::available();
        let ctx = ValidationContext {
            settings: &settings,
            users: None,
            coin_data: &coin,
        };
        assert_eq!(
            ValidationRule::UsersConfigured.check(&ctx),
            Err(ConfigIssue::NoUsers)
        );
    }

    #[test]
    fn coin_data_errors_are_not_ready() {
        let settings = MainSettings::default();
        let users = StaticUsers::new(Vec::new());
        for coin in [StaticCoinData::unavailable(), StaticCoinData::failing()] {
            assert_eq!(
                ValidationRule::CoinDataAvailable.check(&context(&settings, &users, &coin)),
                Err(ConfigIssue::CoinDataUnavailable)
            );
        }
    }

    #[test]
    fn node_name_blank_fails() {
        let settings = MainSettings {
            pbname: " ".into(),
            ..MainSettings::default()
        };
        let users = StaticUsers::new(Vec::new());
        let coin = StaticCoinData::available();
        assert_eq!(
            ValidationRule::NodeNamePresent.check(&context(&settings, &users, &coin)),
            Err(ConfigIssue::NodeNameMissing)
        );
    }
}
