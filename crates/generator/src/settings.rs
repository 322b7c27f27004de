use crate::error::{GeneratorErrorExt, Result};
use crate::variables::DEFAULT_RULE_FQN_PATTERN;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "rgen.toml";

/// Prefix of environment overrides, e.g. `RGEN__REGISTRATION__SET_FILE`.
pub const ENV_PREFIX: &str = "RGEN";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub registration: RegistrationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
    /// Set file new rules are registered in.
    pub set_file: Option<PathBuf>,
    pub fqn_pattern: String,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self { set_file: None, fqn_pattern: DEFAULT_RULE_FQN_PATTERN.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// Enables file logging into this directory.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}

/// Loads settings from defaults, a TOML file and `RGEN__`-prefixed environment variables,
/// later sources overriding earlier ones.
///
/// Without `path`, [`DEFAULT_SETTINGS_FILE`] is used when it exists. An explicit `path` must
/// exist.
///
/// # Errors
/// Returns [`crate::GeneratorError::Settings`] when the file is missing or malformed, or a
/// value has the wrong type.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    build_settings(path, environment())
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

fn build_settings(path: Option<&Path>, environment: Environment) -> Result<Settings> {
    let file = path.map_or_else(
        || File::from(Path::new(DEFAULT_SETTINGS_FILE)).required(false),
        |path| File::from(path).required(true),
    );

    info!(path = %path.unwrap_or(Path::new(DEFAULT_SETTINGS_FILE)).display(), "Loading settings");

    Config::builder()
        .add_source(file)
        .add_source(environment)
        .build()
        .context("Failed to build settings")?
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
