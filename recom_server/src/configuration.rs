use config::{Config, ConfigError, Environment, Map};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Environment variable holding the application secret key
pub const SECRET_KEY_VAR: &str = "SECRET_KEY";

/// Prefix of the environment variables overriding the rest of the settings,
/// e.g. `RECOMSERVER__APPLICATION__PORT=9000`
pub const ENV_PREFIX: &str = "RECOMSERVER";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Never empty, an empty `SECRET_KEY` is treated as missing
    #[serde(default)]
    pub secret_key: Option<SecretString>,
    pub application: ApplicationSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// When set, a missing secret key aborts startup instead of being logged
    pub require_secret_key: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    pub service_name: String,
    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
    pub jaeger_enabled: bool,
}

impl Settings {
    /// Reads settings from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Reads settings from the given variables, or from the process environment when `None`
    pub fn load_from(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let secret_key = match &vars {
            Some(vars) => vars.get(SECRET_KEY_VAR).cloned(),
            None => std::env::var(SECRET_KEY_VAR).ok(),
        }
        .filter(|secret_key| !secret_key.is_empty());

        Config::builder()
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 8080)?
            .set_default("application.require_secret_key", false)?
            .set_default("telemetry.service_name", "recom_server")?
            .set_default("telemetry.log_filter", "info")?
            .set_default("telemetry.jaeger_enabled", false)?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .set_override_option("secret_key", secret_key)?
            .build()?
            .try_deserialize::<Self>()
            .map(Self::without_empty_secret_key)
    }

    // `RECOMSERVER__SECRET_KEY` reaches `secret_key` through the prefixed source too
    fn without_empty_secret_key(mut self) -> Self {
        self.secret_key = self
            .secret_key
            .filter(|secret_key| !secret_key.expose_secret().is_empty());
        self
    }
}

/// Loads variables from `.env` in the current directory or its parents.
/// A missing file is not an error, a malformed one is.
pub fn load_dotenv() -> Result<(), dotenvy::Error> {
    ignore_missing_dotenv(dotenvy::dotenv().map(|_| ()))
}

/// Same as [`load_dotenv`] for a specific file
pub fn load_dotenv_from(path: impl AsRef<std::path::Path>) -> Result<(), dotenvy::Error> {
    ignore_missing_dotenv(dotenvy::from_path(path))
}

fn ignore_missing_dotenv(result: Result<(), dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match result {
        Err(err) if err.not_found() => {
            tracing::debug!("No .env file found");
            Ok(())
        }
        result => result,
    }
}
