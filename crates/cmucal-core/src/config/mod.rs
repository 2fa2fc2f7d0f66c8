use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

pub const ENV_PREFIX: &str = "CMUCAL";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub recurrence: RecurrenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// IANA name used when a request does not carry its own timezone.
    pub default_timezone: String,
    pub pretty_output: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `config.toml` (optional) and `CMUCAL__*` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing or validating it fails.
    pub fn load() -> CoreResult<Self> {
        Self::layered(
            config::File::with_name(CONFIG_FILE).required(false),
            Self::environment(),
        )
    }

    /// ## Summary
    /// Builds settings from an inline TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or fails validation.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        let config = Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .ignore_empty(true)
            .try_parsing(true)
    }

    /// Defaults, then `file`, then `env`; later sources win.
    fn layered<F>(file: F, env: config::Environment) -> CoreResult<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = Self::defaults()?.add_source(file).add_source(env).build()?;

        Self::finish(config)
    }

    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("recurrence.default_timezone", "America/New_York")?
            .set_default("recurrence.pretty_output", true)?)
    }

    fn finish(config: Config) -> CoreResult<Self> {
        let settings = config.try_deserialize::<Self>()?;
        settings.validate()?;
        tracing::debug!(
            level = %settings.logging.level,
            timezone = %settings.recurrence.default_timezone,
            "Settings resolved"
        );
        Ok(settings)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        if self.recurrence.default_timezone.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "recurrence.default_timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from the environment, `.env` file and `config.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
