//! [`Config`]-related definitions.

use std::path::PathBuf;

use common::{Money, Percent};
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::cart;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Pricing configuration.
    #[serde(default)]
    pub pricing: Pricing,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: Catalog,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        let config: Self = ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()?;

        if config.pricing.documentation_fee.is_negative() {
            return Err(ConfigError::Message(
                "`pricing.documentation_fee` must not be negative".into(),
            ));
        }

        Ok(config)
    }
}

/// Pricing configuration of cart totals.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Pricing {
    /// Fixed documentation fee, also defining the currency of the totals.
    #[default(cart::Pricing::default().documentation_fee)]
    pub documentation_fee: Money,

    /// Estimated transfer tax, as a share of the subtotal.
    #[default(cart::Pricing::default().transfer_tax)]
    pub transfer_tax: Percent,
}

impl From<Pricing> for service::Config {
    fn from(value: Pricing) -> Self {
        let Pricing {
            documentation_fee,
            transfer_tax,
        } = value;

        Self {
            pricing: cart::Pricing {
                documentation_fee,
                transfer_tax,
            },
        }
    }
}

/// Catalog configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Path to a catalog file replacing the built-in one.
    ///
    /// Its format is detected by the extension (`toml`, `json`, `yaml`).
    pub path: Option<PathBuf>,
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
///
/// Defaults to [`LogLevel::Warn`] so the log doesn't interleave with the
/// rendered views.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Config, Pricing};

    #[test]
    fn defaults_without_file() {
        let config = Config::new("definitely/missing/config").unwrap();

        assert_eq!(config.pricing.documentation_fee.to_string(), "5000BRL");
        assert_eq!(config.pricing.transfer_tax.to_string(), "2%");
        assert!(config.catalog.path.is_none());
        assert_eq!(tracing::Level::from(config.log.level), tracing::Level::WARN);
    }

    #[test]
    fn converts_into_service_config() {
        let service::Config { pricing } = Pricing::default().into();

        assert_eq!(pricing.currency().to_string(), "BRL");
    }
}
