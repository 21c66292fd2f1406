//! # sysapi-config
//!
//! Layered configuration loading for sysapi using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYSAPI_*` prefix, `__` as separator)
//! 2. Project-level `.sysapi/config.toml`
//! 3. User-level `~/.config/sysapi/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYSAPI_DOCUMENT__TITLE` -> `document.title` and
//! `SYSAPI_REGISTRY__STRICT_CATEGORIES` -> `registry.strict_categories`.
//!
//! # Usage
//!
//! ```no_run
//! use sysapi_config::SysapiConfig;
//!
//! let config = SysapiConfig::load_with_dotenv().expect("config");
//! println!("Exporting {} v{}", config.document.title, config.document.version);
//! ```

mod document;
mod error;
mod registry;

pub use document::DocumentConfig;
pub use error::ConfigError;
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".sysapi/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SysapiConfig {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl SysapiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.document.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SYSAPI_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sysapi").join("config.toml"))
    }

    /// Load `.env` from the current directory or one of its parents.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
