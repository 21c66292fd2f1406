//! Metadata of the exported OpenAPI document.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_title() -> String {
    String::from("System Management API")
}

fn default_version() -> String {
    String::from("1.0.0")
}

fn default_servers() -> Vec<String> {
    vec![String::from("http://localhost:8080/api/v1")]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// `info.title` of the exported document.
    #[serde(default = "default_title")]
    pub title: String,

    /// `info.version` of the exported document.
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional `info.description`; omitted when empty.
    #[serde(default)]
    pub description: String,

    /// Base URLs listed under `servers`.
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            version: default_version(),
            description: String::new(),
            servers: default_servers(),
        }
    }
}

impl DocumentConfig {
    /// Reject metadata that would produce an invalid `info` object.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `title` or `version` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "document.title".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "document.version".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
