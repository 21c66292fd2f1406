//! Schema registry checks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Treat unclassified schemas and category drift as errors.
    #[serde(default)]
    pub strict_categories: bool,
}
