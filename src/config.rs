//! Configuration for a project analysis run

use serde::{Deserialize, Serialize};

/// Analysis settings
///
/// Every field defaults to on, so `{}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Extract files on the rayon pool instead of one after another
    #[serde(default = "default_enabled")]
    pub parallel: bool,

    /// Run the inheritance resolver after aggregation
    #[serde(default = "default_enabled")]
    pub resolve_inheritance: bool,

    /// Run the method-usage resolver after aggregation
    #[serde(default = "default_enabled")]
    pub resolve_method_usages: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            parallel: default_enabled(),
            resolve_inheritance: default_enabled(),
            resolve_method_usages: default_enabled(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
