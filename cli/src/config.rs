//! CLI configuration file.

use std::path::Path;

use chainbridge_observability::LogConfig;
use serde::{Deserialize, Serialize};

/// Top-level `--config` file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&content).map_err(|e| format!("invalid config {}: {e}", path.display()))
    }
}
