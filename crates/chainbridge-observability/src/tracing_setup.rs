//! Tracing / logging initialisation helpers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level per component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Global default level: "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// Override per component: crate name → level
    #[serde(default)]
    pub components: BTreeMap<String, String>,
    /// Emit JSON structured logs (true) or human-readable text (false)
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: BTreeMap::new(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Build the `EnvFilter` directive string, e.g. `"info,chainbridge_errors=debug"`.
    pub fn directives(&self) -> String {
        let mut directives = self.level.clone();
        for (component, level) in &self.components {
            directives.push_str(&format!(",{}={}", component.replace('-', "_"), level));
        }
        directives
    }
}

/// Initialise tracing with the given log config.
/// Should be called once at application startup; later calls are ignored.
pub fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_new(config.directives())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so command output on stdout stays machine-readable.
    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_json() {
        let cfg: LogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, LogConfig::default());
        assert_eq!(cfg.directives(), "info");
    }

    #[test]
    fn component_overrides_use_crate_names() {
        let cfg: LogConfig = serde_json::from_str(
            r#"{ "level": "warn", "components": { "chainbridge-errors": "trace" } }"#,
        )
        .unwrap();
        assert_eq!(cfg.directives(), "warn,chainbridge_errors=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing(&LogConfig::default());
        init_tracing(&LogConfig { json: true, ..LogConfig::default() });
    }
}
