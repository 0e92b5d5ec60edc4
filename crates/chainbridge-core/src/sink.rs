//! The logging port used by error normalization.

use serde_json::Value;

/// Receives `(description, raw_error)` pairs for diagnostics.
///
/// Recording is best-effort: callers must not let a failing sink change
/// what they return. Implementations must be `Send + Sync` so a single sink
/// can be shared across bridge handlers.
pub trait ErrorSink: Send + Sync {
    fn record(&self, description: &str, raw: &Value);
}

/// Forwards every record to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn record(&self, description: &str, raw: &Value) {
        tracing::debug!(target: "chainbridge::errors", raw = %raw, "{description}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ErrorSink for NoopSink {
    fn record(&self, _description: &str, _raw: &Value) {}
}
