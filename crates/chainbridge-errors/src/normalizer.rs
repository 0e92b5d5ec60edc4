//! `ErrorNormalizer` is the terminal step between a failed downstream call and
//! the response sent back to the page.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chainbridge_core::{Eip1193ErrorPayload, ErrorSink, TracingSink};
use serde_json::Value;

use crate::body::parse_rpc_error_body;
use crate::classify::RawFailure;

const RECORD_DESCRIPTION: &str = "error processing request";

/// Normalizer with an injected diagnostics sink.
///
/// # Usage
/// ```rust
/// use chainbridge_errors::ErrorNormalizer;
/// use serde_json::json;
///
/// let normalizer = ErrorNormalizer::new();
/// let err = normalizer.normalize(&json!({ "body": "{\"error\":{\"message\":\"insufficient funds\"}}" }));
/// assert_eq!(err.code, 4001);
/// assert_eq!(err.message, "Insufficient funds");
/// ```
#[derive(Clone)]
pub struct ErrorNormalizer {
    sink: Arc<dyn ErrorSink>,
}

impl ErrorNormalizer {
    /// Create a normalizer that records raw failures through `tracing`.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    /// Create a normalizer with a custom sink (for testing or forwarding).
    pub fn with_sink(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink }
    }

    pub fn normalize(&self, raw: &Value) -> Eip1193ErrorPayload {
        normalize(raw, self.sink.as_ref())
    }
}

impl Default for ErrorNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ErrorNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorNormalizer").finish_non_exhaustive()
    }
}

/// Normalize `raw` into a canonical EIP-1193 error. Never fails.
///
/// `raw` is handed to `sink` first; a sink that panics is contained and does
/// not change the result.
pub fn normalize(raw: &Value, sink: &dyn ErrorSink) -> Eip1193ErrorPayload {
    record(sink, raw);

    let failure = RawFailure::classify(raw);
    let resolved = match failure {
        RawFailure::Provider(payload) => Eip1193ErrorPayload::from_value(payload),
        RawFailure::Body(body) | RawFailure::NestedBody(body) => parse_rpc_error_body(body),
        RawFailure::Unrecognized => None,
    };

    match resolved {
        Some(err) => {
            tracing::trace!(kind = failure.kind(), code = err.code, "normalized raw failure");
            err
        }
        None => {
            tracing::debug!(kind = failure.kind(), "no usable error payload, using user-rejected");
            Eip1193ErrorPayload::user_rejected()
        }
    }
}

fn record(sink: &dyn ErrorSink, raw: &Value) {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| sink.record(RECORD_DESCRIPTION, raw)));
    if outcome.is_err() {
        tracing::warn!("error sink panicked while recording; ignoring");
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
