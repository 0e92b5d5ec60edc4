//! Up-front classification of a raw failure value.

use serde_json::Value;

/// The shapes a raw failure can take, decided once by field presence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawFailure<'a> {
    /// The value of an `eip1193Error` field.
    Provider(&'a Value),
    /// The value of a top-level `body` field.
    Body(&'a Value),
    /// The value of `error.body`.
    NestedBody(&'a Value),
    /// Not an object, or an object with none of the fields above.
    Unrecognized,
}

impl<'a> RawFailure<'a> {
    /// Classify `raw`, checking `eip1193Error`, then `body`, then `error`.
    ///
    /// A present field selects its variant even when its content later turns
    /// out to be unusable; there is no fall-through to the next field.
    pub fn classify(raw: &'a Value) -> Self {
        let Some(obj) = raw.as_object() else {
            return Self::Unrecognized;
        };
        if let Some(payload) = obj.get("eip1193Error") {
            Self::Provider(payload)
        } else if let Some(body) = obj.get("body") {
            Self::Body(body)
        } else if let Some(body) = obj.get("error").and_then(|e| e.get("body")) {
            Self::NestedBody(body)
        } else {
            Self::Unrecognized
        }
    }

    /// Short name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Provider(_) => "provider",
            Self::Body(_) => "body",
            Self::NestedBody(_) => "nested_body",
            Self::Unrecognized => "unrecognized",
        }
    }
}
