//! EIP-1193 provider error codes and the canonical error payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ─── Error-code table ─────────────────────────────────────────────────────────

/// One row of the EIP-1193 provider error-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eip1193ErrorCode {
    /// Table key (e.g. `"userRejectedRequest"`).
    pub name: &'static str,
    /// Numeric error code sent to the page.
    pub code: i64,
    /// Default human-readable message for this code.
    pub message: &'static str,
}

/// The user rejected the request. Also the bridge's fallback for any failure
/// it cannot classify.
pub const USER_REJECTED_REQUEST: Eip1193ErrorCode = Eip1193ErrorCode {
    name: "userRejectedRequest",
    code: 4001,
    message: "User Rejected Request",
};

pub const UNAUTHORIZED: Eip1193ErrorCode = Eip1193ErrorCode {
    name: "unauthorized",
    code: 4100,
    message: "The requested method and/or account has not been authorized by the user.",
};

pub const UNSUPPORTED_METHOD: Eip1193ErrorCode = Eip1193ErrorCode {
    name: "unsupportedMethod",
    code: 4200,
    message: "The Provider does not support the requested method.",
};

pub const DISCONNECTED: Eip1193ErrorCode = Eip1193ErrorCode {
    name: "disconnected",
    code: 4900,
    message: "The Provider is disconnected from all chains.",
};

pub const CHAIN_DISCONNECTED: Eip1193ErrorCode = Eip1193ErrorCode {
    name: "chainDisconnected",
    code: 4901,
    message: "The Provider is not connected to the requested chain.",
};

/// Every code a page is guaranteed to understand.
pub const EIP1193_ERROR_CODES: &[Eip1193ErrorCode] = &[
    USER_REJECTED_REQUEST,
    UNAUTHORIZED,
    UNSUPPORTED_METHOD,
    DISCONNECTED,
    CHAIN_DISCONNECTED,
];

/// Find the table row for a numeric code.
pub fn lookup_code(code: i64) -> Option<&'static Eip1193ErrorCode> {
    EIP1193_ERROR_CODES.iter().find(|c| c.code == code)
}

/// Read a JSON number as an integral error code.
///
/// `4100.0` is accepted the same as `4100`; fractional values are not codes.
fn integral_code(value: &Value) -> Option<i64> {
    if let Some(code) = value.as_i64() {
        return Some(code);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Returns `true` if `value` is shaped like a provider error:
/// an object whose `code` is in the table and whose `message` is a string.
pub fn is_eip1193_error(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let known_code = obj
        .get("code")
        .and_then(integral_code)
        .is_some_and(|code| lookup_code(code).is_some());
    known_code && obj.get("message").is_some_and(Value::is_string)
}

// ─── Payload ──────────────────────────────────────────────────────────────────

/// The canonical error returned to the requesting page.
///
/// Built fresh for every failure and serialized straight onto the bridge's
/// response channel. Keys beyond `code` and `message` (`data`, `stack`, ...)
/// live in `extra` and are written back exactly as received, so an explicit
/// `"data": null` stays distinct from a missing `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eip1193ErrorPayload {
    pub code: i64,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Eip1193ErrorPayload {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            extra: Map::new(),
        }
    }

    /// The fixed `4001 "User Rejected Request"` fallback.
    pub fn user_rejected() -> Self {
        USER_REJECTED_REQUEST.into()
    }

    /// Read a compliant provider error out of a JSON value, keeping every
    /// key other than `code` and `message` untouched.
    ///
    /// Returns `None` unless [`is_eip1193_error`] holds for `value`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_eip1193_error(value) {
            return None;
        }
        let mut obj = value.as_object()?.clone();
        let code = obj.remove("code").as_ref().and_then(integral_code)?;
        let message = match obj.remove("message") {
            Some(Value::String(m)) => m,
            _ => return None,
        };
        Some(Self {
            code,
            message,
            extra: obj,
        })
    }

    /// The upstream `data` member, if one was sent (possibly `null`).
    pub fn data(&self) -> Option<&Value> {
        self.extra.get("data")
    }

    /// Returns `true` if the code is part of the EIP-1193 table.
    pub fn is_standard(&self) -> bool {
        lookup_code(self.code).is_some()
    }
}

impl From<Eip1193ErrorCode> for Eip1193ErrorPayload {
    fn from(c: Eip1193ErrorCode) -> Self {
        Self::new(c.code, c.message)
    }
}

impl fmt::Display for Eip1193ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EIP-1193 error {}: {}", self.code, self.message)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_rejected_is_4001() {
        let e = Eip1193ErrorPayload::user_rejected();
        assert_eq!(e.code, 4001);
        assert_eq!(e.message, "User Rejected Request");
        assert!(e.extra.is_empty());
    }

    #[test]
    fn table_codes_are_unique() {
        for (i, a) in EIP1193_ERROR_CODES.iter().enumerate() {
            for b in &EIP1193_ERROR_CODES[i + 1..] {
                assert_ne!(a.code, b.code, "{} and {} share a code", a.name, b.name);
            }
        }
    }

    #[test]
    fn recognizes_known_code_with_string_message() {
        assert!(is_eip1193_error(&json!({ "code": 4100, "message": "nope" })));
        assert!(!is_eip1193_error(&json!({ "code": -32000, "message": "nope" })));
        assert!(!is_eip1193_error(&json!({ "code": 4001, "message": 7 })));
        assert!(!is_eip1193_error(&json!({ "code": 4001 })));
        assert!(!is_eip1193_error(&json!("4001")));
    }

    #[test]
    fn from_value_keeps_data() {
        let v = json!({ "code": 4200, "message": "no such method", "data": { "method": "foo" } });
        let e = Eip1193ErrorPayload::from_value(&v).unwrap();
        assert_eq!(e.code, 4200);
        assert_eq!(e.data(), Some(&json!({ "method": "foo" })));
    }

    #[test]
    fn from_value_keeps_unknown_keys_and_null_data() {
        let v = json!({
            "code": 4001,
            "message": "User Rejected Request",
            "data": null,
            "stack": "Error: at x"
        });
        let e = Eip1193ErrorPayload::from_value(&v).unwrap();
        assert_eq!(e.data(), Some(&Value::Null));
        assert_eq!(e.extra.get("stack"), Some(&json!("Error: at x")));
        assert_eq!(serde_json::to_value(&e).unwrap(), v);
    }

    #[test]
    fn integral_float_codes_are_recognized() {
        let v = json!({ "code": 4100.0, "message": "not authorized" });
        assert!(is_eip1193_error(&v));
        assert_eq!(Eip1193ErrorPayload::from_value(&v).unwrap().code, 4100);
        assert!(!is_eip1193_error(&json!({ "code": 4100.5, "message": "x" })));
    }

    #[test]
    fn serialization_omits_missing_data() {
        let json = serde_json::to_string(&Eip1193ErrorPayload::user_rejected()).unwrap();
        assert_eq!(json, r#"{"code":4001,"message":"User Rejected Request"}"#);
    }

    #[test]
    fn display() {
        let e = Eip1193ErrorPayload::new(4900, "gone");
        assert_eq!(e.to_string(), "EIP-1193 error 4900: gone");
    }
}
