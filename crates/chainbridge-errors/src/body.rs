//! Extraction of node error messages from raw JSON-RPC response bodies.
//!
//! ethers-style transports attach the node's response text as `body`, e.g.
//! `{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"nonce too low"}}`.

use chainbridge_core::{Eip1193ErrorPayload, USER_REJECTED_REQUEST};
use serde_json::Value;

/// Parse a response body and re-code its error as `4001`.
///
/// Pages only display errors carrying the user-rejected code, so the node's
/// own code is dropped and only its message is kept.
///
/// Returns `None` when `body` is not a string, is not valid JSON, has no
/// `error` object, or carries a non-string `message`. A parsed error without a
/// message (or with an empty one) yields the default user-rejected payload.
pub fn parse_rpc_error_body(body: &Value) -> Option<Eip1193ErrorPayload> {
    let text = body.as_str()?;
    let parsed: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(e) => {
            tracing::trace!(error = %e, "response body is not valid JSON");
            return None;
        }
    };
    let error = parsed.get("error")?.as_object()?;

    let message = match error.get("message") {
        None | Some(Value::Null) => "",
        Some(Value::String(m)) => m.as_str(),
        Some(_) => return None,
    };
    if message.is_empty() {
        return Some(Eip1193ErrorPayload::user_rejected());
    }
    Some(Eip1193ErrorPayload::new(
        USER_REJECTED_REQUEST.code,
        capitalize_first(message),
    ))
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn capitalizes_only_first_char() {
        assert_eq!(capitalize_first("insufficient funds"), "Insufficient funds");
        assert_eq!(capitalize_first("already Capitalized"), "Already Capitalized");
        assert_eq!(capitalize_first("0x revert"), "0x revert");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn node_message_is_recoded_to_4001() {
        let b = body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"nonce too low"}}"#);
        let e = parse_rpc_error_body(&b).unwrap();
        assert_eq!(e, Eip1193ErrorPayload::new(4001, "Nonce too low"));
    }

    #[test]
    fn missing_or_empty_message_gives_default() {
        let b = body(r#"{"error":{"code":-32000}}"#);
        assert_eq!(parse_rpc_error_body(&b), Some(Eip1193ErrorPayload::user_rejected()));

        let b = body(r#"{"error":{"message":""}}"#);
        assert_eq!(parse_rpc_error_body(&b), Some(Eip1193ErrorPayload::user_rejected()));
    }

    #[test]
    fn unusable_bodies_yield_none() {
        assert_eq!(parse_rpc_error_body(&body("not valid json")), None);
        assert_eq!(parse_rpc_error_body(&body(r#"{"result":"0x1"}"#)), None);
        assert_eq!(parse_rpc_error_body(&body(r#"{"error":"boom"}"#)), None);
        assert_eq!(parse_rpc_error_body(&body(r#"{"error":{"message":12}}"#)), None);
        assert_eq!(parse_rpc_error_body(&json!({ "error": {} })), None);
        assert_eq!(parse_rpc_error_body(&json!(null)), None);
    }
}
