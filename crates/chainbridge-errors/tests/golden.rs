//! Golden fixture integration tests for chainbridge-errors.
//!
//! Each fixture in `fixtures/errors/` holds a `raw` failure value as surfaced
//! by a transport or provider, and the `expected` canonical error.

use chainbridge_core::{Eip1193ErrorPayload, NoopSink};
use chainbridge_errors::{normalize, ErrorNormalizer};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/errors");
    p.push(name);
    p
}

fn load_fixture(name: &str) -> serde_json::Value {
    let content =
        std::fs::read_to_string(fixture_path(name)).expect("fixture not found");
    serde_json::from_str(&content).expect("invalid fixture JSON")
}

fn check_fixture(name: &str) {
    let f = load_fixture(name);
    let expected: Eip1193ErrorPayload =
        serde_json::from_value(f["expected"].clone()).expect("invalid expected payload");
    let actual = normalize(&f["raw"], &NoopSink);
    assert_eq!(actual, expected, "{name}: {}", f["description"]);
}

// ─── Pass-through ─────────────────────────────────────────────────────────────

#[test]
fn golden_provider_pass_through() {
    check_fixture("provider-pass-through.json");
}

#[test]
fn golden_provider_unauthorized() {
    check_fixture("provider-unauthorized.json");
}

#[test]
fn golden_provider_verbatim() {
    check_fixture("provider-verbatim.json");
    let f = load_fixture("provider-verbatim.json");
    let wire = serde_json::to_value(normalize(&f["raw"], &NoopSink)).unwrap();
    assert_eq!(wire, f["raw"]["eip1193Error"]);
}

// ─── Transport bodies ─────────────────────────────────────────────────────────

#[test]
fn golden_body_insufficient_funds() {
    check_fixture("body-insufficient-funds.json");
}

#[test]
fn golden_nested_body_nonce() {
    check_fixture("nested-body-nonce.json");
}

#[test]
fn golden_ethers_server_error() {
    check_fixture("ethers-server-error.json");
}

// ─── Defaults ─────────────────────────────────────────────────────────────────

#[test]
fn golden_body_malformed() {
    check_fixture("body-malformed.json");
}

#[test]
fn golden_body_without_message() {
    check_fixture("body-without-message.json");
}

#[test]
fn golden_unknown_shape() {
    check_fixture("unknown-shape.json");
}

#[test]
fn canonical_error_serializes_for_the_page() {
    let f = load_fixture("body-insufficient-funds.json");
    let err = ErrorNormalizer::default().normalize(&f["raw"]);
    let wire = serde_json::to_string(&err).unwrap();
    assert_eq!(wire, r#"{"code":4001,"message":"Insufficient funds"}"#);
}
