//! Acceptance tests for looking up a single code or header
//!
//! Test scenarios:
//! 1. A known status code opens its manual page
//! 2. Header names are matched case-insensitively
//! 3. Leading zeros and surrounding whitespace are ignored
//! 4. Unknown tokens never reach the interactive view

use crate::model::LookupError;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn known_code_shows_manual_page() {
    let mut harness =
        AcceptanceTestHarness::from_token("200", 80, 30).expect("200 is in the table");

    let output = harness.render_to_string();

    assert!(output.contains("STATCODE: The Manual for HTTP Status Codes"));
    assert!(output.contains("STATUS MESSAGE"));
    assert!(output.contains("      200: OK"));
    assert!(output.contains("      Success"));
    assert!(output.contains("DESCRIPTION"));
}

#[test]
fn teapot_is_a_client_error() {
    let mut harness =
        AcceptanceTestHarness::from_token("418", 80, 30).expect("418 is in the table");

    let output = harness.render_to_string();

    assert!(output.contains("418: I'm a teapot"));
    assert!(output.contains("Client Error"));
}

#[test]
fn header_lookup_ignores_case() {
    let mut lower = AcceptanceTestHarness::from_token("cache-control", 80, 30).unwrap();
    let mut mixed = AcceptanceTestHarness::from_token("Cache-Control", 80, 30).unwrap();

    let lower_output = lower.render_to_string();
    let mixed_output = mixed.render_to_string();

    // Same entry; only the echoed key differs
    assert_eq!(
        lower_output.replace("cache-control:", "KEY:"),
        mixed_output.replace("Cache-Control:", "KEY:")
    );
}

#[test]
fn leading_zeros_resolve_to_same_code() {
    let mut harness = AcceptanceTestHarness::from_token(" 0404 ", 80, 30).unwrap();
    let output = harness.render_to_string();
    assert!(output.contains("0404: Not Found"));
}

#[test]
fn unknown_code_is_not_found() {
    let result = AcceptanceTestHarness::from_token("999", 80, 30);
    assert!(matches!(
        result,
        Err(LookupError::NotFound { ref token }) if token == "999"
    ));
}

#[test]
fn unknown_word_is_not_found() {
    assert!(matches!(
        AcceptanceTestHarness::from_token("invalid_parameter", 80, 30),
        Err(LookupError::NotFound { .. })
    ));
}

#[test]
fn q_quits_the_manual_page() {
    let mut harness = AcceptanceTestHarness::from_token("404", 80, 30).unwrap();
    harness.render_to_string();

    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}
