// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON envelope handling in --json mode.

use crate::prelude::*;

#[test]
fn json_mode_prints_only_the_response_text() {
    ask("json")
        .args(&["--json", "prompt text"])
        .passes()
        .stdout_is("stub response");
}

#[test]
fn invalid_json_warns_and_keeps_raw_output_recoverable() {
    ask("invalid-json")
        .args(&["--json", "prompt text"])
        .fails_with(1)
        .stderr_has("Warning: Claude did not return valid JSON")
        .stdout_is("not-json");
}

#[test]
fn missing_response_field_warns_and_keeps_raw_output() {
    ask("json-missing-response")
        .args(&["--json", "prompt text"])
        .fails_with(1)
        .stderr_has("missing required .response field")
        .stdout_is(r#"{"ok":true}"#);
}

#[test]
fn without_json_flag_the_envelope_passes_through_raw() {
    ask("json")
        .args(&["prompt text"])
        .passes()
        .stdout_is(r#"{"response":"stub response"}"#);
}
